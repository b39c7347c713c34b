use anyhow::Context;
use user_service::prelude::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;
    init_tracing(&config).context("failed to initialize tracing")?;

    ServiceBuilder::new()
        .with_config(config)
        .build()
        .serve()
        .await
        .context("server exited with an error")?;

    Ok(())
}

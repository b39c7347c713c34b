//! # user-service
//!
//! A small HTTP service that keeps a list of users in process memory.
//!
//! Two operations are exposed under `/users`:
//!
//! - `GET /users` lists every user in insertion order
//! - `POST /users` adds a user after checking that `name` and `email` are present
//!
//! Liveness (`/health`) and readiness (`/ready`) checks, request IDs, structured
//! JSON logs and graceful shutdown come with the service.
//!
//! ## Example
//!
//! ```rust,no_run
//! use user_service::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = Config::load()?;
//!     init_tracing(&config)?;
//!
//!     ServiceBuilder::new()
//!         .with_config(config)
//!         .build()
//!         .serve()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod health;
pub mod ids;
pub mod middleware;
pub mod model;
pub mod observability;
pub mod server;
pub mod service_builder;
pub mod state;
pub mod store;
pub mod users;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::{Config, MiddlewareConfig, ServiceConfig};
    pub use crate::error::{Error, ErrorResponse, Result, ValidationError};
    pub use crate::health::{health, readiness};
    pub use crate::ids::{MakeTypedRequestId, RequestId};
    pub use crate::middleware::{request_id_layer, request_id_propagation_layer, sensitive_headers_layer};
    pub use crate::model::{NewUser, User};
    pub use crate::observability::init_tracing;
    pub use crate::server::Server;
    pub use crate::service_builder::{ServiceBuilder, UserService};
    pub use crate::state::AppState;
    pub use crate::store::UserStore;
    pub use crate::users::{add_user, list_users, UserAdded, UserHandlers, UserList};

    pub use axum::{
        routing::{get, post},
        Json, Router,
    };
}

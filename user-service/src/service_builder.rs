//! Service assembly: routes, state and server in one place
//!
//! ```rust,ignore
//! use user_service::prelude::*;
//!
//! let service = ServiceBuilder::new()
//!     .with_config(Config::load()?)
//!     .build();
//!
//! service.serve().await?;
//! ```

use axum::{routing::get, Router};
use std::net::SocketAddr;

use crate::{
    config::Config,
    error::Result,
    health::{health, readiness},
    server::Server,
    state::AppState,
    users::{add_user, list_users},
};

/// Routes served by the service, before state is attached
///
/// `/users` carries both user operations; `/health` and `/ready` are health checks.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(add_user))
        .route("/health", get(health))
        .route("/ready", get(readiness))
}

/// Service builder with sensible defaults
///
/// - config: `Config::default()`
/// - state: a fresh `AppState` over an empty user store
pub struct ServiceBuilder {
    config: Option<Config>,
    state: Option<AppState>,
}

impl ServiceBuilder {
    /// Create a new service builder with defaults
    pub fn new() -> Self {
        Self {
            config: None,
            state: None,
        }
    }

    /// Set the service configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Use an existing state, for example one shared with a test
    pub fn with_state(mut self, state: AppState) -> Self {
        self.state = Some(state);
        self
    }

    /// Build the service
    ///
    /// When no state is given, one is created from the config. A given state
    /// keeps its own config for handlers; the server still uses `config`.
    pub fn build(self) -> UserService {
        let config = self.config.unwrap_or_default();
        let state = self
            .state
            .unwrap_or_else(|| AppState::new(config.clone()));

        UserService {
            server: Server::new(config),
            app: routes().with_state(state),
        }
    }
}

impl Default for ServiceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A fully assembled service, ready to serve
pub struct UserService {
    server: Server,
    app: Router,
}

impl UserService {
    /// Serve until SIGINT or SIGTERM, then drain in-flight requests
    pub async fn serve(self) -> Result<()> {
        self.server.serve(self.app).await
    }

    /// The complete router, middleware included
    pub fn router(&self) -> Router {
        self.server.apply_middleware(self.app.clone())
    }

    /// Address the service binds to
    pub fn addr(&self) -> SocketAddr {
        self.server.addr()
    }

    /// Get a reference to the service configuration
    pub fn config(&self) -> &Config {
        self.server.config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app() -> Router {
        ServiceBuilder::new().build().router()
    }

    async fn send(app: &Router, request: Request<Body>) -> Response {
        app.clone().oneshot(request).await.unwrap()
    }

    async fn get_users(app: &Router) -> (StatusCode, Value) {
        let response = send(
            app,
            Request::builder().uri("/users").body(Body::empty()).unwrap(),
        )
        .await;
        let status = response.status();
        (status, body_json(response).await)
    }

    async fn post_users(app: &Router, body: Value) -> (StatusCode, Value) {
        let response = send(
            app,
            Request::builder()
                .method(Method::POST)
                .uri("/users")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await;
        let status = response.status();
        (status, body_json(response).await)
    }

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_list_on_fresh_service_is_empty() {
        let (status, body) = get_users(&app()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"users": []}));
    }

    #[tokio::test]
    async fn test_add_then_list() {
        let app = app();

        let (status, body) =
            post_users(&app, json!({"name": "Alice", "email": "alice@example.com"})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "message": "Utilisateur Alice ajouté avec succès !",
                "email": "alice@example.com"
            })
        );

        let (status, body) = get_users(&app).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"users": [{"name": "Alice", "email": "alice@example.com"}]})
        );
    }

    #[tokio::test]
    async fn test_missing_name_is_rejected() {
        let app = app();

        for payload in [
            json!({"email": "bob@example.com"}),
            json!({"name": null, "email": "bob@example.com"}),
            json!({"name": "", "email": "bob@example.com"}),
        ] {
            let (status, body) = post_users(&app, payload).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body, json!({"message": "Nom et email requis"}));
        }

        let (_, body) = get_users(&app).await;
        assert_eq!(body, json!({"users": []}));
    }

    #[tokio::test]
    async fn test_non_string_fields_are_rejected_as_missing() {
        let app = app();

        for payload in [
            json!({"name": 0, "email": "x"}),
            json!({"name": false, "email": "bob@example.com"}),
            json!({"name": "Bob", "email": 123}),
            json!({"name": {"first": "Bob"}, "email": "bob@example.com"}),
        ] {
            let (status, body) = post_users(&app, payload).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body, json!({"message": "Nom et email requis"}));
        }

        let (_, body) = get_users(&app).await;
        assert_eq!(body, json!({"users": []}));
    }

    #[tokio::test]
    async fn test_malformed_json_is_left_to_the_extractor() {
        let response = send(
            &app(),
            Request::builder()
                .method(Method::POST)
                .uri("/users")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{\"name\": "))
                .unwrap(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(response
            .headers()
            .get(header::CONTENT_TYPE)
            .is_some_and(|v| v.to_str().unwrap_or_default().starts_with("text/plain")));
    }

    #[tokio::test]
    async fn test_null_or_empty_email_is_rejected() {
        let app = app();

        for payload in [
            json!({"name": "Bob"}),
            json!({"name": "Bob", "email": null}),
            json!({"name": "Bob", "email": ""}),
        ] {
            let (status, body) = post_users(&app, payload).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body, json!({"message": "Nom et email requis"}));
        }

        let (_, body) = get_users(&app).await;
        assert_eq!(body, json!({"users": []}));
    }

    #[tokio::test]
    async fn test_extra_fields_are_dropped() {
        let app = app();

        let (status, _) = post_users(
            &app,
            json!({"name": "Carol", "email": "carol@example.com", "admin": true}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (_, body) = get_users(&app).await;
        assert_eq!(
            body,
            json!({"users": [{"name": "Carol", "email": "carol@example.com"}]})
        );
    }

    #[tokio::test]
    async fn test_order_is_preserved_without_dedup() {
        let app = app();
        let inputs = [
            ("Alice", "alice@example.com"),
            (" ", "blank@example.com"),
            ("Alice", "alice@example.com"),
        ];

        for (name, email) in inputs {
            let (status, _) = post_users(&app, json!({"name": name, "email": email})).await;
            assert_eq!(status, StatusCode::OK);
        }

        let expected: Vec<Value> = inputs
            .iter()
            .map(|(name, email)| json!({"name": name, "email": email}))
            .collect();
        let (_, body) = get_users(&app).await;
        assert_eq!(body, json!({ "users": expected }));
    }

    #[tokio::test]
    async fn test_health_checks_are_routed() {
        let app = app();

        let response = send(
            &app,
            Request::builder().uri("/health").body(Body::empty()).unwrap(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["service"], "user-service");

        post_users(&app, json!({"name": "Alice", "email": "alice@example.com"})).await;

        let response = send(
            &app,
            Request::builder().uri("/ready").body(Body::empty()).unwrap(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["users"], 1);
    }

    #[tokio::test]
    async fn test_shared_state_is_visible_to_caller() {
        let state = AppState::default();
        let app = ServiceBuilder::new().with_state(state.clone()).build().router();

        post_users(&app, json!({"name": "Dana", "email": "dana@example.com"})).await;

        assert_eq!(state.users().len().await, 1);
    }

    #[test]
    fn test_build_uses_configured_port() {
        let mut config = Config::default();
        config.service.port = 8088;

        let service = ServiceBuilder::new().with_config(config).build();
        assert_eq!(service.addr().port(), 8088);
        assert_eq!(service.config().service.port, 8088);
    }
}

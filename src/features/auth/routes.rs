use crate::features::auth::handlers;
use crate::features::auth::services::AuthService;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

/// Public auth routes (no authentication required)
pub fn public_routes(service: Arc<AuthService>) -> Router {
    Router::new()
        .route("/api/auth/login", post(handlers::login))
        .with_state(service)
}

/// Protected auth routes (require a session token)
pub fn protected_routes(service: Arc<AuthService>) -> Router {
    Router::new()
        .route("/api/auth/me", get(handlers::get_me))
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::AuthConfig;
    use crate::core::middleware::auth_middleware;
    use crate::features::auth::services::TokenService;
    use axum::middleware::from_fn_with_state;
    use axum_test::TestServer;
    use serde_json::{json, Value};
    use std::time::Duration;

    fn test_server() -> TestServer {
        let config = AuthConfig {
            admin_username: "admin".to_string(),
            admin_password: "password".to_string(),
            jwt_secret: "test-secret".to_string(),
            token_ttl: Duration::from_secs(3600),
        };
        let token_service = Arc::new(TokenService::new(&config.jwt_secret, config.token_ttl));
        let auth_service = Arc::new(AuthService::new(config, Arc::clone(&token_service)));

        let app = public_routes(Arc::clone(&auth_service)).merge(
            protected_routes(auth_service)
                .layer(from_fn_with_state(token_service, auth_middleware)),
        );
        TestServer::new(app).unwrap()
    }

    #[tokio::test]
    async fn login_round_trip_reaches_me() {
        let server = test_server();

        let login = server
            .post("/api/auth/login")
            .json(&json!({"username": "admin", "password": "password"}))
            .await;
        login.assert_status_ok();

        let body: Value = login.json();
        let token = body["data"]["access_token"].as_str().unwrap().to_string();

        let me = server
            .get("/api/auth/me")
            .authorization_bearer(&token)
            .await;
        me.assert_status_ok();

        let me_body: Value = me.json();
        assert_eq!(me_body["data"]["username"], "admin");
    }

    #[tokio::test]
    async fn wrong_credential_is_rejected() {
        let server = test_server();

        let login = server
            .post("/api/auth/login")
            .json(&json!({"username": "admin", "password": "not-the-password"}))
            .await;
        login.assert_status_unauthorized();
    }

    #[tokio::test]
    async fn short_password_fails_validation() {
        let server = test_server();

        let login = server
            .post("/api/auth/login")
            .json(&json!({"username": "admin", "password": "abc"}))
            .await;
        login.assert_status_bad_request();
    }

    #[tokio::test]
    async fn me_without_token_is_unauthorized() {
        let server = test_server();

        let me = server.get("/api/auth/me").await;
        me.assert_status_unauthorized();
    }
}

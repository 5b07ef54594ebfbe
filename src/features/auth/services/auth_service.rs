use std::sync::Arc;

use crate::core::config::AuthConfig;
use crate::core::error::{AppError, Result};
use crate::features::auth::dtos::{LoginRequestDto, LoginResponseDto, MeResponseDto};
use crate::features::auth::models::AdminSession;
use crate::features::auth::services::TokenService;

/// Authenticates the single panel operator against the configured credential.
pub struct AuthService {
    config: AuthConfig,
    token_service: Arc<TokenService>,
}

impl AuthService {
    pub fn new(config: AuthConfig, token_service: Arc<TokenService>) -> Self {
        Self {
            config,
            token_service,
        }
    }

    /// Check the submitted credential and issue a session token on success.
    ///
    /// The rejection message never says which half of the credential was
    /// wrong.
    pub async fn login(&self, dto: LoginRequestDto) -> Result<LoginResponseDto> {
        if dto.username != self.config.admin_username || dto.password != self.config.admin_password
        {
            tracing::warn!(username = %dto.username, "Rejected login attempt");
            return Err(AppError::Auth("Invalid username or password".to_string()));
        }

        let (access_token, expires_in) = self.token_service.issue_token(&dto.username)?;

        tracing::info!(username = %dto.username, "Operator logged in");

        Ok(LoginResponseDto {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in,
        })
    }

    /// Describe the session behind the presented token (for /me).
    pub async fn current_session(&self, session: AdminSession) -> Result<MeResponseDto> {
        Ok(session.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn service() -> AuthService {
        let config = AuthConfig {
            admin_username: "admin".to_string(),
            admin_password: "password".to_string(),
            jwt_secret: "test-secret".to_string(),
            token_ttl: Duration::from_secs(3600),
        };
        let token_service = Arc::new(TokenService::new(&config.jwt_secret, config.token_ttl));
        AuthService::new(config, token_service)
    }

    #[tokio::test]
    async fn valid_credential_yields_bearer_token() {
        let response = service()
            .login(LoginRequestDto {
                username: "admin".to_string(),
                password: "password".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(response.token_type, "Bearer");
        assert_eq!(response.expires_in, 3600);
        assert!(!response.access_token.is_empty());
    }

    #[tokio::test]
    async fn wrong_password_is_rejected() {
        let result = service()
            .login(LoginRequestDto {
                username: "admin".to_string(),
                password: "not-the-password".to_string(),
            })
            .await;

        assert!(matches!(result, Err(AppError::Auth(_))));
    }

    #[tokio::test]
    async fn unknown_username_is_rejected() {
        let result = service()
            .login(LoginRequestDto {
                username: "intruder".to_string(),
                password: "password".to_string(),
            })
            .await;

        assert!(matches!(result, Err(AppError::Auth(_))));
    }
}

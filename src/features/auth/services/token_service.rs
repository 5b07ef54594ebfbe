use crate::core::error::{AppError, Result};
use crate::features::auth::models::AdminSession;
use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Clock skew tolerance when verifying expiry
const LEEWAY_SECS: u64 = 60;

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    iat: i64,
    exp: i64,
}

/// Issues and verifies the HS256 session tokens for the panel operator.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl TokenService {
    pub fn new(secret: &str, ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        }
    }

    /// Issue a session token for the given username.
    ///
    /// Returns the signed token and its lifetime in seconds.
    pub fn issue_token(&self, username: &str) -> Result<(String, i64)> {
        let now = Utc::now().timestamp();
        let expires_in = self.ttl.as_secs() as i64;
        let claims = Claims {
            sub: username.to_string(),
            iat: now,
            exp: now + expires_in,
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(format!("Failed to sign session token: {}", e)))?;

        Ok((token, expires_in))
    }

    /// Verify a session token and recover the admin session it carries.
    pub fn verify_token(&self, token: &str) -> Result<AdminSession> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = LEEWAY_SECS;

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|e| AppError::Auth(format!("Invalid session token: {}", e)))?;

        let claims = token_data.claims;
        Ok(AdminSession {
            username: claims.sub,
            issued_at: claims.iat,
            expires_at: claims.exp,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TokenService {
        TokenService::new("test-secret", Duration::from_secs(3600))
    }

    #[test]
    fn issued_token_round_trips() {
        let svc = service();
        let (token, expires_in) = svc.issue_token("admin").unwrap();
        assert_eq!(expires_in, 3600);

        let session = svc.verify_token(&token).unwrap();
        assert_eq!(session.username, "admin");
        assert_eq!(session.expires_at - session.issued_at, 3600);
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let other = TokenService::new("other-secret", Duration::from_secs(3600));
        let (token, _) = other.issue_token("admin").unwrap();

        assert!(matches!(
            service().verify_token(&token),
            Err(AppError::Auth(_))
        ));
    }

    #[test]
    fn garbage_token_is_rejected() {
        assert!(matches!(
            service().verify_token("not.a.token"),
            Err(AppError::Auth(_))
        ));
    }

    #[test]
    fn expired_token_is_rejected() {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: "admin".to_string(),
            iat: now - 7200,
            exp: now - 3600,
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret("test-secret".as_bytes()),
        )
        .unwrap();

        assert!(matches!(
            service().verify_token(&token),
            Err(AppError::Auth(_))
        ));
    }
}

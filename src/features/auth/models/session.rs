use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The request-scoped principal for the single panel operator.
///
/// Produced by the auth middleware from a verified session token and
/// pulled out of request extensions by the extractor.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AdminSession {
    pub username: String,
    /// Unix timestamp the token was issued at
    pub issued_at: i64,
    /// Unix timestamp the token expires at
    pub expires_at: i64,
}

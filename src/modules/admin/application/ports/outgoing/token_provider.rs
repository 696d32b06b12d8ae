use serde::{Deserialize, Serialize};

/// Claims carried by an admin session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminClaims {
    pub role: String,
    pub exp: i64,
    pub iat: i64,
    pub nbf: i64,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TokenError {
    #[error("Token has expired")]
    TokenExpired,

    #[error("Token is not yet valid")]
    TokenNotYetValid,

    #[error("Invalid token signature")]
    InvalidSignature,

    #[error("Malformed token")]
    MalformedToken,

    #[error("Token role mismatch, expected: {0}")]
    InvalidRole(String),

    #[error("Token encoding error: {0}")]
    EncodingError(String),
}

pub trait TokenProvider: Send + Sync {
    /// Issue a signed admin session token.
    fn generate_admin_token(&self) -> Result<String, TokenError>;

    /// Verify signature and time claims, returning the decoded claims.
    fn verify_token(&self, token: &str) -> Result<AdminClaims, TokenError>;
}

//! Access token claims.
//!
//! Only the registered claims are carried: issuer, subject (the user id),
//! issued-at and expiry. There are no scopes or custom claims.

use serde::{Deserialize, Serialize};

/// Purpose a signed token was minted for, embedded as its `iss` claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenType {
    Access,
}

impl TokenType {
    pub const fn issuer(self) -> &'static str {
        match self {
            TokenType::Access => "access",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Issuer, always [`TokenType::Access`] for tokens minted here.
    pub iss: String,
    /// User ID (subject claim)
    pub sub: String,
    /// Issued-at (Unix timestamp, seconds)
    pub iat: i64,
    /// Expiration (Unix timestamp, seconds)
    pub exp: i64,
}

//! Authentication error taxonomy.
//!
//! Every failure keeps its precise variant so it can be logged and tested,
//! while the HTTP mapping in [`From<AuthError> for AppError`] collapses them
//! into a few client-facing messages that never reveal which check failed.

use chirpy_core::{AppError, StatusCode};
use thiserror::Error;

/// Failure reported by an [`AuthStore`](crate::store::AuthStore) implementation.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A uniqueness constraint rejected the write.
    #[error("conflict: {0}")]
    Conflict(String),

    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown email or wrong password. Never says which.
    #[error("invalid credentials")]
    CredentialInvalid,

    #[error("no auth header included in request")]
    HeaderMissing,

    #[error("malformed authorization header")]
    HeaderMalformed,

    #[error("token signature is invalid")]
    TokenSignatureInvalid,

    #[error("token has expired")]
    TokenExpired,

    #[error("token issuer mismatch: got {0:?}")]
    TokenIssuerMismatch(String),

    #[error("malformed token: {0}")]
    TokenMalformed(String),

    #[error("refresh token not found")]
    RefreshTokenNotFound,

    /// Expired or revoked.
    #[error("refresh token is no longer usable")]
    RefreshTokenNotUsable,

    #[error("no refresh token matched the revocation request")]
    RevocationFailed,

    #[error("api key is invalid")]
    ApiKeyInvalid,

    /// Hashing or hash parsing failed; signals misconfiguration, not bad input.
    #[error("password hashing failed: {0}")]
    HashingFailure(String),

    #[error("token generation failed: {0}")]
    TokenGeneration(String),

    #[error("datastore error")]
    Store(#[from] StoreError),
}

impl AuthError {
    /// True for failures caused by the caller's credentials rather than the server.
    pub fn is_client_error(&self) -> bool {
        !matches!(
            self,
            AuthError::HashingFailure(_) | AuthError::TokenGeneration(_) | AuthError::Store(_)
        )
    }

    fn status_and_message(&self) -> (StatusCode, &'static str) {
        match self {
            AuthError::CredentialInvalid => {
                (StatusCode::UNAUTHORIZED, "Incorrect email or password")
            }
            AuthError::HeaderMissing => (StatusCode::UNAUTHORIZED, "Missing authorization header"),
            AuthError::HeaderMalformed => {
                (StatusCode::UNAUTHORIZED, "Malformed authorization header")
            }
            AuthError::TokenSignatureInvalid
            | AuthError::TokenExpired
            | AuthError::TokenIssuerMismatch(_)
            | AuthError::TokenMalformed(_) => (StatusCode::UNAUTHORIZED, "Couldn't validate JWT"),
            AuthError::RefreshTokenNotFound | AuthError::RefreshTokenNotUsable => (
                StatusCode::UNAUTHORIZED,
                "Couldn't get user for refresh token",
            ),
            AuthError::RevocationFailed => (StatusCode::UNAUTHORIZED, "Couldn't revoke token"),
            AuthError::ApiKeyInvalid => (StatusCode::UNAUTHORIZED, "API key is invalid"),
            AuthError::HashingFailure(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Couldn't process credentials",
            ),
            AuthError::TokenGeneration(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Couldn't create token")
            }
            AuthError::Store(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error"),
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        let (status, message) = err.status_and_message();
        AppError::with_cause(status, message, err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_failures_map_to_unauthorized() {
        for err in [
            AuthError::CredentialInvalid,
            AuthError::HeaderMissing,
            AuthError::HeaderMalformed,
            AuthError::TokenSignatureInvalid,
            AuthError::TokenExpired,
            AuthError::TokenIssuerMismatch("refresh".to_string()),
            AuthError::TokenMalformed("bad subject".to_string()),
            AuthError::RefreshTokenNotFound,
            AuthError::RefreshTokenNotUsable,
            AuthError::RevocationFailed,
            AuthError::ApiKeyInvalid,
        ] {
            assert!(err.is_client_error(), "{err:?}");
            let app: AppError = err.into();
            assert_eq!(app.status, StatusCode::UNAUTHORIZED);
        }
    }

    #[test]
    fn test_infrastructure_failures_map_to_internal() {
        for err in [
            AuthError::HashingFailure("invalid cost".to_string()),
            AuthError::TokenGeneration("rng".to_string()),
            AuthError::Store(StoreError::Backend(anyhow::anyhow!("connection reset"))),
        ] {
            assert!(!err.is_client_error());
            let app: AppError = err.into();
            assert_eq!(app.status, StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    #[test]
    fn test_token_failures_share_one_message() {
        let expired: AppError = AuthError::TokenExpired.into();
        let forged: AppError = AuthError::TokenSignatureInvalid.into();
        assert_eq!(expired.message(), forged.message());
    }

    #[test]
    fn test_refresh_not_found_and_not_usable_are_indistinguishable() {
        let missing: AppError = AuthError::RefreshTokenNotFound.into();
        let revoked: AppError = AuthError::RefreshTokenNotUsable.into();
        assert_eq!(missing.status, revoked.status);
        assert_eq!(missing.message(), revoked.message());
    }

    #[test]
    fn test_cause_is_kept_for_logging() {
        let app: AppError = AuthError::TokenExpired.into();
        assert!(format!("{:?}", app.error).contains("token has expired"));
        assert!(!app.message().contains("expired"));
    }
}

//! Authentication models and DTOs.
//!
//! Request/response bodies for login and refresh, plus the persisted
//! refresh token record. Whether a record is usable is decided by
//! `chirpy_auth::refresh`, from its timestamps alone.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::users::User;

/// Body of `POST /api/login`.
#[derive(Clone, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    /// Looked up as given; an unknown or empty email fails like a wrong password.
    #[schema(example = "walt@breakingbad.com")]
    pub email: String,
    #[schema(example = "04234")]
    pub password: String,
    /// Requested access token lifetime; clamped to at most one hour.
    #[serde(default)]
    pub expires_in_seconds: Option<i64>,
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("expires_in_seconds", &self.expires_in_seconds)
            .finish_non_exhaustive()
    }
}

/// Successful login: the public profile with both tokens alongside.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    #[serde(flatten)]
    pub user: User,
    /// Signed access token.
    pub token: String,
    /// Opaque refresh token.
    pub refresh_token: String,
}

/// Body of a successful `POST /api/refresh`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RefreshResponse {
    pub token: String,
}

/// Stored refresh token row.
#[derive(FromRow, Clone, PartialEq, Eq)]
pub struct RefreshToken {
    pub token: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub user_id: Uuid,
    pub expires_at: DateTime<Utc>,
    pub revoked_at: Option<DateTime<Utc>>,
}

impl std::fmt::Debug for RefreshToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RefreshToken")
            .field("token", &"<redacted>")
            .field("created_at", &self.created_at)
            .field("updated_at", &self.updated_at)
            .field("user_id", &self.user_id)
            .field("expires_at", &self.expires_at)
            .field("revoked_at", &self.revoked_at)
            .finish()
    }
}

/// A freshly generated refresh token waiting to be persisted.
#[derive(Clone)]
pub struct NewRefreshToken {
    pub token: String,
    pub user_id: Uuid,
    /// Stored as both `created_at` and `updated_at`.
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl std::fmt::Debug for NewRefreshToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewRefreshToken")
            .field("user_id", &self.user_id)
            .field("created_at", &self.created_at)
            .field("expires_at", &self.expires_at)
            .finish_non_exhaustive()
    }
}

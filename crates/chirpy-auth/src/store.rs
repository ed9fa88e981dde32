//! Datastore contract for the auth service.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use chirpy_models::{NewRefreshToken, RefreshToken, UserWithPassword};

use crate::error::StoreError;

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence the auth service needs: user lookup and refresh token records.
///
/// Implementations only store and fetch. Whether a refresh token is usable
/// is decided by [`refresh::state`](crate::refresh::state), not here.
#[async_trait]
pub trait AuthStore: Send + Sync {
    /// Look up a user and their stored hash by email.
    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<UserWithPassword>>;

    /// Persist a new refresh token; duplicate tokens are [`StoreError::Conflict`].
    async fn insert_refresh_token(&self, new_token: NewRefreshToken) -> StoreResult<RefreshToken>;

    async fn find_refresh_token(&self, token: &str) -> StoreResult<Option<RefreshToken>>;

    /// Set `revoked_at` (keeping an earlier value) and bump `updated_at`.
    ///
    /// Returns `None` when no record matches.
    async fn revoke_refresh_token(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> StoreResult<Option<RefreshToken>>;
}

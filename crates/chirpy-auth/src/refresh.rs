//! Opaque refresh tokens.
//!
//! A refresh token is 32 bytes from the OS CSPRNG, hex-encoded. It has no
//! relation to any access token. Its state is never stored as a flag; it is
//! computed from `revoked_at` and `expires_at`:
//!
//! ```text
//! [active] --(revoke)--> [revoked]            terminal
//! [active] --(now >= expires_at)--> [expired] terminal, implicit
//! ```

use chrono::{DateTime, Duration, Utc};
use rand::RngCore;
use rand::rngs::OsRng;
use uuid::Uuid;

use chirpy_models::{NewRefreshToken, RefreshToken};

use crate::error::AuthError;

/// Lifetime of a refresh token, counted from creation.
pub const REFRESH_TOKEN_LIFETIME: Duration = Duration::days(60);

const REFRESH_TOKEN_BYTES: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshTokenState {
    Active,
    Revoked,
    Expired,
}

/// Generates a new 64-character hex refresh token.
pub fn generate_refresh_token() -> Result<String, AuthError> {
    let mut bytes = [0u8; REFRESH_TOKEN_BYTES];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|e| AuthError::TokenGeneration(e.to_string()))?;
    Ok(hex::encode(bytes))
}

/// Generates a token owned by `user_id`, created at `now` and expiring
/// [`REFRESH_TOKEN_LIFETIME`] later. Stores persist both instants as given.
pub fn new_refresh_token(user_id: Uuid, now: DateTime<Utc>) -> Result<NewRefreshToken, AuthError> {
    Ok(NewRefreshToken {
        token: generate_refresh_token()?,
        user_id,
        created_at: now,
        expires_at: now + REFRESH_TOKEN_LIFETIME,
    })
}

/// Revocation wins over expiry when both apply.
pub fn state(record: &RefreshToken, now: DateTime<Utc>) -> RefreshTokenState {
    if record.revoked_at.is_some() {
        RefreshTokenState::Revoked
    } else if now >= record.expires_at {
        RefreshTokenState::Expired
    } else {
        RefreshTokenState::Active
    }
}

pub fn is_usable(record: &RefreshToken, now: DateTime<Utc>) -> bool {
    state(record, now) == RefreshTokenState::Active
}

/// Marks a record revoked at `now`.
///
/// An earlier revocation instant is kept; only `updated_at` moves.
pub fn revoke(mut record: RefreshToken, now: DateTime<Utc>) -> RefreshToken {
    record.revoked_at = record.revoked_at.or(Some(now));
    record.updated_at = now;
    record
}

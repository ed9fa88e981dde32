//! Auth façade: login, refresh, revoke and per-request credential checks.
//!
//! Each operation is independent; the only state shared between calls lives
//! in the [`AuthStore`].

use std::sync::LazyLock;

use chrono::{Duration, Utc};
use tracing::{debug, instrument, warn};
use uuid::Uuid;

use chirpy_config::JwtConfig;
use chirpy_models::{LoginRequest, LoginResponse, RefreshResponse};

use crate::api_key::verify_api_key;
use crate::error::AuthError;
use crate::header::ParsedAuth;
use crate::jwt::{ACCESS_TOKEN_MAX_TTL, issue_access_token, verify_access_token};
use crate::password::{hash_password, verify_password};
use crate::refresh::{self, RefreshTokenState};
use crate::store::AuthStore;

// Verified against when the email is unknown so both login failures cost a bcrypt round.
static DUMMY_HASH: LazyLock<Option<String>> =
    LazyLock::new(|| hash_password("chirpy-dummy-password").ok());

/// Access token lifetime for a login request.
///
/// A requested value in `1..=3600` seconds is honoured; anything else,
/// including no value, yields one hour.
pub fn clamp_access_ttl(requested_seconds: Option<i64>) -> Duration {
    match requested_seconds {
        Some(seconds) if (1..=ACCESS_TOKEN_MAX_TTL.num_seconds()).contains(&seconds) => {
            Duration::seconds(seconds)
        }
        _ => ACCESS_TOKEN_MAX_TTL,
    }
}

pub struct AuthService;

impl AuthService {
    /// Checks email and password, then issues an access token and a stored refresh token.
    #[instrument(skip(store, jwt_config, request), fields(email = %request.email))]
    pub async fn login(
        store: &dyn AuthStore,
        jwt_config: &JwtConfig,
        request: &LoginRequest,
    ) -> Result<LoginResponse, AuthError> {
        let Some(account) = store.find_user_by_email(&request.email).await? else {
            if let Some(dummy) = DUMMY_HASH.as_deref() {
                let _ = verify_password(&request.password, dummy);
            }
            debug!("login attempted for unknown email");
            return Err(AuthError::CredentialInvalid);
        };

        verify_password(&request.password, &account.hashed_password)?;

        let ttl = clamp_access_ttl(request.expires_in_seconds);
        let token = issue_access_token(account.user.id, jwt_config, ttl)?;

        let new_token = refresh::new_refresh_token(account.user.id, Utc::now())?;
        let record = store.insert_refresh_token(new_token).await?;

        debug!(user_id = %account.user.id, ttl_seconds = ttl.num_seconds(), "login succeeded");

        Ok(LoginResponse {
            user: account.user,
            token,
            refresh_token: record.token,
        })
    }

    /// Exchanges a bearer refresh token for a new one-hour access token.
    ///
    /// The refresh token is not rotated and stays usable afterwards.
    #[instrument(skip_all)]
    pub async fn refresh(
        store: &dyn AuthStore,
        jwt_config: &JwtConfig,
        authorization: Option<&str>,
    ) -> Result<RefreshResponse, AuthError> {
        let presented = ParsedAuth::parse(authorization).bearer()?;

        let record = store
            .find_refresh_token(presented)
            .await?
            .ok_or(AuthError::RefreshTokenNotFound)?;

        match refresh::state(&record, Utc::now()) {
            RefreshTokenState::Active => {}
            state => {
                warn!(user_id = %record.user_id, ?state, "refresh token is not usable");
                return Err(AuthError::RefreshTokenNotUsable);
            }
        }

        let token = issue_access_token(record.user_id, jwt_config, ACCESS_TOKEN_MAX_TTL)?;
        Ok(RefreshResponse { token })
    }

    /// Revokes the bearer refresh token. Revoking an already revoked token succeeds.
    #[instrument(skip_all)]
    pub async fn revoke(
        store: &dyn AuthStore,
        authorization: Option<&str>,
    ) -> Result<(), AuthError> {
        let presented = ParsedAuth::parse(authorization).bearer()?;

        let record = store
            .revoke_refresh_token(presented, Utc::now())
            .await?
            .ok_or(AuthError::RevocationFailed)?;

        debug!(user_id = %record.user_id, "refresh token revoked");
        Ok(())
    }

    /// Resolves the user behind a bearer access token.
    pub fn resolve_identity(
        authorization: Option<&str>,
        jwt_config: &JwtConfig,
    ) -> Result<Uuid, AuthError> {
        let token = ParsedAuth::parse(authorization).bearer()?;
        verify_access_token(token, jwt_config)
    }

    /// Accepts only `ApiKey <configured_key>`.
    pub fn resolve_api_key(
        authorization: Option<&str>,
        configured_key: &str,
    ) -> Result<(), AuthError> {
        let presented = ParsedAuth::parse(authorization).api_key()?;
        verify_api_key(presented, configured_key)
    }
}

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, header, request::Parts},
};
use chirpy_auth::{AuthError, AuthService};
use chirpy_core::AppError;
use tracing::debug;
use uuid::Uuid;

use crate::state::AppState;

/// Raw `Authorization` value; a value that is not visible ASCII is malformed.
pub fn authorization_header(headers: &HeaderMap) -> Result<Option<&str>, AuthError> {
    headers
        .get(header::AUTHORIZATION)
        .map(|value| value.to_str().map_err(|_| AuthError::HeaderMalformed))
        .transpose()
}

/// Extractor that validates a bearer access token and yields its user id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthUser {
    pub user_id: Uuid,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user_id = authorization_header(&parts.headers)
            .and_then(|value| AuthService::resolve_identity(value, &state.jwt_config))
            .inspect_err(|err| debug!(error = %err, "Access token rejected"))?;

        Ok(AuthUser { user_id })
    }
}

/// Extractor that admits only the configured payment provider key.
#[derive(Debug, Clone, Copy)]
pub struct PolkaApiKey;

impl FromRequestParts<AppState> for PolkaApiKey {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        authorization_header(&parts.headers)
            .and_then(|value| AuthService::resolve_api_key(value, &state.polka_config.api_key))
            .inspect_err(|err| debug!(error = %err, "API key rejected"))?;

        Ok(PolkaApiKey)
    }
}

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use chirpy_auth::{AuthError, AuthService};
use chirpy_core::AppError;
use chirpy_models::{LoginRequest, LoginResponse, RefreshResponse};
use tracing::instrument;
use utoipa::ToSchema;

use crate::metrics::{
    track_access_token_issued, track_refresh_token_issued, track_refresh_token_revoked,
    track_user_login_failure, track_user_login_success,
};
use crate::middleware::auth::authorization_header;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[derive(ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

fn login_failure_reason(err: &AuthError) -> &'static str {
    match err {
        AuthError::CredentialInvalid => "invalid_credentials",
        AuthError::HashingFailure(_) => "hashing_failure",
        AuthError::Store(_) => "store_error",
        AuthError::TokenGeneration(_) => "token_error",
        err if err.is_client_error() => "rejected",
        _ => "internal_error",
    }
}

/// Log in with email and password
#[utoipa::path(
    post,
    path = "/api/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Incorrect email or password", body = ErrorResponse),
        (status = 400, description = "Bad request", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, dto), fields(email = %dto.email))]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let response = AuthService::login(state.auth_store.as_ref(), &state.jwt_config, &dto)
        .await
        .inspect_err(|err| track_user_login_failure(login_failure_reason(err)))?;

    track_user_login_success();
    track_access_token_issued("login");
    track_refresh_token_issued();

    Ok(Json(response))
}

/// Exchange a refresh token for a new access token
#[utoipa::path(
    post,
    path = "/api/refresh",
    responses(
        (status = 200, description = "New access token", body = RefreshResponse),
        (status = 401, description = "Missing, unknown, expired or revoked refresh token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn refresh(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<RefreshResponse>, AppError> {
    let authorization = authorization_header(&headers)?;
    let response =
        AuthService::refresh(state.auth_store.as_ref(), &state.jwt_config, authorization).await?;

    track_access_token_issued("refresh");
    Ok(Json(response))
}

/// Revoke a refresh token
#[utoipa::path(
    post,
    path = "/api/revoke",
    responses(
        (status = 204, description = "Refresh token revoked"),
        (status = 401, description = "Missing or unknown refresh token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn revoke(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<StatusCode, AppError> {
    let authorization = authorization_header(&headers)?;
    AuthService::revoke(state.auth_store.as_ref(), authorization).await?;

    track_refresh_token_revoked();
    Ok(StatusCode::NO_CONTENT)
}

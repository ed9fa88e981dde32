use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use chirpy_core::AppError;
use chirpy_models::{UpsertUserRequest, User};
use tracing::instrument;

use super::service::UserService;
use crate::metrics::track_user_created;
use crate::middleware::auth::AuthUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// Create a user
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = UpsertUserRequest,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Bad request or email already exists", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Users"
)]
#[instrument(skip(state, dto))]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<UpsertUserRequest>,
) -> Result<(StatusCode, Json<User>), AppError> {
    let user = UserService::create_user(&state.db, dto).await?;
    track_user_created();
    Ok((StatusCode::CREATED, Json(user)))
}

/// Update the caller's email and password
#[utoipa::path(
    put,
    path = "/api/users",
    request_body = UpsertUserRequest,
    responses(
        (status = 200, description = "User updated", body = User),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument(skip(state, dto))]
pub async fn update_user(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<UpsertUserRequest>,
) -> Result<Json<User>, AppError> {
    let user = UserService::update_user(&state.db, auth_user.user_id, dto).await?;
    Ok(Json(user))
}

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use chirpy_core::AppError;
use chirpy_models::{Chirp, ChirpFilterParams, CreateChirpRequest, SortOrder};
use tracing::instrument;

use super::service::{ChirpService, parse_id};
use crate::metrics::track_chirp_created;
use crate::middleware::auth::AuthUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// Post a chirp
#[utoipa::path(
    post,
    path = "/api/chirps",
    request_body = CreateChirpRequest,
    responses(
        (status = 201, description = "Chirp created", body = Chirp),
        (status = 400, description = "Chirp is too long", body = ErrorResponse),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Chirps"
)]
#[instrument(skip(state, dto))]
pub async fn create_chirp(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateChirpRequest>,
) -> Result<(StatusCode, Json<Chirp>), AppError> {
    let chirp = ChirpService::create_chirp(&state.db, auth_user.user_id, &dto.body).await?;
    track_chirp_created();
    Ok((StatusCode::CREATED, Json(chirp)))
}

/// List chirps, optionally by author
#[utoipa::path(
    get,
    path = "/api/chirps",
    params(ChirpFilterParams),
    responses(
        (status = 200, description = "Chirps ordered by creation time", body = Vec<Chirp>),
        (status = 400, description = "Invalid author ID", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Chirps"
)]
#[instrument(skip(state))]
pub async fn list_chirps(
    State(state): State<AppState>,
    Query(filters): Query<ChirpFilterParams>,
) -> Result<Json<Vec<Chirp>>, AppError> {
    let author_id = filters
        .author_id
        .as_deref()
        .filter(|value| !value.is_empty())
        .map(|value| parse_id(value, "author"))
        .transpose()?;
    let sort = SortOrder::parse(filters.sort.as_deref());

    let chirps = ChirpService::list_chirps(&state.db, author_id, sort).await?;
    Ok(Json(chirps))
}

/// Get a chirp by ID
#[utoipa::path(
    get,
    path = "/api/chirps/{chirp_id}",
    params(("chirp_id" = String, Path, description = "Chirp ID")),
    responses(
        (status = 200, description = "Chirp found", body = Chirp),
        (status = 400, description = "Invalid chirp ID", body = ErrorResponse),
        (status = 404, description = "Chirp not found", body = ErrorResponse)
    ),
    tag = "Chirps"
)]
#[instrument(skip(state))]
pub async fn get_chirp(
    State(state): State<AppState>,
    Path(chirp_id): Path<String>,
) -> Result<Json<Chirp>, AppError> {
    let chirp_id = parse_id(&chirp_id, "chirp")?;
    let chirp = ChirpService::get_chirp(&state.db, chirp_id).await?;
    Ok(Json(chirp))
}

/// Delete one of the caller's chirps
#[utoipa::path(
    delete,
    path = "/api/chirps/{chirp_id}",
    params(("chirp_id" = String, Path, description = "Chirp ID")),
    responses(
        (status = 204, description = "Chirp deleted"),
        (status = 400, description = "Invalid chirp ID", body = ErrorResponse),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
        (status = 403, description = "Not an author of the chirp", body = ErrorResponse),
        (status = 404, description = "Chirp not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Chirps"
)]
#[instrument(skip(state))]
pub async fn delete_chirp(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(chirp_id): Path<String>,
) -> Result<StatusCode, AppError> {
    let chirp_id = parse_id(&chirp_id, "chirp")?;
    ChirpService::delete_chirp(&state.db, chirp_id, auth_user.user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

use anyhow::anyhow;
use axum::extract::State;
use axum::http::StatusCode;
use chirpy_core::AppError;
use chirpy_models::PolkaEvent;
use tracing::{debug, info, instrument};

use crate::metrics::track_user_upgraded;
use crate::middleware::auth::PolkaApiKey;
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::users::service::UserService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// Receive a Polka event
#[utoipa::path(
    post,
    path = "/api/polka/webhooks",
    request_body = PolkaEvent,
    responses(
        (status = 204, description = "Event handled or ignored"),
        (status = 401, description = "Missing or invalid API key", body = ErrorResponse),
        (status = 404, description = "Couldn't find user", body = ErrorResponse)
    ),
    security(("api_key" = [])),
    tag = "Webhooks"
)]
#[instrument(skip(state, _api_key))]
pub async fn polka_webhook(
    State(state): State<AppState>,
    _api_key: PolkaApiKey,
    ValidatedJson(event): ValidatedJson<PolkaEvent>,
) -> Result<StatusCode, AppError> {
    if !event.is_user_upgraded() {
        debug!(event = %event.event, "Ignoring Polka event");
        return Ok(StatusCode::NO_CONTENT);
    }

    let Some(user_id) = event.user_id() else {
        return Err(AppError::not_found(anyhow!("Couldn't find user")));
    };

    let user = UserService::upgrade_to_red(&state.db, user_id).await?;
    track_user_upgraded();
    info!(user_id = %user.id, "User upgraded to Chirpy Red");

    Ok(StatusCode::NO_CONTENT)
}

use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse};
use chirpy_core::AppError;
use tracing::{info, instrument, warn};

use crate::modules::users::service::UserService;
use crate::state::AppState;

/// Readiness probe
#[utoipa::path(
    get,
    path = "/api/healthz",
    responses((status = 200, description = "Service is ready", body = String, content_type = "text/plain")),
    tag = "Admin"
)]
pub async fn healthz() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], "OK")
}

pub fn render_metrics_page(hits: u64) -> String {
    format!(
        "<html>
  <body>
    <h1>Welcome, Chirpy Admin</h1>
    <p>Chirpy has been visited {hits} times!</p>
  </body>
</html>
"
    )
}

/// File server hit count
#[utoipa::path(
    get,
    path = "/admin/metrics",
    responses((status = 200, description = "HTML page with the hit count", body = String, content_type = "text/html")),
    tag = "Admin"
)]
pub async fn metrics_page(State(state): State<AppState>) -> Html<String> {
    Html(render_metrics_page(state.hits.get()))
}

/// Reset hits and delete all users (dev only)
#[utoipa::path(
    post,
    path = "/admin/reset",
    responses(
        (status = 200, description = "Hits reset and users deleted", body = String),
        (status = 403, description = "Not running on the dev platform", body = String)
    ),
    tag = "Admin"
)]
#[instrument(skip(state))]
pub async fn reset(State(state): State<AppState>) -> Result<(StatusCode, &'static str), AppError> {
    if !state.server_config.platform.is_dev() {
        warn!("Reset refused outside the dev platform");
        return Ok((
            StatusCode::FORBIDDEN,
            "Reset is only allowed in dev environment.",
        ));
    }

    let deleted = UserService::delete_all(&state.db).await?;
    state.hits.reset();
    info!(deleted, "Reset hits and deleted all users");

    Ok((
        StatusCode::OK,
        "Hits reset to 0 and database reset to initial state.",
    ))
}

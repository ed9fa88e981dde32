use axum::{
    Router,
    routing::{get, post},
};

use super::controller::{metrics_page, reset};
use crate::state::AppState;

pub fn init_admin_router() -> Router<AppState> {
    Router::new()
        .route("/metrics", get(metrics_page))
        .route("/reset", post(reset))
}

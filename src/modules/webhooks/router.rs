use axum::{Router, routing::post};

use super::controller::polka_webhook;
use crate::state::AppState;

pub fn init_webhooks_router() -> Router<AppState> {
    Router::new().route("/polka/webhooks", post(polka_webhook))
}

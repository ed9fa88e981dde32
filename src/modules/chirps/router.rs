use axum::{Router, routing::get};

use super::controller::{create_chirp, delete_chirp, get_chirp, list_chirps};
use crate::state::AppState;

pub fn init_chirps_router() -> Router<AppState> {
    Router::new()
        .route("/chirps", get(list_chirps).post(create_chirp))
        .route("/chirps/{chirp_id}", get(get_chirp).delete(delete_chirp))
}

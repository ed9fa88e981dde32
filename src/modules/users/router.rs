use axum::{Router, routing::post};

use super::controller::{create_user, update_user};
use crate::state::AppState;

pub fn init_users_router() -> Router<AppState> {
    Router::new().route("/users", post(create_user).put(update_user))
}

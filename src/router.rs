use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::metrics::{count_hits, metrics_middleware};
use crate::modules::admin::controller::healthz;
use crate::modules::admin::router::init_admin_router;
use crate::modules::auth::router::init_auth_router;
use crate::modules::chirps::router::init_chirps_router;
use crate::modules::users::router::init_users_router;
use crate::modules::webhooks::router::init_webhooks_router;
use crate::state::AppState;
use axum::http::{HeaderValue, Method};
use axum::routing::get;
use axum::{Router, middleware};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};
use utoipa_swagger_ui::SwaggerUi;

fn cors_layer(state: &AppState) -> CorsLayer {
    let allowed_origins: Vec<HeaderValue> = state
        .cors_config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            axum::http::header::AUTHORIZATION,
            axum::http::header::CONTENT_TYPE,
            axum::http::header::ACCEPT,
        ])
}

/// Static files from `FILEPATH`, counted by the hit counter.
fn file_server(state: &AppState) -> Router<AppState> {
    Router::new()
        .nest_service("/app", ServeDir::new(&state.server_config.filepath))
        .layer(middleware::from_fn_with_state(state.hits.clone(), count_hits))
}

pub fn init_router(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .merge(file_server(&state))
        .nest(
            "/api",
            Router::new()
                .route("/healthz", get(healthz))
                .merge(init_auth_router())
                .merge(init_users_router())
                .merge(init_chirps_router())
                .merge(init_webhooks_router()),
        )
        .nest("/admin", init_admin_router())
        .with_state(state.clone())
        .layer(cors_layer(&state))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(middleware::from_fn(logging_middleware))
}

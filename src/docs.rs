use utoipa::openapi::security::{
    ApiKey, ApiKeyValue, HttpAuthScheme, HttpBuilder, SecurityScheme,
};
use utoipa::{Modify, OpenApi};

use chirpy_models::{
    Chirp, CreateChirpRequest, LoginRequest, LoginResponse, PolkaEvent, PolkaEventData,
    RefreshResponse, SortOrder, UpsertUserRequest, User,
};

use crate::modules::auth::controller::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::login,
        crate::modules::auth::controller::refresh,
        crate::modules::auth::controller::revoke,
        crate::modules::users::controller::create_user,
        crate::modules::users::controller::update_user,
        crate::modules::chirps::controller::create_chirp,
        crate::modules::chirps::controller::list_chirps,
        crate::modules::chirps::controller::get_chirp,
        crate::modules::chirps::controller::delete_chirp,
        crate::modules::webhooks::controller::polka_webhook,
        crate::modules::admin::controller::healthz,
        crate::modules::admin::controller::metrics_page,
        crate::modules::admin::controller::reset,
    ),
    components(
        schemas(
            User,
            UpsertUserRequest,
            LoginRequest,
            LoginResponse,
            RefreshResponse,
            Chirp,
            CreateChirpRequest,
            SortOrder,
            PolkaEvent,
            PolkaEventData,
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Login, refresh and revoke"),
        (name = "Users", description = "Account management"),
        (name = "Chirps", description = "Posting and reading chirps"),
        (name = "Webhooks", description = "Payment provider events"),
        (name = "Admin", description = "Operational endpoints")
    ),
    info(
        title = "Chirpy API",
        version = "0.1.0",
        description = "A small social posting API built with Rust, Axum, and PostgreSQL.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
            components.add_security_scheme(
                "api_key",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                    "Authorization",
                    "ApiKey <key>",
                ))),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_auth_paths() {
        let doc = ApiDoc::openapi();
        for path in ["/api/login", "/api/refresh", "/api/revoke", "/api/polka/webhooks"] {
            assert!(doc.paths.paths.contains_key(path), "{path}");
        }
    }
}

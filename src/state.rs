use std::sync::Arc;

use chirpy_auth::AuthStore;
use chirpy_config::{CorsConfig, JwtConfig, PolkaConfig, ServerConfig};
use sqlx::PgPool;

use crate::metrics::HitCounter;
use crate::modules::auth::repository::PgAuthRepository;

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub auth_store: Arc<dyn AuthStore>,
    pub jwt_config: JwtConfig,
    pub polka_config: PolkaConfig,
    pub server_config: ServerConfig,
    pub cors_config: CorsConfig,
    pub hits: HitCounter,
}

impl AppState {
    /// State backed by `db` for both feature queries and auth storage.
    pub fn new(
        db: PgPool,
        jwt_config: JwtConfig,
        polka_config: PolkaConfig,
        server_config: ServerConfig,
        cors_config: CorsConfig,
    ) -> Self {
        Self {
            auth_store: Arc::new(PgAuthRepository::new(db.clone())),
            db,
            jwt_config,
            polka_config,
            server_config,
            cors_config,
            hits: HitCounter::new(),
        }
    }

    pub fn with_auth_store(mut self, auth_store: Arc<dyn AuthStore>) -> Self {
        self.auth_store = auth_store;
        self
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("server_config", &self.server_config)
            .field("cors_config", &self.cors_config)
            .field("hits", &self.hits.get())
            .finish_non_exhaustive()
    }
}

/// Loads configuration, connects to the database and applies migrations.
pub async fn init_app_state() -> anyhow::Result<AppState> {
    let jwt_config = JwtConfig::from_env()?;
    let polka_config = PolkaConfig::from_env()?;
    let server_config = ServerConfig::from_env()?;
    let cors_config = CorsConfig::from_env();

    let db = chirpy_db::init_db_pool().await?;
    chirpy_db::run_migrations(&db).await?;

    Ok(AppState::new(
        db,
        jwt_config,
        polka_config,
        server_config,
        cors_config,
    ))
}

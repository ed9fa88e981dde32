use async_trait::async_trait;
use chirpy_auth::StoreError;
use chirpy_auth::store::{AuthStore, StoreResult};
use chirpy_models::{NewRefreshToken, RefreshToken, UserWithPassword};
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

const REFRESH_TOKEN_COLUMNS: &str = "token, created_at, updated_at, user_id, expires_at, revoked_at";

/// PostgreSQL-backed [`AuthStore`].
#[derive(Clone, Debug)]
pub struct PgAuthRepository {
    pool: PgPool,
}

impl PgAuthRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn backend(err: sqlx::Error) -> StoreError {
    StoreError::Backend(err.into())
}

#[async_trait]
impl AuthStore for PgAuthRepository {
    #[instrument(skip(self))]
    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<UserWithPassword>> {
        sqlx::query_as::<_, UserWithPassword>(
            "SELECT id, created_at, updated_at, email, is_chirpy_red, hashed_password
             FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(backend)
    }

    #[instrument(skip_all, fields(user_id = %new_token.user_id))]
    async fn insert_refresh_token(&self, new_token: NewRefreshToken) -> StoreResult<RefreshToken> {
        sqlx::query_as::<_, RefreshToken>(&format!(
            "INSERT INTO refresh_tokens (token, created_at, updated_at, user_id, expires_at, revoked_at)
             VALUES ($1, $2, $2, $3, $4, NULL)
             RETURNING {REFRESH_TOKEN_COLUMNS}"
        ))
        .bind(&new_token.token)
        .bind(new_token.created_at)
        .bind(new_token.user_id)
        .bind(new_token.expires_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e
                && db_err.is_unique_violation()
            {
                return StoreError::Conflict("refresh token already exists".to_string());
            }
            backend(e)
        })
    }

    #[instrument(skip_all)]
    async fn find_refresh_token(&self, token: &str) -> StoreResult<Option<RefreshToken>> {
        sqlx::query_as::<_, RefreshToken>(&format!(
            "SELECT {REFRESH_TOKEN_COLUMNS} FROM refresh_tokens WHERE token = $1"
        ))
        .bind(token)
        .fetch_optional(&self.pool)
        .await
        .map_err(backend)
    }

    #[instrument(skip(self, token))]
    async fn revoke_refresh_token(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> StoreResult<Option<RefreshToken>> {
        sqlx::query_as::<_, RefreshToken>(&format!(
            "UPDATE refresh_tokens
             SET revoked_at = COALESCE(revoked_at, $2), updated_at = $2
             WHERE token = $1
             RETURNING {REFRESH_TOKEN_COLUMNS}"
        ))
        .bind(token)
        .bind(now)
        .fetch_optional(&self.pool)
        .await
        .map_err(backend)
    }
}

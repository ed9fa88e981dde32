use chirpy_auth::hash_password;
use chirpy_core::AppError;
use chirpy_models::{UpsertUserRequest, User};
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

const USER_COLUMNS: &str = "id, created_at, updated_at, email, is_chirpy_red";

fn map_unique_email(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &e
        && db_err.is_unique_violation()
    {
        return AppError::bad_request(anyhow::anyhow!("Email already exists"));
    }
    AppError::database(e)
}

pub struct UserService;

impl UserService {
    #[instrument(skip(db, dto), fields(email = %dto.email))]
    pub async fn create_user(db: &PgPool, dto: UpsertUserRequest) -> Result<User, AppError> {
        let hashed_password = hash_password(&dto.password)?;

        let user = sqlx::query_as::<_, User>(&format!(
            "INSERT INTO users (email, hashed_password)
             VALUES ($1, $2)
             RETURNING {USER_COLUMNS}"
        ))
        .bind(&dto.email)
        .bind(&hashed_password)
        .fetch_one(db)
        .await
        .map_err(map_unique_email)?;

        Ok(user)
    }

    /// Replaces the email and password of `user_id`.
    #[instrument(skip(db, dto))]
    pub async fn update_user(
        db: &PgPool,
        user_id: Uuid,
        dto: UpsertUserRequest,
    ) -> Result<User, AppError> {
        let hashed_password = hash_password(&dto.password)?;

        sqlx::query_as::<_, User>(&format!(
            "UPDATE users
             SET email = $2, hashed_password = $3, updated_at = NOW()
             WHERE id = $1
             RETURNING {USER_COLUMNS}"
        ))
        .bind(user_id)
        .bind(&dto.email)
        .bind(&hashed_password)
        .fetch_optional(db)
        .await
        .map_err(map_unique_email)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("User not found")))
    }

    /// Marks a user as a Chirpy Red member.
    #[instrument(skip(db))]
    pub async fn upgrade_to_red(db: &PgPool, user_id: Uuid) -> Result<User, AppError> {
        sqlx::query_as::<_, User>(&format!(
            "UPDATE users
             SET is_chirpy_red = TRUE, updated_at = NOW()
             WHERE id = $1
             RETURNING {USER_COLUMNS}"
        ))
        .bind(user_id)
        .fetch_optional(db)
        .await
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Couldn't find user")))
    }

    /// Deletes every user; chirps and refresh tokens go with them.
    #[instrument(skip(db))]
    pub async fn delete_all(db: &PgPool) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM users")
            .execute(db)
            .await
            .map_err(AppError::database)?;
        Ok(result.rows_affected())
    }
}

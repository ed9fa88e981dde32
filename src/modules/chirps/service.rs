use chirpy_core::{AppError, StatusCode};
use chirpy_models::{Chirp, SortOrder};
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

pub const MAX_CHIRP_LENGTH: usize = 140;

const PROFANE_WORDS: [&str; 3] = ["kerfuffle", "sharbert", "fornax"];
const CENSORED: &str = "****";

const CHIRP_COLUMNS: &str = "id, created_at, updated_at, body, user_id";

/// Rejects bodies over [`MAX_CHIRP_LENGTH`] characters and censors profane words.
pub fn validate_chirp(body: &str) -> Result<String, AppError> {
    if body.chars().count() > MAX_CHIRP_LENGTH {
        return Err(AppError::bad_request(anyhow::anyhow!("Chirp is too long")));
    }
    Ok(clean_body(body))
}

/// Words are split on single spaces; punctuation attached to a word prevents a match.
pub fn clean_body(body: &str) -> String {
    body.split(' ')
        .map(|word| {
            let lowered = word.to_lowercase();
            if PROFANE_WORDS.contains(&lowered.as_str()) {
                CENSORED
            } else {
                word
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub struct ChirpService;

impl ChirpService {
    #[instrument(skip(db, body))]
    pub async fn create_chirp(db: &PgPool, user_id: Uuid, body: &str) -> Result<Chirp, AppError> {
        let cleaned = validate_chirp(body)?;

        let chirp = sqlx::query_as::<_, Chirp>(&format!(
            "INSERT INTO chirps (body, user_id)
             VALUES ($1, $2)
             RETURNING {CHIRP_COLUMNS}"
        ))
        .bind(&cleaned)
        .bind(user_id)
        .fetch_one(db)
        .await
        .map_err(AppError::database)?;

        Ok(chirp)
    }

    #[instrument(skip(db))]
    pub async fn list_chirps(
        db: &PgPool,
        author_id: Option<Uuid>,
        sort: SortOrder,
    ) -> Result<Vec<Chirp>, AppError> {
        let chirps = sqlx::query_as::<_, Chirp>(&format!(
            "SELECT {CHIRP_COLUMNS} FROM chirps
             WHERE ($1::uuid IS NULL OR user_id = $1)
             ORDER BY created_at {}",
            sort.as_sql()
        ))
        .bind(author_id)
        .fetch_all(db)
        .await
        .map_err(AppError::database)?;

        Ok(chirps)
    }

    #[instrument(skip(db))]
    pub async fn get_chirp(db: &PgPool, chirp_id: Uuid) -> Result<Chirp, AppError> {
        sqlx::query_as::<_, Chirp>(&format!(
            "SELECT {CHIRP_COLUMNS} FROM chirps WHERE id = $1"
        ))
        .bind(chirp_id)
        .fetch_optional(db)
        .await
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Couldn't get chirp")))
    }

    /// Deletes a chirp owned by `user_id`; other users get 403.
    #[instrument(skip(db))]
    pub async fn delete_chirp(db: &PgPool, chirp_id: Uuid, user_id: Uuid) -> Result<(), AppError> {
        let chirp = Self::get_chirp(db, chirp_id).await?;

        if chirp.user_id != user_id {
            return Err(AppError::forbidden("Not an author of the chirp"));
        }

        sqlx::query("DELETE FROM chirps WHERE id = $1")
            .bind(chirp.id)
            .execute(db)
            .await
            .map_err(AppError::database)?;

        Ok(())
    }
}

/// Parses an id from a path or query string, naming it in the 400 message.
pub fn parse_id(value: &str, what: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(value).map_err(|e| {
        AppError::with_cause(StatusCode::BAD_REQUEST, &format!("Invalid {what} ID"), e)
    })
}

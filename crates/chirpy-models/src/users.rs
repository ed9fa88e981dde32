//! User domain models and DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Public user profile. This is the only user shape ever serialized outward.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub email: String,
    pub is_chirpy_red: bool,
}

/// A user row together with its password hash. Never serialized.
#[derive(FromRow, Clone)]
pub struct UserWithPassword {
    #[sqlx(flatten)]
    pub user: User,
    pub hashed_password: String,
}

impl std::fmt::Debug for UserWithPassword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserWithPassword")
            .field("user", &self.user)
            .field("hashed_password", &"<redacted>")
            .finish()
    }
}

/// Body of `POST /api/users` and `PUT /api/users`.
#[derive(Deserialize, Clone, Validate, ToSchema)]
pub struct UpsertUserRequest {
    #[validate(email(message = "email is invalid"))]
    #[schema(example = "walt@breakingbad.com")]
    pub email: String,
    #[validate(length(min = 1, message = "password is required"))]
    #[schema(example = "04234")]
    pub password: String,
}

impl std::fmt::Debug for UpsertUserRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpsertUserRequest")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

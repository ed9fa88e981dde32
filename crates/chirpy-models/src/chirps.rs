//! Chirp models and DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Chirp {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub body: String,
    pub user_id: Uuid,
}

/// Body of `POST /api/chirps`. The author comes from the access token.
#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct CreateChirpRequest {
    #[schema(example = "I'm the one who knocks!")]
    pub body: String,
}

#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Anything other than `desc` sorts ascending.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("desc") => SortOrder::Desc,
            _ => SortOrder::Asc,
        }
    }

    pub fn as_sql(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// Query string of `GET /api/chirps`, kept as raw strings so malformed
/// values can be reported instead of rejected by the extractor.
#[derive(Deserialize, Debug, Clone, Default, IntoParams)]
pub struct ChirpFilterParams {
    pub author_id: Option<String>,
    pub sort: Option<String>,
}

//! # Chirpy Models
//!
//! Domain models and DTOs for the Chirpy API: database entities,
//! request/response bodies and their validation rules.
//!
//! # Modules
//!
//! - [`auth`]: login/refresh DTOs and the stored refresh token record
//! - [`chirps`]: chirp entity and listing parameters
//! - [`users`]: public user profile and the internal credential-bearing row
//! - [`webhooks`]: payment provider webhook payload

pub mod auth;
pub mod chirps;
pub mod users;
pub mod webhooks;

// Re-export commonly used types at crate root for convenience
pub use auth::{LoginRequest, LoginResponse, NewRefreshToken, RefreshResponse, RefreshToken};
pub use chirps::{Chirp, ChirpFilterParams, CreateChirpRequest, SortOrder};
pub use users::{UpsertUserRequest, User, UserWithPassword};
pub use webhooks::{PolkaEvent, PolkaEventData, USER_UPGRADED_EVENT};

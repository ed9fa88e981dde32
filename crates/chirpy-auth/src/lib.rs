//! # Chirpy Auth
//!
//! Authentication for the Chirpy API.
//!
//! - [`password`]: bcrypt hashing and verification of user passwords
//! - [`claims`] / [`jwt`]: short-lived HS256 access tokens carrying a user id
//! - [`refresh`]: opaque refresh tokens and their usability rules
//! - [`header`]: parsing of the `Authorization` header (`Bearer` / `ApiKey`)
//! - [`api_key`]: static API key check for the payment webhook
//! - [`store`]: the datastore contract the service depends on
//! - [`service`]: login, refresh, revoke and per-request identity resolution
//! - [`error`]: the error taxonomy and its HTTP mapping
//!
//! # Token Types
//!
//! - **Access token**: signed, never stored, valid until its `exp`. It cannot
//!   be revoked early.
//! - **Refresh token**: 64 hex characters, stored, usable for 60 days unless
//!   revoked. Refreshing does not rotate it.
//!
//! # Example
//!
//! ```ignore
//! use chirpy_auth::{AuthService, issue_access_token, verify_access_token};
//!
//! let token = issue_access_token(user_id, &jwt_config, chrono::Duration::hours(1))?;
//! assert_eq!(verify_access_token(&token, &jwt_config)?, user_id);
//!
//! let user_id = AuthService::resolve_identity(Some("Bearer <token>"), &jwt_config)?;
//! ```

pub mod api_key;
pub mod claims;
pub mod error;
pub mod header;
pub mod jwt;
#[cfg(any(test, feature = "test-utils"))]
pub mod memory;
pub mod password;
pub mod refresh;
pub mod service;
pub mod store;

// Re-export commonly used types at crate root
pub use api_key::verify_api_key;
pub use claims::{AccessClaims, TokenType};
pub use error::{AuthError, StoreError};
pub use header::ParsedAuth;
pub use jwt::{ACCESS_TOKEN_MAX_TTL, issue_access_token, verify_access_token};
pub use password::{hash_password, verify_password};
pub use refresh::{REFRESH_TOKEN_LIFETIME, RefreshTokenState, generate_refresh_token};
pub use service::{AuthService, clamp_access_ttl};
pub use store::AuthStore;

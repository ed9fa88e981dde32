//! # Chirpy Config
//!
//! Configuration types for the Chirpy API, loaded from environment variables
//! (a `.env` file is honoured by the binary through `dotenvy`).
//!
//! - [`jwt`]: access token signing secret
//! - [`polka`]: static API key for the payment provider webhook
//! - [`server`]: listen port, static file root and platform
//! - [`cors`]: CORS allowed origins
//!
//! # Example
//!
//! ```ignore
//! use chirpy_config::{JwtConfig, PolkaConfig, ServerConfig, CorsConfig};
//!
//! let jwt_config = JwtConfig::from_env()?;
//! let polka_config = PolkaConfig::from_env()?;
//! let server_config = ServerConfig::from_env()?;
//! let cors_config = CorsConfig::from_env();
//! ```

pub mod cors;
pub mod jwt;
pub mod polka;
pub mod server;

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
pub use jwt::JwtConfig;
pub use polka::PolkaConfig;
pub use server::{Platform, ServerConfig};

/// Reads a variable that must be present and non-empty.
pub(crate) fn required(name: &str) -> anyhow::Result<String> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(anyhow::anyhow!("{name} environment variable is not set")),
    }
}

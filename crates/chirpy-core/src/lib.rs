//! # Chirpy Core
//!
//! Foundational types shared by every Chirpy crate.
//!
//! - [`errors`]: the HTTP-mappable [`AppError`] returned by handlers
//!
//! # Example
//!
//! ```ignore
//! use chirpy_core::AppError;
//!
//! let error = AppError::not_found(anyhow::anyhow!("Couldn't get chirp"));
//! ```

pub mod errors;

// Re-export commonly used types at crate root
pub use axum::http::StatusCode;
pub use errors::AppError;

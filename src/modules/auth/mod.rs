//! Login, access token refresh and refresh token revocation.

pub mod controller;
pub mod repository;
pub mod router;

//! Request extractors for the two credential kinds the API accepts.
//!
//! - [`auth::AuthUser`]: `Authorization: Bearer <access token>`, yields the user id
//! - [`auth::PolkaApiKey`]: `Authorization: ApiKey <key>`, for the payment webhook
//!
//! Refresh and revoke read the raw header through [`auth::authorization_header`]
//! because they take a refresh token, not an access token.

pub mod auth;

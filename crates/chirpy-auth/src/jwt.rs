//! Access token issuance and verification.
//!
//! Access tokens are HS256 JWTs keyed by [`JwtConfig::secret`]. They are
//! never stored: validity is decided entirely by the signature, the `exp`
//! claim and the `iss` claim at verification time.
//!
//! Verification runs its checks in a fixed order and reports the first
//! failure:
//!
//! 1. signature ([`AuthError::TokenSignatureInvalid`]; undecodable input is
//!    [`AuthError::TokenMalformed`])
//! 2. expiry, exact to the second with no leeway ([`AuthError::TokenExpired`])
//! 3. issuer ([`AuthError::TokenIssuerMismatch`])
//! 4. subject parses as a UUID ([`AuthError::TokenMalformed`])
//!
//! No clock-skew allowance is applied. A verifier whose clock runs ahead of
//! the issuer's will reject tokens slightly early.
//!
//! # Example
//!
//! ```ignore
//! let token = issue_access_token(user_id, &jwt_config, ACCESS_TOKEN_MAX_TTL)?;
//! let user_id = verify_access_token(&token, &jwt_config)?;
//! ```

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

use chirpy_config::JwtConfig;

use crate::claims::{AccessClaims, TokenType};
use crate::error::AuthError;

/// Longest lifetime a login may request for an access token; also the
/// fixed lifetime of tokens minted by refresh.
pub const ACCESS_TOKEN_MAX_TTL: Duration = Duration::hours(1);

/// Signs an access token for `user_id` that expires `ttl` from now.
///
/// `ttl` is not bounded here; callers apply their own policy (see
/// [`clamp_access_ttl`](crate::service::clamp_access_ttl)).
pub fn issue_access_token(
    user_id: Uuid,
    jwt_config: &JwtConfig,
    ttl: Duration,
) -> Result<String, AuthError> {
    issue_access_token_at(user_id, jwt_config, ttl, Utc::now())
}

pub fn issue_access_token_at(
    user_id: Uuid,
    jwt_config: &JwtConfig,
    ttl: Duration,
    now: DateTime<Utc>,
) -> Result<String, AuthError> {
    let expires_at = now
        .checked_add_signed(ttl)
        .ok_or_else(|| AuthError::TokenGeneration("ttl out of range".to_string()))?;

    let claims = AccessClaims {
        iss: TokenType::Access.issuer().to_string(),
        sub: user_id.to_string(),
        iat: now.timestamp(),
        exp: expires_at.timestamp(),
    };

    sign(&claims, &jwt_config.secret)
}

/// Verifies an access token and returns the user id it was issued for.
pub fn verify_access_token(token: &str, jwt_config: &JwtConfig) -> Result<Uuid, AuthError> {
    verify_access_token_at(token, jwt_config, Utc::now())
}

pub fn verify_access_token_at(
    token: &str,
    jwt_config: &JwtConfig,
    now: DateTime<Utc>,
) -> Result<Uuid, AuthError> {
    verify_for_issuer(token, &jwt_config.secret, TokenType::Access.issuer(), now)
}

fn sign(claims: &AccessClaims, secret: &str) -> Result<String, AuthError> {
    encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AuthError::TokenGeneration(e.to_string()))
}

fn verify_for_issuer(
    token: &str,
    secret: &str,
    expected_issuer: &str,
    now: DateTime<Utc>,
) -> Result<Uuid, AuthError> {
    // Only the signature is checked by the library; claims are checked below
    // so that each failure keeps its own variant and ordering.
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = false;
    validation.validate_aud = false;
    validation.required_spec_claims.clear();

    let claims = decode::<AccessClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        ErrorKind::InvalidSignature => AuthError::TokenSignatureInvalid,
        _ => AuthError::TokenMalformed(e.to_string()),
    })?;

    if now.timestamp() >= claims.exp {
        return Err(AuthError::TokenExpired);
    }

    if claims.iss != expected_issuer {
        return Err(AuthError::TokenIssuerMismatch(claims.iss));
    }

    Uuid::parse_str(&claims.sub)
        .map_err(|e| AuthError::TokenMalformed(format!("invalid user id: {e}")))
}

//! `Authorization` header parsing.
//!
//! One parser produces a [`ParsedAuth`]; the bearer and API-key call sites
//! only pick the variant they accept. A well-formed value is exactly two
//! parts separated by a single space, the first being the literal scheme
//! `Bearer` or `ApiKey` and the second non-empty.

use crate::error::AuthError;

const BEARER_SCHEME: &str = "Bearer";
const API_KEY_SCHEME: &str = "ApiKey";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedAuth<'a> {
    NoHeader,
    Malformed,
    Bearer(&'a str),
    ApiKey(&'a str),
}

impl<'a> ParsedAuth<'a> {
    /// Parses the raw header value; `None` and an empty value both mean no header.
    pub fn parse(header: Option<&'a str>) -> Self {
        let value = match header {
            None | Some("") => return ParsedAuth::NoHeader,
            Some(value) => value,
        };

        let mut parts = value.split(' ');
        let (Some(scheme), Some(credential), None) = (parts.next(), parts.next(), parts.next())
        else {
            return ParsedAuth::Malformed;
        };

        if credential.is_empty() {
            return ParsedAuth::Malformed;
        }

        match scheme {
            BEARER_SCHEME => ParsedAuth::Bearer(credential),
            API_KEY_SCHEME => ParsedAuth::ApiKey(credential),
            _ => ParsedAuth::Malformed,
        }
    }

    pub fn bearer(self) -> Result<&'a str, AuthError> {
        match self {
            ParsedAuth::Bearer(token) => Ok(token),
            ParsedAuth::NoHeader => Err(AuthError::HeaderMissing),
            ParsedAuth::Malformed | ParsedAuth::ApiKey(_) => Err(AuthError::HeaderMalformed),
        }
    }

    pub fn api_key(self) -> Result<&'a str, AuthError> {
        match self {
            ParsedAuth::ApiKey(key) => Ok(key),
            ParsedAuth::NoHeader => Err(AuthError::HeaderMissing),
            ParsedAuth::Malformed | ParsedAuth::Bearer(_) => Err(AuthError::HeaderMalformed),
        }
    }
}

/// Extracts the token from an `Authorization: Bearer <token>` value.
pub fn bearer_token(header: Option<&str>) -> Result<&str, AuthError> {
    ParsedAuth::parse(header).bearer()
}

/// Extracts the key from an `Authorization: ApiKey <key>` value.
pub fn api_key(header: Option<&str>) -> Result<&str, AuthError> {
    ParsedAuth::parse(header).api_key()
}

//! Password hashing with bcrypt.
//!
//! Each hash embeds its own random salt and cost, so hashing the same
//! password twice yields different strings that both verify.

use bcrypt::{DEFAULT_COST, hash, verify};

use crate::error::AuthError;

pub fn hash_password(password: &str) -> Result<String, AuthError> {
    hash_password_with_cost(password, DEFAULT_COST)
}

pub fn hash_password_with_cost(password: &str, cost: u32) -> Result<String, AuthError> {
    hash(password, cost).map_err(|e| AuthError::HashingFailure(e.to_string()))
}

/// Checks `password` against a stored bcrypt hash.
///
/// A mismatch is [`AuthError::CredentialInvalid`]; a hash that cannot be
/// parsed is [`AuthError::HashingFailure`]. The comparison itself is
/// constant-time inside bcrypt.
pub fn verify_password(password: &str, hashed: &str) -> Result<(), AuthError> {
    match verify(password, hashed) {
        Ok(true) => Ok(()),
        Ok(false) => Err(AuthError::CredentialInvalid),
        Err(e) => Err(AuthError::HashingFailure(e.to_string())),
    }
}

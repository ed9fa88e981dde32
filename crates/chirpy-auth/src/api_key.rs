//! Static API key check for the payment provider's webhook.

use crate::error::AuthError;

/// Compares a presented key with the configured one in constant time.
///
/// Length is not hidden; the position of the first differing byte is.
pub fn verify_api_key(presented: &str, configured: &str) -> Result<(), AuthError> {
    if constant_time_eq(presented.as_bytes(), configured.as_bytes()) {
        Ok(())
    } else {
        Err(AuthError::ApiKeyInvalid)
    }
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}

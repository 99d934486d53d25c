//! Secure random identifiers
//!
//! Identifiers are drawn from the operating system CSPRNG and rendered
//! as standard base64.

use base64::{engine::general_purpose::STANDARD, Engine};

use crate::error::{Error, Result};

/// Create a secure identifier from `length` bytes of randomness.
///
/// The returned string is the standard base64 encoding of those bytes,
/// so it is `4 * ceil(length / 3)` characters long.
pub fn secure_id(length: usize) -> Result<String> {
    if length == 0 {
        return Err(Error::Validation("length must be positive".to_string()));
    }

    let mut random_data = vec![0u8; length];
    getrandom::getrandom(&mut random_data).map_err(|e| {
        tracing::error!(error = %e, "Random number generator failed");
        Error::Internal(format!("could not read random bytes: {}", e))
    })?;

    Ok(STANDARD.encode(random_data))
}

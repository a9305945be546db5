use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::rand_core::RngCore;

use super::errors::TokenError;

/// Opaque bearer token generator.
///
/// Tokens carry no payload: they are 256 bits read from the operating
/// system CSPRNG, hex encoded. Whatever they stand for lives in a token store.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenGenerator;

impl TokenGenerator {
    /// Number of random bytes per token.
    pub const TOKEN_BYTES: usize = 32;

    /// Create a new token generator.
    pub fn new() -> Self {
        Self
    }

    /// Generate a fresh token.
    ///
    /// # Returns
    /// Lowercase hex string of `2 * TOKEN_BYTES` characters
    ///
    /// # Errors
    /// * `EntropyUnavailable` - The OS random source failed
    pub fn generate(&self) -> Result<String, TokenError> {
        let mut bytes = [0u8; Self::TOKEN_BYTES];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|e| TokenError::EntropyUnavailable(e.to_string()))?;

        Ok(hex::encode(bytes))
    }
}

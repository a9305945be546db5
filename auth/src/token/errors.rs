use thiserror::Error;

/// Error type for token generation.
#[derive(Debug, Clone, Error)]
pub enum TokenError {
    #[error("Entropy source unavailable: {0}")]
    EntropyUnavailable(String),
}

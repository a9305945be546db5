use thiserror::Error;

/// Raw failure of the credential lookup.
#[derive(Debug, Clone, Error)]
pub enum CredentialStoreError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Raw failure of the token store.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenStoreError {
    /// The token string is already stored.
    #[error("Token already exists")]
    Conflict,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Outcome classification for authentication calls.
///
/// Unknown login, wrong password and unknown token all collapse into
/// `NoSuchUser`. `Internal` carries detail for the server log only.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SecurityError {
    #[error("No such user")]
    NoSuchUser,

    #[error("Token expired")]
    ExpireToken,

    #[error("Internal error: {0}")]
    Internal(String),
}

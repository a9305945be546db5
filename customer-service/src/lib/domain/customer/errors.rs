use auth::PasswordError;
use thiserror::Error;

/// Error for CustomerId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CustomerIdError {
    #[error("Invalid customer id: {0}")]
    InvalidFormat(String),

    #[error("Customer id must be positive, got {0}")]
    NotPositive(i64),
}

/// Error for CustomerName validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CustomerNameError {
    #[error("Customer name must not be empty")]
    Empty,

    #[error("Customer name too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Error for Phone validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PhoneError {
    #[error("Phone must not be empty")]
    Empty,

    #[error("Phone too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Top-level error for all customer-related operations
#[derive(Debug, Clone, Error)]
pub enum CustomerError {
    #[error("Invalid customer id: {0}")]
    InvalidCustomerId(#[from] CustomerIdError),

    #[error("Invalid name: {0}")]
    InvalidName(#[from] CustomerNameError),

    #[error("Invalid phone: {0}")]
    InvalidPhone(#[from] PhoneError),

    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error("Customer not found: {0}")]
    NotFound(String),

    #[error("Phone already exists: {0}")]
    PhoneAlreadyExists(String),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

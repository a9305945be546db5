use crate::password::PasswordError;
use crate::password::PasswordHasher;
use crate::token::TokenError;
use crate::token::TokenGenerator;

/// Authentication coordinator combining password verification and token generation.
///
/// Provides high-level authentication operations by coordinating
/// password hashing and opaque token generation.
#[derive(Clone, Default)]
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_generator: TokenGenerator,
}

/// Result of successful authentication.
#[derive(Debug)]
pub struct AuthenticationResult {
    /// Opaque bearer token
    pub access_token: String,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("Token error: {0}")]
    TokenError(#[from] TokenError),
}

impl Authenticator {
    /// Create a new authenticator with default hashing cost.
    pub fn new() -> Self {
        Self::with_hasher(PasswordHasher::new())
    }

    /// Create an authenticator around a configured password hasher.
    ///
    /// # Arguments
    /// * `password_hasher` - Hasher carrying the desired cost parameters
    pub fn with_hasher(password_hasher: PasswordHasher) -> Self {
        Self {
            password_hasher,
            token_generator: TokenGenerator::new(),
        }
    }

    /// Hash a password for storage.
    ///
    /// # Arguments
    /// * `password` - Plaintext password
    ///
    /// # Returns
    /// Hashed password string
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify credentials and generate a bearer token.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash
    ///
    /// # Returns
    /// AuthenticationResult with access token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `PasswordError` - Stored hash could not be parsed
    /// * `TokenError` - Token generation failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        let is_valid = self.password_hasher.verify(password, stored_hash)?;

        if !is_valid {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let access_token = self.token_generator.generate()?;

        Ok(AuthenticationResult { access_token })
    }

    /// Generate a token without password verification.
    ///
    /// Used to mint a replacement when a freshly generated token collides
    /// with one already stored.
    ///
    /// # Errors
    /// * `TokenError` - Token generation failed
    pub fn generate_token(&self) -> Result<String, TokenError> {
        self.token_generator.generate()
    }
}

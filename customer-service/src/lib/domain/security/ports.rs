use async_trait::async_trait;

use crate::domain::customer::models::CustomerId;
use crate::domain::security::errors::CredentialStoreError;
use crate::domain::security::errors::SecurityError;
use crate::domain::security::errors::TokenStoreError;
use crate::domain::security::models::CredentialRecord;
use crate::domain::security::models::Token;
use crate::domain::security::models::TokenRecord;

/// Port for token issuing and validation.
#[async_trait]
pub trait SecurityServicePort: Send + Sync + 'static {
    /// Verify login and password and mint a new bearer token.
    ///
    /// # Errors
    /// * `NoSuchUser` - Login unknown or password wrong
    /// * `Internal` - Storage or hashing failure
    async fn issue_token(&self, login: &str, password: &str) -> Result<Token, SecurityError>;

    /// Resolve a bearer token to the customer it was issued for.
    ///
    /// # Errors
    /// * `NoSuchUser` - Token unknown
    /// * `ExpireToken` - Token found but past its expiry
    /// * `Internal` - Storage failure
    async fn authenticate_token(&self, token: &str) -> Result<CustomerId, SecurityError>;
}

/// Read access to customer credentials.
#[async_trait]
pub trait CredentialRepository: Send + Sync + 'static {
    /// Look up the credential record for an exact, case-sensitive login.
    ///
    /// Customers without a password have no credential record.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_credential_by_login(
        &self,
        login: &str,
    ) -> Result<Option<CredentialRecord>, CredentialStoreError>;
}

/// Durable mapping from token to customer and expiry.
///
/// Implementations must be safe for concurrent use and must make `put`
/// atomic: a record is visible wholly or not at all.
#[async_trait]
pub trait TokenStore: Send + Sync + 'static {
    /// Insert a new token record.
    ///
    /// # Errors
    /// * `Conflict` - Token string already stored
    /// * `DatabaseError` - Database operation failed
    async fn put(&self, record: &TokenRecord) -> Result<(), TokenStoreError>;

    /// Look up a token record. Expiry is not checked here.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn get(&self, token: &str) -> Result<Option<TokenRecord>, TokenStoreError>;
}

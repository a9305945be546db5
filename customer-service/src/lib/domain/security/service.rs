use std::fmt::Display;
use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;
use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;

use crate::domain::customer::models::CustomerId;
use crate::domain::security::errors::SecurityError;
use crate::domain::security::errors::TokenStoreError;
use crate::domain::security::models::Token;
use crate::domain::security::models::TokenRecord;
use crate::domain::security::ports::CredentialRepository;
use crate::domain::security::ports::SecurityServicePort;
use crate::domain::security::ports::TokenStore;

/// Issues and validates customer bearer tokens.
///
/// This is the only place where credential-store, hasher and token-store
/// failures are classified into `SecurityError`.
pub struct SecurityService<CR, TS>
where
    CR: CredentialRepository,
    TS: TokenStore,
{
    credentials: Arc<CR>,
    tokens: Arc<TS>,
    authenticator: Arc<Authenticator>,
    token_lifetime: Duration,
}

impl<CR, TS> SecurityService<CR, TS>
where
    CR: CredentialRepository,
    TS: TokenStore,
{
    /// Create a new security service.
    ///
    /// # Arguments
    /// * `credentials` - Customer credential lookup
    /// * `tokens` - Token persistence
    /// * `authenticator` - Password verification and token generation
    /// * `token_lifetime` - How long an issued token stays valid
    pub fn new(
        credentials: Arc<CR>,
        tokens: Arc<TS>,
        authenticator: Arc<Authenticator>,
        token_lifetime: Duration,
    ) -> Self {
        Self {
            credentials,
            tokens,
            authenticator,
            token_lifetime,
        }
    }

    /// Verify the password on the blocking pool and mint the first token.
    async fn verify_password(
        &self,
        customer_id: CustomerId,
        password: &str,
        stored_hash: String,
    ) -> Result<Token, SecurityError> {
        let authenticator = Arc::clone(&self.authenticator);
        let password = password.to_owned();

        let result =
            tokio::task::spawn_blocking(move || authenticator.authenticate(&password, &stored_hash))
                .await
                .map_err(|e| internal("Password verification task failed", e))?;

        match result {
            Ok(authenticated) => Ok(Token::new(authenticated.access_token)),
            Err(AuthenticationError::InvalidCredentials) => {
                tracing::debug!(customer_id = %customer_id, "Password mismatch");
                Err(SecurityError::NoSuchUser)
            }
            Err(e) => Err(internal("Password verification failed", e)),
        }
    }

    async fn store(
        &self,
        token: Token,
        customer_id: CustomerId,
        expires_at: DateTime<Utc>,
    ) -> Result<Token, TokenStoreError> {
        let record = TokenRecord {
            token,
            customer_id,
            expires_at,
        };

        self.tokens.put(&record).await?;
        Ok(record.token)
    }
}

#[async_trait]
impl<CR, TS> SecurityServicePort for SecurityService<CR, TS>
where
    CR: CredentialRepository,
    TS: TokenStore,
{
    async fn issue_token(&self, login: &str, password: &str) -> Result<Token, SecurityError> {
        let credential = self
            .credentials
            .find_credential_by_login(login)
            .await
            .map_err(|e| internal("Credential lookup failed", e))?
            .ok_or_else(|| {
                tracing::debug!("Token requested for unknown login");
                SecurityError::NoSuchUser
            })?;

        let customer_id = credential.customer_id;
        let token = self
            .verify_password(customer_id, password, credential.password_hash)
            .await?;

        let expires_at = Utc::now() + self.token_lifetime;

        let token = match self.store(token, customer_id, expires_at).await {
            Ok(token) => token,
            Err(TokenStoreError::Conflict) => {
                tracing::warn!(customer_id = %customer_id, "Token collision, regenerating once");

                let retry = self
                    .authenticator
                    .generate_token()
                    .map_err(|e| internal("Token generation failed", e))?;

                self.store(Token::new(retry), customer_id, expires_at)
                    .await
                    .map_err(|e| internal("Token store rejected regenerated token", e))?
            }
            Err(e) => return Err(internal("Token store failed", e)),
        };

        tracing::info!(
            customer_id = %customer_id,
            token = token.fingerprint(),
            expires_at = %expires_at,
            "Token issued"
        );

        Ok(token)
    }

    async fn authenticate_token(&self, token: &str) -> Result<CustomerId, SecurityError> {
        let record = self
            .tokens
            .get(token)
            .await
            .map_err(|e| internal("Token lookup failed", e))?
            .ok_or(SecurityError::NoSuchUser)?;

        if record.is_expired_at(Utc::now()) {
            tracing::debug!(
                customer_id = %record.customer_id,
                token = record.token.fingerprint(),
                expired_at = %record.expires_at,
                "Expired token presented"
            );
            return Err(SecurityError::ExpireToken);
        }

        Ok(record.customer_id)
    }
}

/// Log the full failure server-side and classify it as internal.
fn internal(context: &str, error: impl Display) -> SecurityError {
    tracing::error!(error = %error, "{}", context);
    SecurityError::Internal(format!("{}: {}", context, error))
}

use std::fmt;

use chrono::DateTime;
use chrono::Utc;

use crate::domain::customer::models::CustomerId;

/// Login and password hash of one customer, as read from the customer store.
#[derive(Clone)]
pub struct CredentialRecord {
    pub customer_id: CustomerId,
    pub login: String,
    pub password_hash: String,
}

impl fmt::Debug for CredentialRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialRecord")
            .field("customer_id", &self.customer_id)
            .field("login", &self.login)
            .field("password_hash", &"<redacted>")
            .finish()
    }
}

/// Opaque bearer token.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Token(String);

impl Token {
    const FINGERPRINT_LENGTH: usize = 8;

    pub fn new(token: String) -> Self {
        Self(token)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    /// Short prefix that is safe to put in logs.
    pub fn fingerprint(&self) -> &str {
        self.0
            .get(..Self::FINGERPRINT_LENGTH)
            .unwrap_or(self.0.as_str())
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Token({}…)", self.fingerprint())
    }
}

/// Stored association between a token, its customer and its expiry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenRecord {
    pub token: Token,
    pub customer_id: CustomerId,
    pub expires_at: DateTime<Utc>,
}

impl TokenRecord {
    /// A token is valid strictly before its expiry.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

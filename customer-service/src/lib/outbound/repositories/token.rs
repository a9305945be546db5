use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::FromRow;
use sqlx::PgPool;

use crate::domain::customer::models::CustomerId;
use crate::domain::security::errors::TokenStoreError;
use crate::domain::security::models::Token;
use crate::domain::security::models::TokenRecord;
use crate::domain::security::ports::TokenStore;

const TOKEN_PRIMARY_KEY: &str = "customers_tokens_pkey";

/// Token store backed by the `customers_tokens` table.
///
/// Each `put` is a single INSERT, so a record is either fully stored or absent.
pub struct PostgresTokenStore {
    pool: PgPool,
}

impl PostgresTokenStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Delete tokens that expired before `now`.
    ///
    /// # Returns
    /// Number of deleted rows
    pub async fn purge_expired(&self, now: DateTime<Utc>) -> Result<u64, TokenStoreError> {
        let result = sqlx::query("DELETE FROM customers_tokens WHERE expires_at <= $1")
            .bind(now)
            .execute(&self.pool)
            .await
            .map_err(|e| TokenStoreError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected())
    }
}

#[derive(FromRow)]
struct TokenRow {
    token: String,
    customer_id: i64,
    expires_at: DateTime<Utc>,
}

impl From<TokenRow> for TokenRecord {
    fn from(row: TokenRow) -> Self {
        Self {
            token: Token::new(row.token),
            customer_id: CustomerId(row.customer_id),
            expires_at: row.expires_at,
        }
    }
}

#[async_trait]
impl TokenStore for PostgresTokenStore {
    async fn put(&self, record: &TokenRecord) -> Result<(), TokenStoreError> {
        sqlx::query(
            r#"
            INSERT INTO customers_tokens (token, customer_id, expires_at)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(record.token.as_str())
        .bind(record.customer_id.value())
        .bind(record.expires_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() && db_err.constraint() == Some(TOKEN_PRIMARY_KEY) {
                    return TokenStoreError::Conflict;
                }
            }
            TokenStoreError::DatabaseError(e.to_string())
        })?;

        Ok(())
    }

    async fn get(&self, token: &str) -> Result<Option<TokenRecord>, TokenStoreError> {
        let row = sqlx::query_as::<_, TokenRow>(
            r#"
            SELECT token, customer_id, expires_at
            FROM customers_tokens
            WHERE token = $1
            "#,
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| TokenStoreError::DatabaseError(e.to_string()))?;

        Ok(row.map(TokenRecord::from))
    }
}

use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::FromRow;
use sqlx::PgPool;

use crate::domain::customer::errors::CustomerError;
use crate::domain::customer::models::Customer;
use crate::domain::customer::models::CustomerDraft;
use crate::domain::customer::models::CustomerId;
use crate::domain::customer::models::CustomerName;
use crate::domain::customer::models::Phone;
use crate::domain::customer::ports::CustomerRepository;
use crate::domain::security::errors::CredentialStoreError;
use crate::domain::security::models::CredentialRecord;
use crate::domain::security::ports::CredentialRepository;

const PHONE_UNIQUE_CONSTRAINT: &str = "customers_phone_key";

pub struct PostgresCustomerRepository {
    pool: PgPool,
}

impl PostgresCustomerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Row shape shared by every customer query. The password column is never selected here.
#[derive(Debug, FromRow)]
struct CustomerRow {
    id: i64,
    name: String,
    phone: String,
    active: bool,
    created: DateTime<Utc>,
}

impl TryFrom<CustomerRow> for Customer {
    type Error = CustomerError;

    fn try_from(row: CustomerRow) -> Result<Self, Self::Error> {
        let id = row.id;
        let corrupt = |reason: String| {
            CustomerError::DatabaseError(format!("Customer {} has corrupt data: {}", id, reason))
        };

        Ok(Customer {
            id: CustomerId(id),
            name: CustomerName::new(row.name).map_err(|e| corrupt(e.to_string()))?,
            phone: Phone::new(row.phone).map_err(|e| corrupt(e.to_string()))?,
            active: row.active,
            created: row.created,
        })
    }
}

#[derive(FromRow)]
struct CredentialRow {
    id: i64,
    phone: String,
    password: String,
}

impl From<CredentialRow> for CredentialRecord {
    fn from(row: CredentialRow) -> Self {
        Self {
            customer_id: CustomerId(row.id),
            login: row.phone,
            password_hash: row.password,
        }
    }
}

fn map_write_error(error: sqlx::Error, draft: &CustomerDraft) -> CustomerError {
    if let Some(db_err) = error.as_database_error() {
        if db_err.is_unique_violation() && db_err.constraint() == Some(PHONE_UNIQUE_CONSTRAINT) {
            return CustomerError::PhoneAlreadyExists(draft.phone.as_str().to_string());
        }
    }
    CustomerError::DatabaseError(error.to_string())
}

fn into_customers(rows: Vec<CustomerRow>) -> Result<Vec<Customer>, CustomerError> {
    rows.into_iter().map(Customer::try_from).collect()
}

#[async_trait]
impl CustomerRepository for PostgresCustomerRepository {
    async fn create(&self, draft: CustomerDraft) -> Result<Customer, CustomerError> {
        let row = sqlx::query_as::<_, CustomerRow>(
            r#"
            INSERT INTO customers (name, phone, password)
            VALUES ($1, $2, $3)
            RETURNING id, name, phone, active, created
            "#,
        )
        .bind(draft.name.as_str())
        .bind(draft.phone.as_str())
        .bind(draft.password_hash.as_deref())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, &draft))?;

        row.try_into()
    }

    async fn update(
        &self,
        id: CustomerId,
        draft: CustomerDraft,
    ) -> Result<Customer, CustomerError> {
        let row = sqlx::query_as::<_, CustomerRow>(
            r#"
            UPDATE customers
            SET name = $2, phone = $3, password = COALESCE($4, password)
            WHERE id = $1
            RETURNING id, name, phone, active, created
            "#,
        )
        .bind(id.value())
        .bind(draft.name.as_str())
        .bind(draft.phone.as_str())
        .bind(draft.password_hash.as_deref())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_write_error(e, &draft))?;

        row.ok_or(CustomerError::NotFound(id.to_string()))?
            .try_into()
    }

    async fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>, CustomerError> {
        let row = sqlx::query_as::<_, CustomerRow>(
            r#"
            SELECT id, name, phone, active, created
            FROM customers
            WHERE id = $1
            "#,
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CustomerError::DatabaseError(e.to_string()))?;

        row.map(Customer::try_from).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Customer>, CustomerError> {
        let rows = sqlx::query_as::<_, CustomerRow>(
            r#"
            SELECT id, name, phone, active, created
            FROM customers
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| CustomerError::DatabaseError(e.to_string()))?;

        into_customers(rows)
    }

    async fn list_active(&self) -> Result<Vec<Customer>, CustomerError> {
        let rows = sqlx::query_as::<_, CustomerRow>(
            r#"
            SELECT id, name, phone, active, created
            FROM customers
            WHERE active
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| CustomerError::DatabaseError(e.to_string()))?;

        into_customers(rows)
    }

    async fn delete(&self, id: CustomerId) -> Result<Customer, CustomerError> {
        let row = sqlx::query_as::<_, CustomerRow>(
            r#"
            DELETE FROM customers
            WHERE id = $1
            RETURNING id, name, phone, active, created
            "#,
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CustomerError::DatabaseError(e.to_string()))?;

        row.ok_or(CustomerError::NotFound(id.to_string()))?
            .try_into()
    }

    async fn set_active(&self, id: CustomerId, active: bool) -> Result<Customer, CustomerError> {
        let row = sqlx::query_as::<_, CustomerRow>(
            r#"
            UPDATE customers
            SET active = $2
            WHERE id = $1
            RETURNING id, name, phone, active, created
            "#,
        )
        .bind(id.value())
        .bind(active)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CustomerError::DatabaseError(e.to_string()))?;

        row.ok_or(CustomerError::NotFound(id.to_string()))?
            .try_into()
    }
}

#[async_trait]
impl CredentialRepository for PostgresCustomerRepository {
    async fn find_credential_by_login(
        &self,
        login: &str,
    ) -> Result<Option<CredentialRecord>, CredentialStoreError> {
        let row = sqlx::query_as::<_, CredentialRow>(
            r#"
            SELECT id, phone, password
            FROM customers
            WHERE phone = $1 AND password IS NOT NULL
            "#,
        )
        .bind(login)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CredentialStoreError::DatabaseError(e.to_string()))?;

        Ok(row.map(CredentialRecord::from))
    }
}

use std::sync::Arc;

use async_trait::async_trait;
use auth::PasswordHasher;

use crate::domain::customer::errors::CustomerError;
use crate::domain::customer::models::Customer;
use crate::domain::customer::models::CustomerDraft;
use crate::domain::customer::models::CustomerId;
use crate::domain::customer::models::RegisterCustomerCommand;
use crate::domain::customer::models::SaveCustomerCommand;
use crate::domain::customer::ports::CustomerRepository;
use crate::domain::customer::ports::CustomerServicePort;

/// Domain service implementation for customer operations.
pub struct CustomerService<CR>
where
    CR: CustomerRepository,
{
    repository: Arc<CR>,
    password_hasher: PasswordHasher,
}

impl<CR> CustomerService<CR>
where
    CR: CustomerRepository,
{
    /// Create a new customer service.
    ///
    /// # Arguments
    /// * `repository` - Customer persistence implementation
    /// * `password_hasher` - Hasher used for passwords on register and save
    pub fn new(repository: Arc<CR>, password_hasher: PasswordHasher) -> Self {
        Self {
            repository,
            password_hasher,
        }
    }

    /// Hash on the blocking pool; Argon2 is slow on purpose.
    async fn hash_password(&self, password: String) -> Result<String, CustomerError> {
        let hasher = self.password_hasher.clone();

        let hash = tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| CustomerError::Unknown(format!("Hashing task failed: {}", e)))??;

        Ok(hash)
    }
}

#[async_trait]
impl<CR> CustomerServicePort for CustomerService<CR>
where
    CR: CustomerRepository,
{
    async fn get_customer(&self, id: CustomerId) -> Result<Customer, CustomerError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(CustomerError::NotFound(id.to_string()))
    }

    async fn list_customers(&self) -> Result<Vec<Customer>, CustomerError> {
        self.repository.list_all().await
    }

    async fn list_active_customers(&self) -> Result<Vec<Customer>, CustomerError> {
        self.repository.list_active().await
    }

    async fn save_customer(&self, command: SaveCustomerCommand) -> Result<Customer, CustomerError> {
        let password_hash = match command.password {
            Some(password) => Some(self.hash_password(password).await?),
            None => None,
        };

        let draft = CustomerDraft {
            name: command.name,
            phone: command.phone,
            password_hash,
        };

        let customer = match command.id {
            Some(id) => self.repository.update(id, draft).await?,
            None => self.repository.create(draft).await?,
        };

        tracing::info!(customer_id = %customer.id, "Customer saved");
        Ok(customer)
    }

    async fn register_customer(
        &self,
        command: RegisterCustomerCommand,
    ) -> Result<Customer, CustomerError> {
        let password_hash = self.hash_password(command.password).await?;

        let customer = self
            .repository
            .create(CustomerDraft {
                name: command.name,
                phone: command.phone,
                password_hash: Some(password_hash),
            })
            .await?;

        tracing::info!(customer_id = %customer.id, "Customer registered");
        Ok(customer)
    }

    async fn remove_customer(&self, id: CustomerId) -> Result<Customer, CustomerError> {
        let customer = self.repository.delete(id).await?;
        tracing::info!(customer_id = %id, "Customer removed");
        Ok(customer)
    }

    async fn block_customer(&self, id: CustomerId) -> Result<Customer, CustomerError> {
        self.repository.set_active(id, false).await
    }

    async fn unblock_customer(&self, id: CustomerId) -> Result<Customer, CustomerError> {
        self.repository.set_active(id, true).await
    }
}

use async_trait::async_trait;

use crate::domain::customer::errors::CustomerError;
use crate::domain::customer::models::Customer;
use crate::domain::customer::models::CustomerDraft;
use crate::domain::customer::models::CustomerId;
use crate::domain::customer::models::RegisterCustomerCommand;
use crate::domain::customer::models::SaveCustomerCommand;

/// Port for customer domain service operations.
#[async_trait]
pub trait CustomerServicePort: Send + Sync + 'static {
    /// Retrieve customer by identifier.
    ///
    /// # Errors
    /// * `NotFound` - Customer does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_customer(&self, id: CustomerId) -> Result<Customer, CustomerError>;

    /// Retrieve all customers.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_customers(&self) -> Result<Vec<Customer>, CustomerError>;

    /// Retrieve customers that are not blocked.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_active_customers(&self) -> Result<Vec<Customer>, CustomerError>;

    /// Insert a customer when the command has no id, update it otherwise.
    ///
    /// A supplied password is hashed before it reaches the store; an update
    /// without password keeps the stored hash.
    ///
    /// # Errors
    /// * `NotFound` - Update targets a customer that does not exist
    /// * `PhoneAlreadyExists` - Phone is used by another customer
    /// * `Password` - Hashing failed
    /// * `DatabaseError` - Database operation failed
    async fn save_customer(&self, command: SaveCustomerCommand) -> Result<Customer, CustomerError>;

    /// Create a customer that can log in with the given password.
    ///
    /// # Errors
    /// * `PhoneAlreadyExists` - Phone is used by another customer
    /// * `Password` - Hashing failed
    /// * `DatabaseError` - Database operation failed
    async fn register_customer(
        &self,
        command: RegisterCustomerCommand,
    ) -> Result<Customer, CustomerError>;

    /// Delete a customer, returning the removed record.
    ///
    /// # Errors
    /// * `NotFound` - Customer does not exist
    /// * `DatabaseError` - Database operation failed
    async fn remove_customer(&self, id: CustomerId) -> Result<Customer, CustomerError>;

    /// Mark a customer inactive.
    ///
    /// # Errors
    /// * `NotFound` - Customer does not exist
    /// * `DatabaseError` - Database operation failed
    async fn block_customer(&self, id: CustomerId) -> Result<Customer, CustomerError>;

    /// Mark a customer active again.
    ///
    /// # Errors
    /// * `NotFound` - Customer does not exist
    /// * `DatabaseError` - Database operation failed
    async fn unblock_customer(&self, id: CustomerId) -> Result<Customer, CustomerError>;
}

/// Persistence operations for the customer aggregate.
#[async_trait]
pub trait CustomerRepository: Send + Sync + 'static {
    /// Persist a new customer; the store assigns the id.
    ///
    /// # Errors
    /// * `PhoneAlreadyExists` - Phone is already taken
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, draft: CustomerDraft) -> Result<Customer, CustomerError>;

    /// Overwrite name and phone (and the password hash when present).
    ///
    /// # Errors
    /// * `NotFound` - Customer does not exist
    /// * `PhoneAlreadyExists` - New phone is already taken
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, id: CustomerId, draft: CustomerDraft)
        -> Result<Customer, CustomerError>;

    /// Retrieve customer by identifier.
    ///
    /// # Returns
    /// Optional customer (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>, CustomerError>;

    /// Retrieve all customers ordered by id.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_all(&self) -> Result<Vec<Customer>, CustomerError>;

    /// Retrieve active customers ordered by id.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_active(&self) -> Result<Vec<Customer>, CustomerError>;

    /// Remove customer from storage.
    ///
    /// # Errors
    /// * `NotFound` - Customer does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: CustomerId) -> Result<Customer, CustomerError>;

    /// Set the active flag.
    ///
    /// # Errors
    /// * `NotFound` - Customer does not exist
    /// * `DatabaseError` - Database operation failed
    async fn set_active(&self, id: CustomerId, active: bool) -> Result<Customer, CustomerError>;
}

pub mod customer;
pub mod memory;
pub mod token;

pub use customer::PostgresCustomerRepository;
pub use memory::InMemoryTokenStore;
pub use token::PostgresTokenStore;

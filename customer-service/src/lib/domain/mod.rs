pub mod customer;
pub mod security;

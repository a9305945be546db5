use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use thiserror::Error;

use super::ApiError;
use super::ApiSuccess;
use super::CustomerData;
use crate::domain::customer::errors::CustomerNameError;
use crate::domain::customer::errors::PhoneError;
use crate::domain::customer::models::CustomerName;
use crate::domain::customer::models::Phone;
use crate::domain::customer::models::RegisterCustomerCommand;
use crate::inbound::http::router::AppState;

pub async fn register_customer(
    State(state): State<AppState>,
    Json(body): Json<RegisterCustomerRequest>,
) -> Result<ApiSuccess<CustomerData>, ApiError> {
    state
        .customer_service
        .register_customer(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref customer| ApiSuccess::new(StatusCode::CREATED, customer.into()))
}

/// HTTP request body for registering a customer (raw JSON)
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterCustomerRequest {
    name: String,
    phone: String,
    password: String,
}

#[derive(Debug, Clone, Error)]
enum ParseRegisterCustomerRequestError {
    #[error("Invalid name: {0}")]
    Name(#[from] CustomerNameError),

    #[error("Invalid phone: {0}")]
    Phone(#[from] PhoneError),

    #[error("Password must not be empty")]
    EmptyPassword,
}

impl RegisterCustomerRequest {
    fn try_into_command(self) -> Result<RegisterCustomerCommand, ParseRegisterCustomerRequestError> {
        let name = CustomerName::new(self.name)?;
        let phone = Phone::new(self.phone)?;
        if self.password.is_empty() {
            return Err(ParseRegisterCustomerRequestError::EmptyPassword);
        }
        Ok(RegisterCustomerCommand::new(name, phone, self.password))
    }
}

impl From<ParseRegisterCustomerRequestError> for ApiError {
    fn from(err: ParseRegisterCustomerRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}

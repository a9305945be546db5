use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use thiserror::Error;

use super::ApiError;
use super::ApiSuccess;
use super::CustomerData;
use crate::domain::customer::errors::CustomerIdError;
use crate::domain::customer::errors::CustomerNameError;
use crate::domain::customer::errors::PhoneError;
use crate::domain::customer::models::CustomerId;
use crate::domain::customer::models::CustomerName;
use crate::domain::customer::models::Phone;
use crate::domain::customer::models::SaveCustomerCommand;
use crate::inbound::http::router::AppState;

pub async fn save_customer(
    State(state): State<AppState>,
    Json(body): Json<SaveCustomerRequest>,
) -> Result<ApiSuccess<CustomerData>, ApiError> {
    state
        .customer_service
        .save_customer(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref customer| ApiSuccess::new(StatusCode::OK, customer.into()))
}

/// HTTP request body for saving a customer (raw JSON).
///
/// A missing or zero `id` inserts a new customer.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct SaveCustomerRequest {
    #[serde(default)]
    id: i64,
    name: String,
    phone: String,
    #[serde(default)]
    password: Option<String>,
}

#[derive(Debug, Clone, Error)]
enum ParseSaveCustomerRequestError {
    #[error("Invalid customer id: {0}")]
    Id(#[from] CustomerIdError),

    #[error("Invalid name: {0}")]
    Name(#[from] CustomerNameError),

    #[error("Invalid phone: {0}")]
    Phone(#[from] PhoneError),

    #[error("Password must not be empty")]
    EmptyPassword,
}

impl SaveCustomerRequest {
    fn try_into_command(self) -> Result<SaveCustomerCommand, ParseSaveCustomerRequestError> {
        let id = match self.id {
            0 => None,
            id if id < 0 => return Err(CustomerIdError::NotPositive(id).into()),
            id => Some(CustomerId(id)),
        };
        let name = CustomerName::new(self.name)?;
        let phone = Phone::new(self.phone)?;
        if self.password.as_deref() == Some("") {
            return Err(ParseSaveCustomerRequestError::EmptyPassword);
        }
        Ok(SaveCustomerCommand::new(id, name, phone, self.password))
    }
}

impl From<ParseSaveCustomerRequestError> for ApiError {
    fn from(err: ParseSaveCustomerRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}

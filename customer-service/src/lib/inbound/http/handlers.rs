use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::domain::customer::errors::CustomerError;
use crate::domain::customer::models::Customer;

pub mod block_customer;
pub mod get_customer;
pub mod issue_token;
pub mod list_customers;
pub mod register_customer;
pub mod remove_customer;
pub mod save_customer;
pub mod validate_token;

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(status, data)))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    UnprocessableEntity(String),
    BadRequest(String),
    NotFound(String),
    Conflict(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(detail) => {
                tracing::error!(error = %detail, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            ApiError::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
        };

        (status, Json(ApiResponseBody::new_error(status, message))).into_response()
    }
}

impl From<CustomerError> for ApiError {
    fn from(err: CustomerError) -> Self {
        match err {
            CustomerError::NotFound(_) => ApiError::NotFound(err.to_string()),
            CustomerError::PhoneAlreadyExists(_) => ApiError::Conflict(err.to_string()),
            CustomerError::InvalidCustomerId(_) => ApiError::BadRequest(err.to_string()),
            CustomerError::InvalidName(_) | CustomerError::InvalidPhone(_) => {
                ApiError::UnprocessableEntity(err.to_string())
            }
            CustomerError::Password(_)
            | CustomerError::DatabaseError(_)
            | CustomerError::Unknown(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    status_code: u16,
    data: T,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(status_code: StatusCode, data: T) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data,
        }
    }
}

impl ApiResponseBody<ApiErrorData> {
    pub fn new_error(status_code: StatusCode, message: String) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data: ApiErrorData { message },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub message: String,
}

/// Public view of a customer. Never carries the password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerData {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub active: bool,
    pub created: DateTime<Utc>,
}

impl From<&Customer> for CustomerData {
    fn from(customer: &Customer) -> Self {
        Self {
            id: customer.id.value(),
            name: customer.name.as_str().to_string(),
            phone: customer.phone.as_str().to_string(),
            active: customer.active,
            created: customer.created,
        }
    }
}

/// Body of token endpoint responses: `{"status": "ok", ...}` on success,
/// `{"status": "fail", "reason": ...}` otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSuccess<T: Serialize + PartialEq>(pub T);

impl<T: Serialize + PartialEq> IntoResponse for TokenSuccess<T> {
    fn into_response(self) -> Response {
        (
            StatusCode::OK,
            Json(TokenResponseBody {
                status: "ok",
                data: self.0,
            }),
        )
            .into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct TokenResponseBody<T: Serialize + PartialEq> {
    status: &'static str,
    #[serde(flatten)]
    data: T,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenApiError {
    /// Malformed request body
    BadRequest,
    /// Login unknown or password wrong
    BadCredentials,
    /// Token unknown
    NotFound,
    /// Token past its expiry
    Expired,
    /// Detail is logged, never returned
    Internal(String),
}

impl TokenApiError {
    fn status_and_reason(&self) -> (StatusCode, &'static str) {
        match self {
            TokenApiError::BadRequest => (StatusCode::BAD_REQUEST, "bad request"),
            TokenApiError::BadCredentials => (StatusCode::BAD_REQUEST, "bad credentials"),
            TokenApiError::NotFound => (StatusCode::NOT_FOUND, "not found"),
            TokenApiError::Expired => (StatusCode::BAD_REQUEST, "expired"),
            TokenApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal error"),
        }
    }
}

impl IntoResponse for TokenApiError {
    fn into_response(self) -> Response {
        let (status, reason) = self.status_and_reason();

        (
            status,
            Json(TokenResponseBody {
                status: "fail",
                data: TokenFailureData { reason },
            }),
        )
            .into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct TokenFailureData {
    reason: &'static str,
}

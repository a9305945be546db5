use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use super::CustomerData;
use crate::inbound::http::router::AppState;

pub async fn list_customers(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<CustomerData>>, ApiError> {
    state
        .customer_service
        .list_customers()
        .await
        .map_err(ApiError::from)
        .map(|customers| {
            ApiSuccess::new(StatusCode::OK, customers.iter().map(Into::into).collect())
        })
}

pub async fn list_active_customers(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<CustomerData>>, ApiError> {
    state
        .customer_service
        .list_active_customers()
        .await
        .map_err(ApiError::from)
        .map(|customers| {
            ApiSuccess::new(StatusCode::OK, customers.iter().map(Into::into).collect())
        })
}

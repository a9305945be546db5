use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::TokenApiError;
use super::TokenSuccess;
use crate::domain::security::errors::SecurityError;
use crate::inbound::http::router::AppState;

pub async fn validate_token(
    State(state): State<AppState>,
    body: Result<Json<ValidateTokenRequest>, JsonRejection>,
) -> Result<TokenSuccess<ValidateTokenResponseData>, TokenApiError> {
    let Json(body) = body.map_err(|e| {
        tracing::debug!(error = %e, "Rejected token validation body");
        TokenApiError::BadRequest
    })?;

    let customer_id = state
        .security_service
        .authenticate_token(&body.token)
        .await
        .map_err(|e| match e {
            SecurityError::NoSuchUser => TokenApiError::NotFound,
            SecurityError::ExpireToken => TokenApiError::Expired,
            SecurityError::Internal(detail) => TokenApiError::Internal(detail),
        })?;

    Ok(TokenSuccess(ValidateTokenResponseData {
        customer_id: customer_id.value(),
    }))
}

#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct ValidateTokenRequest {
    token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateTokenResponseData {
    pub customer_id: i64,
}

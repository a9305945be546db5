use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::TokenApiError;
use super::TokenSuccess;
use crate::domain::security::errors::SecurityError;
use crate::inbound::http::router::AppState;

pub async fn issue_token(
    State(state): State<AppState>,
    body: Result<Json<IssueTokenRequest>, JsonRejection>,
) -> Result<TokenSuccess<IssueTokenResponseData>, TokenApiError> {
    let Json(body) = body.map_err(|e| {
        tracing::debug!(error = %e, "Rejected token request body");
        TokenApiError::BadRequest
    })?;

    let token = state
        .security_service
        .issue_token(&body.login, &body.password)
        .await
        .map_err(|e| match e {
            // Wrong password and unknown login share one response.
            SecurityError::NoSuchUser => TokenApiError::BadCredentials,
            SecurityError::Internal(detail) => TokenApiError::Internal(detail),
            // Issuing never reads a stored token, so expiry here is a service bug.
            SecurityError::ExpireToken => {
                tracing::error!("Token issue reported an expired token");
                TokenApiError::Internal("expired token on issue".to_string())
            }
        })?;

    Ok(TokenSuccess(IssueTokenResponseData {
        token: token.into_inner(),
    }))
}

#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct IssueTokenRequest {
    login: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssueTokenResponseData {
    pub token: String,
}

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::block_customer::block_customer;
use super::handlers::block_customer::unblock_customer;
use super::handlers::get_customer::get_customer;
use super::handlers::issue_token::issue_token;
use super::handlers::list_customers::list_active_customers;
use super::handlers::list_customers::list_customers;
use super::handlers::register_customer::register_customer;
use super::handlers::remove_customer::remove_customer;
use super::handlers::save_customer::save_customer;
use super::handlers::validate_token::validate_token;
use crate::domain::customer::ports::CustomerServicePort;
use crate::domain::security::ports::SecurityServicePort;

#[derive(Clone)]
pub struct AppState {
    pub customer_service: Arc<dyn CustomerServicePort>,
    pub security_service: Arc<dyn SecurityServicePort>,
}

pub fn create_router(
    customer_service: Arc<dyn CustomerServicePort>,
    security_service: Arc<dyn SecurityServicePort>,
) -> Router {
    let state = AppState {
        customer_service,
        security_service,
    };

    let token_routes = Router::new()
        .route("/customers/token", post(issue_token))
        .route("/customers/token/validate", post(validate_token));

    let customer_routes = Router::new()
        .route("/customers", get(list_customers).post(save_customer))
        .route("/customers/active", get(list_active_customers))
        .route(
            "/customers/:customer_id",
            get(get_customer).delete(remove_customer),
        )
        .route(
            "/customers/:customer_id/block",
            post(block_customer).delete(unblock_customer),
        );

    // The /api prefix serves the same handlers for existing clients.
    let api_routes = Router::new()
        .route("/api/customers", post(register_customer))
        .route("/api/customers/token", post(issue_token))
        .route("/api/customers/token/validate", post(validate_token));

    // Headers are left out of the span: Authorization carries bearer tokens.
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(token_routes)
        .merge(customer_routes)
        .merge(api_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

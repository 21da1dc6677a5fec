//! Customer relay routes.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;

use crate::customer_api::{CustomerApiError, UpstreamReply};
use crate::state::AppState;
use client::state::customer_form::CustomerDraft;

/// Body `message` returned when the customer API cannot be reached.
pub const UNAVAILABLE_MESSAGE: &str = "customer service unavailable";

/// `POST /api/customers` — forward a draft to the customer API.
pub async fn create_customer(State(state): State<AppState>, Json(draft): Json<CustomerDraft>) -> Response {
    relay("create", state.customers.create_customer(&draft).await)
}

/// `GET /api/customers` — forward a listing request to the customer API.
pub async fn list_customers(State(state): State<AppState>) -> Response {
    relay("list", state.customers.list_customers().await)
}

/// Turn an upstream result into the browser response.
fn relay(operation: &'static str, result: Result<UpstreamReply, CustomerApiError>) -> Response {
    match result {
        Ok(UpstreamReply { status, body }) => {
            let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
            if !status.is_success() {
                tracing::info!(operation, status = status.as_u16(), "customer API rejected request");
            }
            (status, Json(body)).into_response()
        }
        Err(e) => {
            tracing::warn!(operation, error = %e, "customer API unreachable");
            (StatusCode::BAD_GATEWAY, Json(json!({ "message": UNAVAILABLE_MESSAGE }))).into_response()
        }
    }
}

#[cfg(test)]
#[path = "customers_test.rs"]
mod tests;

//! REST API helpers for the customer endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning a runtime failure since these endpoints
//! are only called from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is reduced to a [`SubmitFailure`]; callers decide what the
//! user sees through [`crate::net::error::classify`]. Nothing here panics.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::SubmitFailure;
use super::types::Customer;
use crate::state::customer_form::CustomerDraft;

/// Same-origin customer collection endpoint served by the host server.
pub const CUSTOMERS_ENDPOINT: &str = "/api/customers";

#[cfg(any(test, feature = "hydrate"))]
fn status_failure_message(status: u16) -> String {
    format!("request failed with status code {status}")
}

/// Build a transport failure from a non-success response, keeping its JSON body if it has one.
#[cfg(any(test, feature = "hydrate"))]
fn failure_from_response(status: u16, body: &str) -> SubmitFailure {
    SubmitFailure::Transport {
        status: Some(status),
        message: status_failure_message(status),
        payload: serde_json::from_str::<serde_json::Value>(body).ok(),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn network_failure(err: impl std::fmt::Display) -> SubmitFailure {
    SubmitFailure::Transport { status: None, message: err.to_string(), payload: None }
}

/// Best-effort read of a creation reply: the record itself or a `{"data": {...}}`
/// envelope. Empty, `null` or unrecognized bodies give `None`; the status alone
/// decides success.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn created_from_body(body: &str) -> Option<Customer> {
    let value = serde_json::from_str::<serde_json::Value>(body).ok()?;
    let record = value.get("data").filter(|data| data.is_object()).unwrap_or(&value);
    if !record.is_object() {
        return None;
    }
    serde_json::from_value(record.clone()).ok()
}

#[cfg(feature = "hydrate")]
async fn read_failure(resp: gloo_net::http::Response) -> SubmitFailure {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    failure_from_response(status, &body)
}

/// Create a customer via `POST /api/customers`.
///
/// # Errors
///
/// Returns a transport failure if the request cannot complete or the API
/// responds with a non-success status, and a runtime failure if the request
/// cannot be encoded. Any success status is a success; the created record is
/// returned when the body carries one.
pub async fn create_customer(draft: &CustomerDraft) -> Result<Option<Customer>, SubmitFailure> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(CUSTOMERS_ENDPOINT)
            .json(draft)
            .map_err(|e| SubmitFailure::Runtime(e.to_string()))?
            .send()
            .await
            .map_err(network_failure)?;
        if !resp.ok() {
            return Err(read_failure(resp).await);
        }
        let body = resp.text().await.unwrap_or_default();
        Ok(created_from_body(&body))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = draft;
        Err(SubmitFailure::Runtime("not available on server".to_owned()))
    }
}

/// Fetch all customers via `GET /api/customers`.
///
/// # Errors
///
/// Same failure mapping as [`create_customer`].
pub async fn list_customers() -> Result<Vec<Customer>, SubmitFailure> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(CUSTOMERS_ENDPOINT)
            .send()
            .await
            .map_err(network_failure)?;
        if !resp.ok() {
            return Err(read_failure(resp).await);
        }
        resp.json::<Vec<Customer>>()
            .await
            .map_err(|e| SubmitFailure::Runtime(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(SubmitFailure::Runtime("not available on server".to_owned()))
    }
}

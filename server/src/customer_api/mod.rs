//! Backend customer API adapter.
//!
//! DESIGN
//! ======
//! The host server does not interpret customer API responses. It relays the
//! upstream status and JSON body so the browser sees the API's own validation
//! messages. [`CustomerApi`] is the seam handlers depend on; `HttpCustomerApi`
//! is the `reqwest` implementation and tests substitute a mock.

pub mod http;

pub use http::HttpCustomerApi;

use client::state::customer_form::CustomerDraft;

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by customer API client operations.
#[derive(Debug, thiserror::Error)]
pub enum CustomerApiError {
    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The request did not produce a response (connect, timeout, body read).
    #[error("customer API request failed: {0}")]
    Request(String),
}

// =============================================================================
// REPLY
// =============================================================================

/// Upstream answer to relay: status code plus JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamReply {
    pub status: u16,
    pub body: serde_json::Value,
}

/// Trait for the customer API, enabling mock implementations in tests.
#[async_trait::async_trait]
pub trait CustomerApi: Send + Sync {
    /// `POST {base}/customers` with the draft as JSON.
    async fn create_customer(&self, draft: &CustomerDraft) -> Result<UpstreamReply, CustomerApiError>;

    /// `GET {base}/customers`.
    async fn list_customers(&self) -> Result<UpstreamReply, CustomerApiError>;
}

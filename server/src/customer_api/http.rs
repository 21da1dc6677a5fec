//! `reqwest` implementation of [`CustomerApi`].

use std::time::Duration;

use axum::http::StatusCode;
use serde_json::{Value, json};

use super::{CustomerApi, CustomerApiError, UpstreamReply};
use crate::config::CustomerApiConfig;
use client::state::customer_form::CustomerDraft;

/// [`CustomerApi`] backed by the upstream HTTP customer service.
pub struct HttpCustomerApi {
    http: reqwest::Client,
    base_url: String,
}

impl HttpCustomerApi {
    /// Build a pooled client with the configured timeouts.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: &CustomerApiConfig) -> Result<Self, CustomerApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| CustomerApiError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: config.base_url.clone() })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn read_reply(response: reqwest::Response) -> Result<UpstreamReply, CustomerApiError> {
        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| CustomerApiError::Request(e.to_string()))?;
        Ok(UpstreamReply { status, body: reply_body(status, &text) })
    }
}

#[async_trait::async_trait]
impl CustomerApi for HttpCustomerApi {
    async fn create_customer(&self, draft: &CustomerDraft) -> Result<UpstreamReply, CustomerApiError> {
        let response = self
            .http
            .post(customers_url(&self.base_url))
            .json(draft)
            .send()
            .await
            .map_err(|e| CustomerApiError::Request(e.to_string()))?;
        Self::read_reply(response).await
    }

    async fn list_customers(&self) -> Result<UpstreamReply, CustomerApiError> {
        let response = self
            .http
            .get(customers_url(&self.base_url))
            .send()
            .await
            .map_err(|e| CustomerApiError::Request(e.to_string()))?;
        Self::read_reply(response).await
    }
}

fn customers_url(base_url: &str) -> String {
    format!("{}/customers", base_url.trim_end_matches('/'))
}

/// JSON body to relay for an upstream response.
///
/// JSON passes through untouched. Anything else becomes `{"message": text}`
/// so the browser always receives the `message` shape; an empty body uses the
/// status reason phrase.
fn reply_body(status: u16, text: &str) -> Value {
    if let Ok(value) = serde_json::from_str::<Value>(text) {
        return value;
    }
    let text = text.trim();
    if !text.is_empty() {
        return json!({ "message": text });
    }
    let reason = StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .unwrap_or("");
    if reason.is_empty() || (200..300).contains(&status) {
        Value::Null
    } else {
        json!({ "message": reason })
    }
}

#[cfg(test)]
#[path = "http_test.rs"]
mod tests;

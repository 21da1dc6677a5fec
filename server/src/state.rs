//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the customer API adapter behind a trait object so handlers can be
//! exercised against a mock.

use std::sync::Arc;

use crate::customer_api::CustomerApi;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; the adapter is Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub customers: Arc<dyn CustomerApi>,
}

impl AppState {
    #[must_use]
    pub fn new(customers: Arc<dyn CustomerApi>) -> Self {
        Self { customers }
    }
}

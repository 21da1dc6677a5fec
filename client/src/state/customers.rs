//! Customer-list state for the listing page.

#[cfg(test)]
#[path = "customers_test.rs"]
mod customers_test;

use crate::net::types::Customer;

/// Customer listing fetched from `GET /api/customers`.
#[derive(Clone, Debug, Default)]
pub struct CustomersState {
    pub items: Vec<Customer>,
    pub loading: bool,
    pub error: Option<String>,
}

impl CustomersState {
    /// Mark a fetch as started, keeping the previous items on screen.
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Apply the outcome of a fetch.
    pub fn finish_load(&mut self, result: Result<Vec<Customer>, String>) {
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(message) => self.error = Some(message),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.loading && self.error.is_none() && self.items.is_empty()
    }
}

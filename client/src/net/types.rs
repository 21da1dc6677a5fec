//! Wire DTOs for the `/api/customers` boundary.
//!
//! DESIGN
//! ======
//! Field names follow the customer API's camelCase JSON. Every field defaults
//! to empty so partially populated records from the API still render.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A saved customer as returned by the customer API.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Customer {
    /// Server-assigned identifier.
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    /// Server-assigned creation timestamp, as sent by the API.
    pub created_at: String,
}

impl Customer {
    /// `"First Last"`, trimmed; falls back to the email when both names are empty.
    #[must_use]
    pub fn display_name(&self) -> String {
        let name = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let name = name.trim();
        if name.is_empty() { self.email.clone() } else { name.to_owned() }
    }
}

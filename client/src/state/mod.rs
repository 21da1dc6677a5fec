//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`customer_form`, `customers`, `toast`) so pages
//! and components depend on small focused models.

pub mod customer_form;
pub mod customers;
pub mod toast;

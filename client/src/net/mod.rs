//! Networking modules for the customer REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls, `error` turns their failures into
//! user-facing notices, and `types` defines the wire schema.

pub mod api;
pub mod error;
pub mod types;

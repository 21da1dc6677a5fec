//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome (title bar, toasts) and read/write shared
//! state from Leptos context providers.

pub mod navigation_title_bar;
pub mod toaster;

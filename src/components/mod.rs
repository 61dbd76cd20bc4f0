//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome and the route guard while reading shared
//! state from Leptos context providers.

pub mod footer;
pub mod navbar;
pub mod route_gate;

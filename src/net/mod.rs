//! Networking modules for the hosted-backend boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls and the persisted session marker, `session` owns
//! the reconciliation controller, and `types` defines the wire schema.

pub mod api;
pub mod session;
pub mod types;

//! Build-time configuration for the hosted backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend project URL and publishable API key are baked in at compile
//! time. Deployments override them by exporting the corresponding environment
//! variables when building the WASM bundle.

/// Base URL of the hosted backend project.
pub const BACKEND_URL: &str = match option_env!("HOMEPROTECT_BACKEND_URL") {
    Some(url) => url,
    None => "https://qwzkfdtlevnahypxzerd.supabase.co",
};

/// Publishable (anon) API key sent with every request. Row-level security on
/// the backend is what actually scopes data access; this key only identifies
/// the project.
pub const BACKEND_PUBLISHABLE_KEY: &str = match option_env!("HOMEPROTECT_BACKEND_KEY") {
    Some(key) => key,
    None => "sb_publishable_9hT3mWqLcPx2VdRkYfAuGg_K4NbSxEe",
};

//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the route gate and user-aware components to coordinate login
//! redirects and identity-dependent rendering. Owned and written exclusively
//! by the session controller; everything else reads it through context.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state tracking the current user and loading status.
///
/// `loading` starts `true` and stays set only while a reconciliation pass is
/// in flight or before the first one completes; the controller's fail-safe
/// deadline bounds it.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl AuthState {
    /// Whether a signed-in user is currently resolved.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

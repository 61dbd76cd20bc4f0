//! Route-gate decision logic for role-protected views.
//!
//! DESIGN
//! ======
//! The gate is a pure function over (required roles, auth state, attempted
//! path) so every protected route applies identical behavior and the whole
//! decision table is testable without a browser. The `RouteGate` component
//! wraps this with the actual navigation side effects.

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

use crate::net::types::{User, UserRole};
use crate::state::auth::AuthState;

/// Path of the login view unauthenticated visitors are sent to.
pub const LOGIN_PATH: &str = "/login";

/// Per-navigation outcome of evaluating a protected view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GateDecision {
    /// Auth is still reconciling; render a neutral placeholder and make no
    /// redirect decision yet.
    Pending,
    /// Render the requested view.
    Grant,
    /// No signed-in user: go to login, remembering where the visitor was
    /// headed so login can return them there.
    LoginRedirect { from: String },
    /// Signed in but the wrong role: go to that role's own home view.
    HomeRedirect { to: &'static str },
}

/// Total mapping from role to its home view. Exhaustive on purpose: adding a
/// role must surface here as a compile error, not a silent fallthrough.
pub fn role_home(role: UserRole) -> &'static str {
    match role {
        UserRole::Admin => "/admin",
        UserRole::Staff => "/staff",
        UserRole::Customer => "/dashboard",
    }
}

/// Evaluate one navigation attempt. An empty `required` set means "any
/// authenticated role".
pub fn evaluate(required: &[UserRole], auth: &AuthState, current_path: &str) -> GateDecision {
    if auth.loading {
        return GateDecision::Pending;
    }
    let Some(user) = &auth.user else {
        return GateDecision::LoginRedirect { from: current_path.to_owned() };
    };
    if !required.is_empty() && !required.contains(&user.role) {
        return GateDecision::HomeRedirect { to: role_home(user.role) };
    }
    GateDecision::Grant
}

/// Login URL carrying the originally requested path as a query parameter.
pub fn login_redirect_path(from: &str) -> String {
    if from.is_empty() || from == LOGIN_PATH {
        LOGIN_PATH.to_owned()
    } else {
        format!("{LOGIN_PATH}?redirect={from}")
    }
}

/// Where a successful login should land: the remembered path when it is a
/// rooted application path, otherwise the role's home view.
pub fn post_login_destination(redirect: Option<&str>, role: UserRole) -> String {
    match redirect {
        Some(path) if path.starts_with('/') && !path.starts_with("//") => path.to_owned(),
        _ => role_home(role).to_owned(),
    }
}

/// Navbar shortcut: the current user's dashboard, or login when signed out.
pub fn dashboard_path(user: Option<&User>) -> &'static str {
    match user {
        Some(user) => role_home(user.role),
        None => LOGIN_PATH,
    }
}

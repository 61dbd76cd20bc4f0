//! Declarative guard for role-protected routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Evaluated on every navigation and on every auth-state change: renders the
//! requested view, sends unauthenticated visitors to login (carrying the
//! attempted path), or sends authenticated-but-wrong-role visitors to their
//! own dashboard. While the session is still reconciling it shows a neutral
//! placeholder and makes no redirect decision, so the login screen never
//! flashes during the initial load.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::net::types::UserRole;
use crate::state::auth::AuthState;
use crate::state::gate::{self, GateDecision};

fn replace_navigation() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Wrap a protected view. An empty `roles` list admits any signed-in user.
#[component]
pub fn RouteGate(#[prop(optional)] roles: Vec<UserRole>, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();
    let navigate = use_navigate();

    let redirect_roles = roles.clone();
    Effect::new(move || {
        let state = auth.get();
        let path = location.pathname.get();
        match gate::evaluate(&redirect_roles, &state, &path) {
            GateDecision::LoginRedirect { from } => {
                navigate(&gate::login_redirect_path(&from), replace_navigation());
            }
            GateDecision::HomeRedirect { to } => {
                navigate(to, replace_navigation());
            }
            GateDecision::Pending | GateDecision::Grant => {}
        }
    });

    view! {
        {move || {
            let state = auth.get();
            let path = location.pathname.get();
            match gate::evaluate(&roles, &state, &path) {
                GateDecision::Grant => children().into_any(),
                // Redirects resolve in the effect above; keep the placeholder
                // up until the router takes over.
                GateDecision::Pending
                | GateDecision::LoginRedirect { .. }
                | GateDecision::HomeRedirect { .. } => view! { <LoadingScreen/> }.into_any(),
            }
        }}
    }
}

/// Neutral full-screen placeholder shown while auth reconciles or a redirect
/// is in flight.
#[component]
fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="loading-screen">
            <div class="loading-screen__spinner"></div>
            <p class="loading-screen__text">"Loading..."</p>
        </div>
    }
}

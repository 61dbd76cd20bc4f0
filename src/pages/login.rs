//! Login page: email + password sign-in with a role-aware destination.
//!
//! SYSTEM CONTEXT
//! ==============
//! On success the page announces the signed-in event to the session
//! controller (which runs a full reconciliation pass) and navigates to the
//! remembered `redirect` target when the route gate supplied one, otherwise
//! to the role's own dashboard.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::net::session::SessionController;
#[cfg(feature = "hydrate")]
use crate::net::types::{AuthEvent, AuthSession, UserRole};
#[cfg(feature = "hydrate")]
use crate::state::gate;

/// Validate the login form, trimming the email.
fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    if password.is_empty() {
        return Err("Enter your password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Sign in, then resolve the role from the profile row so navigation can
/// pick the right dashboard.
#[cfg(feature = "hydrate")]
async fn sign_in_flow(email: &str, password: &str) -> Result<(AuthSession, UserRole), String> {
    let session = crate::net::api::sign_in(email, password).await?;
    let profile = crate::net::api::fetch_profile(&session.user.id)
        .await
        .ok_or_else(|| "Could not load your profile. Please try again.".to_owned())?;
    Ok((session, profile.role))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionController>();
    let navigate = use_navigate();
    let query = use_query_map();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) =
            match validate_login_input(&email.get(), &password.get()) {
                Ok(values) => values,
                Err(message) => {
                    error.set(Some(message.to_owned()));
                    return;
                }
            };
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let session = session.clone();
            let navigate = navigate.clone();
            let redirect = query.get_untracked().get("redirect");
            leptos::task::spawn_local(async move {
                match sign_in_flow(&email_value, &password_value).await {
                    Ok((auth_session, role)) => {
                        session.announce(AuthEvent::signed_in(auth_session));
                        let destination = gate::post_login_destination(redirect.as_deref(), role);
                        navigate(
                            &destination,
                            NavigateOptions { replace: true, ..NavigateOptions::default() },
                        );
                    }
                    Err(message) => {
                        error.set(Some(message));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value, &session, &navigate, &query);
        }
    };

    view! {
        <div class="auth-page">
            <a href="/" class="auth-page__brand">"Home Protection"</a>
            <div class="auth-card">
                <h1 class="auth-card__title">"Welcome back"</h1>
                <p class="auth-card__subtitle">"Sign in to manage your bookings"</p>

                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label">
                        "Email"
                        <input
                            class="auth-form__input"
                            type="email"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__label">
                        "Password"
                        <input
                            class="auth-form__input"
                            type="password"
                            placeholder="Your password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary auth-form__submit" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>

                <Show when=move || error.get().is_some()>
                    <p class="auth-card__error">{move || error.get().unwrap_or_default()}</p>
                </Show>

                <p class="auth-card__footer">
                    "New here? "
                    <a href="/signup">"Create an account"</a>
                </p>
            </div>
        </div>
    }
}

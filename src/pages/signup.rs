//! Signup page: account creation plus the customer profile row.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

/// Validated signup form values.
#[derive(Clone, Debug, PartialEq, Eq)]
struct SignupInput {
    full_name: String,
    email: String,
    phone: String,
    password: String,
}

/// Validate and normalize the signup form. Phone is optional; everything
/// else is required, and the password must satisfy the backend minimum.
fn validate_signup_input(
    full_name: &str,
    email: &str,
    phone: &str,
    password: &str,
) -> Result<SignupInput, &'static str> {
    let full_name = full_name.trim();
    if full_name.is_empty() {
        return Err("Enter your full name.");
    }
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    if password.len() < 6 {
        return Err("Password must be at least 6 characters.");
    }
    Ok(SignupInput {
        full_name: full_name.to_owned(),
        email: email.to_owned(),
        phone: phone.trim().to_owned(),
        password: password.to_owned(),
    })
}

/// Create the account, then ensure its profile row exists. The backend
/// normally creates the row via trigger; a failed insert is logged and the
/// signup still counts.
#[cfg(feature = "hydrate")]
async fn signup_flow(input: &SignupInput) -> Result<(), String> {
    let identity = crate::net::api::sign_up(&input.email, &input.password, &input.full_name).await?;
    if let Err(err) = crate::net::api::create_profile(&identity.id, &input.full_name, &input.phone).await
    {
        leptos::logging::warn!("profile creation failed: {err}");
    }
    Ok(())
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let navigate = use_navigate();

    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let notice = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let input = match validate_signup_input(
            &full_name.get(),
            &email.get(),
            &phone.get(),
            &password.get(),
        ) {
            Ok(input) => input,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match signup_flow(&input).await {
                    Ok(()) => {
                        notice.set(Some(
                            "Account created. Check your email for the confirmation link."
                                .to_owned(),
                        ));
                        navigate("/login", NavigateOptions::default());
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
            let _ = (input, &navigate);
        }
    };

    view! {
        <div class="auth-page">
            <a href="/" class="auth-page__brand">"Home Protection"</a>
            <div class="auth-card">
                <h1 class="auth-card__title">"Create your account"</h1>
                <p class="auth-card__subtitle">"Book trusted home services in minutes"</p>

                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label">
                        "Full Name"
                        <input
                            class="auth-form__input"
                            type="text"
                            placeholder="Ali Raza"
                            prop:value=move || full_name.get()
                            on:input=move |ev| full_name.set(event_target_value(&ev))
                        />
                    </label>
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
                        "Phone (optional)"
                        <input
                            class="auth-form__input"
                            type="tel"
                            placeholder="03xx-xxxxxxx"
                            prop:value=move || phone.get()
                            on:input=move |ev| phone.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__label">
                        "Password"
                        <input
                            class="auth-form__input"
                            type="password"
                            placeholder="At least 6 characters"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary auth-form__submit" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Sign Up" }}
                    </button>
                </form>

                <Show when=move || error.get().is_some()>
                    <p class="auth-card__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <Show when=move || notice.get().is_some()>
                    <p class="auth-card__notice">{move || notice.get().unwrap_or_default()}</p>
                </Show>

                <p class="auth-card__footer">
                    "Already have an account? "
                    <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}

//! Top navigation bar for the public pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Auth-aware chrome: signed-out visitors get login/signup actions, signed-in
//! users get a shortcut to their role's dashboard and a sign-out button that
//! goes through the session controller.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::net::session::SessionController;
use crate::state::auth::AuthState;
use crate::state::gate;

const NAV_LINKS: &[(&str, &str)] = &[
    ("Home", "/"),
    ("Services", "/services"),
    ("About Us", "/about"),
    ("Careers", "/careers"),
    ("Contact", "/contact"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = expect_context::<SessionController>();
    let location = use_location();
    let navigate = use_navigate();

    let signed_in = move || auth.get().is_authenticated();
    let dashboard_href = move || gate::dashboard_path(auth.get().user.as_ref());

    let on_sign_out = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let session = session.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                session.sign_out().await;
                navigate("/", NavigateOptions::default());
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&session, &navigate);
        }
    };

    view! {
        <nav class="navbar">
            <div class="navbar__inner">
                <a href="/" class="navbar__brand">
                    <span class="navbar__brand-name">"Home Protection"</span>
                    <span class="navbar__brand-tag">"Maintenance Experts"</span>
                </a>

                <div class="navbar__links">
                    {NAV_LINKS
                        .iter()
                        .map(|(name, path)| {
                            view! {
                                <a
                                    href=*path
                                    class="navbar__link"
                                    class=("navbar__link--active", move || location.pathname.get() == *path)
                                >
                                    {*name}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>

                <div class="navbar__actions">
                    <Show
                        when=signed_in
                        fallback=|| {
                            view! {
                                <a href="/login" class="btn btn--ghost">"Login"</a>
                                <a href="/signup" class="btn btn--primary">"Sign Up"</a>
                            }
                        }
                    >
                        <a href=dashboard_href class="btn btn--ghost">"My Dashboard"</a>
                        <button class="btn btn--danger" on:click=on_sign_out.clone()>
                            "Logout"
                        </button>
                    </Show>
                </div>
            </div>
        </nav>
    }
}

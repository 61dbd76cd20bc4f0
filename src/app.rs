//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::StaticSegment;
use leptos_router::components::{Redirect, Route, Router, Routes};

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::components::route_gate::RouteGate;
use crate::net::session::SessionController;
use crate::net::types::UserRole;
use crate::pages::about::AboutPage;
use crate::pages::admin::AdminDashboard;
use crate::pages::careers::CareersPage;
use crate::pages::contact::ContactPage;
use crate::pages::customer::CustomerDashboard;
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::services::ServicesPage;
use crate::pages::signup::SignupPage;
use crate::pages::staff::StaffDashboard;
use crate::state::auth::AuthState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Constructs the one session controller for this client, provides the shared
/// auth state, and sets up client-side routing with gated dashboards.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let session = SessionController::new(auth);
    provide_context(auth);
    provide_context(session.clone());

    // One-shot: repeated mounts re-enter here but register nothing twice.
    session.start();
    on_cleanup({
        let session = session.clone();
        move || session.shut_down()
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/homeprotect.css"/>
        <Title text="Home Protection"/>

        <Router>
            <Routes fallback=|| view! { <Redirect path="/"/> }>
                <Route path=StaticSegment("") view=|| view! { <Navbar/> <HomePage/> <Footer/> }/>
                <Route
                    path=StaticSegment("services")
                    view=|| view! { <Navbar/> <ServicesPage/> <Footer/> }
                />
                <Route
                    path=StaticSegment("about")
                    view=|| view! { <Navbar/> <AboutPage/> <Footer/> }
                />
                <Route
                    path=StaticSegment("contact")
                    view=|| view! { <Navbar/> <ContactPage/> <Footer/> }
                />
                <Route
                    path=StaticSegment("careers")
                    view=|| view! { <Navbar/> <CareersPage/> <Footer/> }
                />
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>

                <Route
                    path=StaticSegment("admin")
                    view=|| {
                        view! {
                            <RouteGate roles=vec![UserRole::Admin]>
                                <AdminDashboard/>
                            </RouteGate>
                        }
                    }
                />
                <Route
                    path=StaticSegment("staff")
                    view=|| {
                        view! {
                            <RouteGate roles=vec![UserRole::Staff]>
                                <StaffDashboard/>
                            </RouteGate>
                        }
                    }
                />
                <Route
                    path=StaticSegment("dashboard")
                    view=|| {
                        view! {
                            <RouteGate roles=vec![UserRole::Customer]>
                                <CustomerDashboard/>
                            </RouteGate>
                        }
                    }
                />
            </Routes>
        </Router>
    }
}

//! About page: company story and service promises.

use leptos::prelude::*;

const PROMISES: &[(&str, &str)] = &[
    ("Vetted Professionals", "Every technician is background-checked and trade-certified."),
    ("Upfront Pricing", "Quotes before work starts. No surprise charges at the door."),
    ("Workmanship Guarantee", "If a repair fails within 30 days, we return and fix it free."),
];

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="about-page">
            <section class="about-page__intro">
                <h1>"About Home Protection"</h1>
                <p>
                    "We started in Lahore with a simple idea: home maintenance should be
                    as dependable as the homes it protects. Today our network covers AC
                    service, carpentry, security installation, cleaning, electrical and
                    plumbing work across the city."
                </p>
            </section>

            <section class="about-page__promises">
                {PROMISES
                    .iter()
                    .map(|(title, body)| {
                        view! {
                            <div class="promise-card">
                                <span class="promise-card__title">{*title}</span>
                                <p class="promise-card__body">{*body}</p>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </section>
        </div>
    }
}

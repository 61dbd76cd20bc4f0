//! Landing page: hero, service-category grid, and booking call-to-action.

use leptos::prelude::*;

use crate::net::types::ServiceCategory;

const STATS: &[(&str, &str)] = &[
    ("10k+", "Jobs Completed"),
    ("4.8", "Average Rating"),
    ("250+", "Vetted Professionals"),
    ("24/7", "Support"),
];

/// Demo categories shown when the backend read fails or the table is empty,
/// so the landing page never renders a bare grid.
fn fallback_categories() -> Vec<ServiceCategory> {
    let demo = [
        ("1", "AC Services", "fa-snowflake", "Expert cooling solutions"),
        ("2", "Carpentry", "fa-hammer", "Fine woodwork and repair"),
        ("3", "CCTV & Security", "fa-video", "Keep your home safe"),
        ("4", "Cleaning", "fa-broom", "Sparkling clean spaces"),
        ("5", "Electrical", "fa-bolt", "Safe power installations"),
        ("6", "Plumbing", "fa-faucet", "Flow control and repair"),
    ];
    demo.into_iter()
        .map(|(id, name, icon, description)| ServiceCategory {
            id: id.to_owned(),
            name: name.to_owned(),
            icon: Some(icon.to_owned()),
            description: Some(description.to_owned()),
        })
        .collect()
}

#[component]
pub fn HomePage() -> impl IntoView {
    let categories = LocalResource::new(|| async {
        crate::net::api::fetch_service_categories()
            .await
            .filter(|list| !list.is_empty())
            .unwrap_or_else(fallback_categories)
    });

    view! {
        <div class="home-page">
            <section class="hero">
                <h1 class="hero__title">"Home maintenance, handled."</h1>
                <p class="hero__subtitle">
                    "Book vetted professionals for AC service, plumbing, electrical work
                    and more. Upfront pricing, on-time arrival."
                </p>
                <div class="hero__actions">
                    <a href="/services" class="btn btn--primary">"Browse Services"</a>
                    <a href="/contact" class="btn btn--ghost">"Talk to Us"</a>
                </div>
            </section>

            <section class="stats">
                {STATS
                    .iter()
                    .map(|(value, label)| {
                        view! {
                            <div class="stats__tile">
                                <span class="stats__value">{*value}</span>
                                <span class="stats__label">{*label}</span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </section>

            <section class="categories">
                <h2 class="categories__title">"What do you need done?"</h2>
                <Suspense fallback=move || view! { <p>"Loading categories..."</p> }>
                    {move || {
                        categories
                            .get()
                            .map(|list| {
                                view! {
                                    <div class="categories__grid">
                                        {list
                                            .into_iter()
                                            .map(|category| {
                                                view! { <CategoryCard category/> }
                                            })
                                            .collect::<Vec<_>>()}
                                    </div>
                                }
                            })
                    }}
                </Suspense>
            </section>
        </div>
    }
}

/// One tile in the category grid.
#[component]
fn CategoryCard(category: ServiceCategory) -> impl IntoView {
    let icon_class = format!("fas {}", category.icon.unwrap_or_default());
    view! {
        <a href="/services" class="category-card">
            <i class=icon_class></i>
            <span class="category-card__name">{category.name}</span>
            <span class="category-card__blurb">{category.description.unwrap_or_default()}</span>
        </a>
    }
}

//! Services catalogue with client-side search.

#[cfg(test)]
#[path = "services_test.rs"]
mod services_test;

use leptos::prelude::*;

use crate::net::types::Service;
use crate::util::format::price_label;

/// Case-insensitive filter over listed services by name and description.
fn filter_services(services: &[Service], query: &str) -> Vec<Service> {
    let needle = query.trim().to_lowercase();
    services
        .iter()
        .filter(|service| service.is_listed())
        .filter(|service| {
            needle.is_empty()
                || service.name.to_lowercase().contains(&needle)
                || service
                    .description
                    .as_deref()
                    .map_or(false, |d| d.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

#[component]
pub fn ServicesPage() -> impl IntoView {
    let services = LocalResource::new(|| async {
        crate::net::api::fetch_services().await.unwrap_or_default()
    });
    let search = RwSignal::new(String::new());

    view! {
        <div class="services-page">
            <header class="services-page__header">
                <h1>"Our Services"</h1>
                <input
                    class="services-page__search"
                    type="search"
                    placeholder="Search services..."
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
            </header>

            <Suspense fallback=move || view! { <p>"Loading services..."</p> }>
                {move || {
                    services
                        .get()
                        .map(|list| {
                            let visible = filter_services(&list, &search.get());
                            if visible.is_empty() {
                                view! {
                                    <p class="services-page__empty">
                                        "No services match your search."
                                    </p>
                                }
                                    .into_any()
                            } else {
                                view! {
                                    <div class="services-page__grid">
                                        {visible
                                            .into_iter()
                                            .map(|service| {
                                                view! { <ServiceCard service/> }
                                            })
                                            .collect::<Vec<_>>()}
                                    </div>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

/// One service tile with strikethrough pricing when discounted.
#[component]
fn ServiceCard(service: Service) -> impl IntoView {
    let has_discount = matches!(
        (service.marked_price, service.discount_price),
        (Some(marked), Some(discount)) if discount < marked
    );
    let headline_price = if has_discount { service.discount_price } else { service.marked_price };

    view! {
        <div class="service-card">
            <span class="service-card__name">{service.name}</span>
            <p class="service-card__blurb">{service.description.unwrap_or_default()}</p>
            <div class="service-card__pricing">
                <Show when=move || has_discount>
                    <span class="service-card__struck">{price_label(service.marked_price)}</span>
                </Show>
                <span class="service-card__price">{price_label(headline_price)}</span>
            </div>
            <a href="/contact" class="btn btn--primary service-card__book">"Book Now"</a>
        </div>
    }
}

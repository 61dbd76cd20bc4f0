//! Customer dashboard: profile card and booking history.

#[cfg(test)]
#[path = "customer_test.rs"]
mod customer_test;

use leptos::prelude::*;

use crate::net::types::{Booking, User};
use crate::state::auth::AuthState;
use crate::util::format::{booking_reference, price_label, short_date, status_badge_class};

/// Uppercase initial for the avatar circle.
fn avatar_initial(full_name: &str) -> String {
    full_name
        .chars()
        .next()
        .map(|first| first.to_uppercase().to_string())
        .unwrap_or_else(|| "?".to_owned())
}

#[component]
pub fn CustomerDashboard() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    // Refetches whenever the reconciled user changes.
    let bookings = LocalResource::new(move || {
        let user_id = auth.get().user.map(|user| user.id);
        async move {
            match user_id {
                Some(id) => crate::net::api::fetch_my_bookings(&id).await.unwrap_or_default(),
                None => Vec::new(),
            }
        }
    });

    view! {
        <div class="customer-dashboard">
            {move || auth.get().user.map(|user| view! { <ProfileCard user/> })}

            <section class="customer-dashboard__history">
                <h2>"My Booking History"</h2>
                <Suspense fallback=move || view! { <p>"Loading bookings..."</p> }>
                    {move || {
                        bookings
                            .get()
                            .map(|list| {
                                if list.is_empty() {
                                    view! {
                                        <p class="customer-dashboard__empty">
                                            "No bookings yet. Browse our services to get started."
                                        </p>
                                    }
                                        .into_any()
                                } else {
                                    view! {
                                        <div class="customer-dashboard__list">
                                            {list
                                                .into_iter()
                                                .map(|booking| view! { <BookingRow booking/> })
                                                .collect::<Vec<_>>()}
                                        </div>
                                    }
                                        .into_any()
                                }
                            })
                    }}
                </Suspense>
            </section>
        </div>
    }
}

/// Profile summary card for the signed-in customer.
#[component]
fn ProfileCard(user: User) -> impl IntoView {
    let phone = if user.phone.is_empty() { "No phone added".to_owned() } else { user.phone };
    let member_since = short_date(&user.created_at);

    view! {
        <aside class="profile-card">
            <div class="profile-card__avatar">{avatar_initial(&user.full_name)}</div>
            <span class="profile-card__name">{user.full_name}</span>
            <span class="profile-card__email">{user.email}</span>
            <div class="profile-card__details">
                <span class="profile-card__line">{phone}</span>
                <span class="profile-card__line">"Member since " {member_since}</span>
            </div>
        </aside>
    }
}

/// One booking history row.
#[component]
fn BookingRow(booking: Booking) -> impl IntoView {
    let scheduled = short_date(booking.scheduled_at.as_deref().unwrap_or_default());
    let address = booking.address.unwrap_or_else(|| "Address on file".to_owned());

    view! {
        <div class="booking-row">
            <div class="booking-row__summary">
                <span class="booking-row__reference">{booking_reference(&booking.id)}</span>
                <span class=status_badge_class(booking.status)>{booking.status.label()}</span>
                <span class="booking-row__address">{address}</span>
                <span class="booking-row__scheduled">"Scheduled: " {scheduled}</span>
            </div>
            <span class="booking-row__amount">{price_label(booking.total_amount)}</span>
        </div>
    }
}

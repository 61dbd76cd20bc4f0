//! Staff dashboard: the active job queue.

use leptos::prelude::*;

use crate::net::types::{Booking, BookingStatus};
use crate::util::format::{booking_reference, short_date, status_badge_class};

/// Bookings a field team still has to act on, in arrival order.
fn active_queue(bookings: Vec<Booking>) -> Vec<Booking> {
    bookings
        .into_iter()
        .filter(|booking| {
            matches!(booking.status, BookingStatus::Pending | BookingStatus::InProgress)
        })
        .collect()
}

#[component]
pub fn StaffDashboard() -> impl IntoView {
    let bookings = LocalResource::new(|| async {
        crate::net::api::fetch_all_bookings().await.unwrap_or_default()
    });

    view! {
        <div class="staff-dashboard">
            <header class="staff-dashboard__header">
                <h1>"Job Queue"</h1>
                <p>"Pending and in-progress bookings assigned to the field teams."</p>
            </header>

            <Suspense fallback=move || view! { <p>"Loading queue..."</p> }>
                {move || {
                    bookings
                        .get()
                        .map(|list| {
                            let queue = active_queue(list);
                            if queue.is_empty() {
                                view! {
                                    <p class="staff-dashboard__empty">"Queue is clear. Nice work."</p>
                                }
                                    .into_any()
                            } else {
                                view! {
                                    <div class="staff-dashboard__list">
                                        {queue
                                            .into_iter()
                                            .map(|booking| {
                                                let scheduled = short_date(
                                                    booking.scheduled_at.as_deref().unwrap_or_default(),
                                                );
                                                let address = booking
                                                    .address
                                                    .unwrap_or_else(|| "Address on file".to_owned());
                                                let contact = booking
                                                    .contact_number
                                                    .unwrap_or_else(|| "No contact number".to_owned());
                                                view! {
                                                    <div class="queue-card">
                                                        <div class="queue-card__head">
                                                            <span class="queue-card__reference">
                                                                {booking_reference(&booking.id)}
                                                            </span>
                                                            <span class=status_badge_class(booking.status)>
                                                                {booking.status.label()}
                                                            </span>
                                                        </div>
                                                        <span class="queue-card__address">{address}</span>
                                                        <span class="queue-card__meta">
                                                            {scheduled} " · " {contact}
                                                        </span>
                                                    </div>
                                                }
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

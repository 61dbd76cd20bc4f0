//! Admin dashboard: booking statistics and the recent-bookings table.
//!
//! Category, service, and job management screens live outside this crate;
//! the dashboard gives admins the operational overview.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use leptos::prelude::*;

use crate::net::types::{Booking, BookingStatus};
use crate::util::format::{booking_reference, price_label, short_date, status_badge_class};

/// How many rows the recent-bookings table shows.
const RECENT_LIMIT: usize = 8;

/// Aggregates shown in the stat tiles.
#[derive(Clone, Debug, Default, PartialEq)]
struct BookingStats {
    total: usize,
    pending: usize,
    active: usize,
    completed: usize,
    /// Sum of completed bookings' amounts.
    revenue: f64,
}

fn booking_stats(bookings: &[Booking]) -> BookingStats {
    let mut stats = BookingStats::default();
    for booking in bookings {
        stats.total += 1;
        match booking.status {
            BookingStatus::Pending => stats.pending += 1,
            BookingStatus::InProgress => stats.active += 1,
            BookingStatus::Completed => {
                stats.completed += 1;
                stats.revenue += booking.total_amount.unwrap_or(0.0);
            }
            BookingStatus::Cancelled => {}
        }
    }
    stats
}

#[component]
pub fn AdminDashboard() -> impl IntoView {
    let bookings = LocalResource::new(|| async {
        crate::net::api::fetch_all_bookings().await.unwrap_or_default()
    });

    view! {
        <div class="admin-dashboard">
            <header class="admin-dashboard__header">
                <h1>"Admin Overview"</h1>
            </header>

            <Suspense fallback=move || view! { <p>"Loading bookings..."</p> }>
                {move || {
                    bookings
                        .get()
                        .map(|list| {
                            let stats = booking_stats(&list);
                            let recent: Vec<Booking> =
                                list.into_iter().take(RECENT_LIMIT).collect();
                            view! {
                                <section class="admin-dashboard__stats">
                                    <StatTile label="Total Bookings" value=stats.total.to_string()/>
                                    <StatTile label="Pending" value=stats.pending.to_string()/>
                                    <StatTile label="In Progress" value=stats.active.to_string()/>
                                    <StatTile label="Completed" value=stats.completed.to_string()/>
                                    <StatTile
                                        label="Revenue"
                                        value=price_label(Some(stats.revenue))
                                    />
                                </section>

                                <section class="admin-dashboard__recent">
                                    <h2>"Recent Bookings"</h2>
                                    <table class="admin-dashboard__table">
                                        <thead>
                                            <tr>
                                                <th>"Ref"</th>
                                                <th>"Status"</th>
                                                <th>"Scheduled"</th>
                                                <th>"Amount"</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {recent
                                                .into_iter()
                                                .map(|booking| {
                                                    let scheduled = short_date(
                                                        booking.scheduled_at.as_deref().unwrap_or_default(),
                                                    );
                                                    view! {
                                                        <tr>
                                                            <td>{booking_reference(&booking.id)}</td>
                                                            <td>
                                                                <span class=status_badge_class(booking.status)>
                                                                    {booking.status.label()}
                                                                </span>
                                                            </td>
                                                            <td>{scheduled}</td>
                                                            <td>{price_label(booking.total_amount)}</td>
                                                        </tr>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </tbody>
                                    </table>
                                </section>
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

/// One stat tile in the overview row.
#[component]
fn StatTile(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="stat-tile">
            <span class="stat-tile__value">{value}</span>
            <span class="stat-tile__label">{label}</span>
        </div>
    }
}

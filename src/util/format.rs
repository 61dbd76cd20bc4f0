//! Display formatting helpers shared by the dashboards.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use crate::net::types::BookingStatus;

/// Short booking reference for list rows: `#` plus the first six characters
/// of the row id, uppercased.
pub fn booking_reference(id: &str) -> String {
    let short: String = id.chars().take(6).collect();
    format!("#{}", short.to_uppercase())
}

/// Date portion of an ISO 8601 timestamp.
pub fn short_date(timestamp: &str) -> String {
    match timestamp.split('T').next() {
        Some(date) if !date.is_empty() => date.to_owned(),
        _ => "Not scheduled".to_owned(),
    }
}

/// Rupee price label with thousands grouping.
#[allow(clippy::cast_possible_truncation)]
pub fn price_label(amount: Option<f64>) -> String {
    let value = amount.unwrap_or(0.0).round() as i64;
    format!("Rs {}", group_thousands(value))
}

/// CSS badge class for a booking status.
pub fn status_badge_class(status: BookingStatus) -> &'static str {
    match status {
        BookingStatus::Pending => "badge badge--pending",
        BookingStatus::InProgress => "badge badge--active",
        BookingStatus::Completed => "badge badge--completed",
        BookingStatus::Cancelled => "badge badge--cancelled",
    }
}

fn group_thousands(value: i64) -> String {
    let digits = value.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if value < 0 { format!("-{grouped}") } else { grouped }
}

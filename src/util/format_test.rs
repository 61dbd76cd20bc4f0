use super::*;

#[test]
fn booking_reference_uses_six_uppercased_chars() {
    assert_eq!(booking_reference("a1b2c3d4-e5f6"), "#A1B2C3");
}

#[test]
fn booking_reference_tolerates_short_ids() {
    assert_eq!(booking_reference("ab"), "#AB");
}

#[test]
fn short_date_strips_time_component() {
    assert_eq!(short_date("2026-03-01T09:00:00Z"), "2026-03-01");
}

#[test]
fn short_date_handles_missing_value() {
    assert_eq!(short_date(""), "Not scheduled");
}

#[test]
fn price_label_groups_thousands() {
    assert_eq!(price_label(Some(4500.0)), "Rs 4,500");
    assert_eq!(price_label(Some(1_250_000.0)), "Rs 1,250,000");
}

#[test]
fn price_label_defaults_missing_amount_to_zero() {
    assert_eq!(price_label(None), "Rs 0");
}

#[test]
fn price_label_rounds_fractions() {
    assert_eq!(price_label(Some(999.6)), "Rs 1,000");
}

#[test]
fn status_badge_class_covers_every_status() {
    assert_eq!(status_badge_class(BookingStatus::Pending), "badge badge--pending");
    assert_eq!(status_badge_class(BookingStatus::InProgress), "badge badge--active");
    assert_eq!(status_badge_class(BookingStatus::Completed), "badge badge--completed");
    assert_eq!(status_badge_class(BookingStatus::Cancelled), "badge badge--cancelled");
}

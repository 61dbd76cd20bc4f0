use super::*;

fn booking(status: BookingStatus, amount: Option<f64>) -> Booking {
    Booking {
        id: "b-1".to_owned(),
        user_id: Some("u-1".to_owned()),
        status,
        total_amount: amount,
        scheduled_at: None,
        address: None,
        contact_number: None,
        created_at: String::new(),
    }
}

#[test]
fn booking_stats_counts_by_status() {
    let bookings = [
        booking(BookingStatus::Pending, Some(1000.0)),
        booking(BookingStatus::Pending, None),
        booking(BookingStatus::InProgress, Some(2000.0)),
        booking(BookingStatus::Completed, Some(4500.0)),
        booking(BookingStatus::Cancelled, Some(9999.0)),
    ];

    let stats = booking_stats(&bookings);
    assert_eq!(stats.total, 5);
    assert_eq!(stats.pending, 2);
    assert_eq!(stats.active, 1);
    assert_eq!(stats.completed, 1);
}

#[test]
fn booking_stats_sums_completed_revenue_only() {
    let bookings = [
        booking(BookingStatus::Completed, Some(4500.0)),
        booking(BookingStatus::Completed, None),
        booking(BookingStatus::Pending, Some(1000.0)),
    ];

    let stats = booking_stats(&bookings);
    assert!((stats.revenue - 4500.0).abs() < f64::EPSILON);
}

#[test]
fn booking_stats_of_empty_list_is_zeroed() {
    assert_eq!(booking_stats(&[]), BookingStats::default());
}

use super::*;

// =============================================================
// UserRole
// =============================================================

#[test]
fn user_role_decodes_lowercase() {
    let role: UserRole = serde_json::from_str("\"admin\"").expect("role");
    assert_eq!(role, UserRole::Admin);
    let role: UserRole = serde_json::from_str("\"staff\"").expect("role");
    assert_eq!(role, UserRole::Staff);
    let role: UserRole = serde_json::from_str("\"customer\"").expect("role");
    assert_eq!(role, UserRole::Customer);
}

#[test]
fn user_role_rejects_unknown_values() {
    assert!(serde_json::from_str::<UserRole>("\"root\"").is_err());
}

// =============================================================
// ProfileRow / User join
// =============================================================

#[test]
fn profile_row_tolerates_null_presentation_fields() {
    let row: ProfileRow = serde_json::from_value(serde_json::json!({
        "id": "u-1",
        "full_name": null,
        "phone": null,
        "role": "customer",
        "created_at": "2026-01-05T10:00:00Z"
    }))
    .expect("profile row");

    assert!(row.full_name.is_none());
    assert!(row.phone.is_none());
}

#[test]
fn user_from_parts_defaults_missing_fields_to_empty() {
    let identity = Identity { id: "u-1".to_owned(), email: "ali@example.com".to_owned() };
    let row = ProfileRow {
        id: "u-1".to_owned(),
        full_name: None,
        phone: None,
        role: UserRole::Customer,
        created_at: String::new(),
    };

    let user = User::from_parts(identity, row);
    assert_eq!(user.full_name, "");
    assert_eq!(user.phone, "");
    assert_eq!(user.email, "ali@example.com");
    assert_eq!(user.role, UserRole::Customer);
}

#[test]
fn user_from_parts_keeps_profile_fields() {
    let identity = Identity { id: "u-2".to_owned(), email: "s@example.com".to_owned() };
    let row = ProfileRow {
        id: "u-2".to_owned(),
        full_name: Some("Sana Khan".to_owned()),
        phone: Some("0300-1234567".to_owned()),
        role: UserRole::Staff,
        created_at: "2026-02-01T00:00:00Z".to_owned(),
    };

    let user = User::from_parts(identity, row);
    assert_eq!(user.full_name, "Sana Khan");
    assert_eq!(user.phone, "0300-1234567");
    assert_eq!(user.role, UserRole::Staff);
    assert_eq!(user.created_at, "2026-02-01T00:00:00Z");
}

// =============================================================
// AuthSession marker round-trip
// =============================================================

#[test]
fn auth_session_round_trips_through_json() {
    let session = AuthSession {
        access_token: "tok".to_owned(),
        refresh_token: "ref".to_owned(),
        expires_at: Some(1_770_000_000),
        user: Identity { id: "u-1".to_owned(), email: "a@b.com".to_owned() },
    };

    let json = serde_json::to_string(&session).expect("encode");
    let back: AuthSession = serde_json::from_str(&json).expect("decode");
    assert_eq!(back, session);
}

#[test]
fn auth_session_decodes_token_grant_shape() {
    let session: AuthSession = serde_json::from_value(serde_json::json!({
        "access_token": "tok",
        "token_type": "bearer",
        "expires_in": 3600,
        "expires_at": 1_770_000_000_i64,
        "refresh_token": "ref",
        "user": { "id": "u-1", "email": "a@b.com", "aud": "authenticated" }
    }))
    .expect("session");

    assert_eq!(session.user.id, "u-1");
    assert_eq!(session.expires_at, Some(1_770_000_000));
}

// =============================================================
// AuthEvent constructors
// =============================================================

#[test]
fn signed_out_event_carries_no_session() {
    let event = AuthEvent::signed_out();
    assert_eq!(event.kind, AuthEventKind::SignedOut);
    assert!(event.session.is_none());
}

#[test]
fn signed_in_event_carries_session() {
    let session = AuthSession {
        access_token: "tok".to_owned(),
        refresh_token: String::new(),
        expires_at: None,
        user: Identity { id: "u-1".to_owned(), email: String::new() },
    };
    let event = AuthEvent::signed_in(session.clone());
    assert_eq!(event.kind, AuthEventKind::SignedIn);
    assert_eq!(event.session, Some(session));
}

// =============================================================
// Table rows
// =============================================================

#[test]
fn booking_status_decodes_snake_case() {
    let status: BookingStatus = serde_json::from_str("\"in_progress\"").expect("status");
    assert_eq!(status, BookingStatus::InProgress);
    assert_eq!(status.label(), "In Progress");
}

#[test]
fn booking_defaults_status_when_column_missing() {
    let booking: Booking = serde_json::from_value(serde_json::json!({
        "id": "b-1",
        "user_id": "u-1",
        "total_amount": 4500.0,
        "scheduled_at": "2026-03-01T09:00:00Z",
        "address": "12 Canal Road, Lahore",
        "contact_number": "0300-1234567"
    }))
    .expect("booking");

    assert_eq!(booking.status, BookingStatus::Pending);
    assert_eq!(booking.created_at, "");
}

#[test]
fn service_without_active_flag_is_listed() {
    let service: Service = serde_json::from_value(serde_json::json!({
        "id": "s-1",
        "category_id": null,
        "name": "AC Repair",
        "description": null,
        "image_url": null,
        "marked_price": 3000.0,
        "discount_price": 2500.0,
        "is_active": null
    }))
    .expect("service");

    assert!(service.is_listed());
}

#[test]
fn job_type_column_maps_to_job_type_field() {
    let job: Job = serde_json::from_value(serde_json::json!({
        "id": "j-1",
        "title": "HVAC Technician",
        "category": "AC Services",
        "location": "Lahore",
        "type": "Full-time",
        "description": "Install and service split units.",
        "status": "open"
    }))
    .expect("job");

    assert_eq!(job.job_type.as_deref(), Some("Full-time"));
    assert_eq!(job.status, JobStatus::Open);
}

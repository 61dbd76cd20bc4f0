use super::*;

#[test]
fn auth_endpoint_targets_auth_service() {
    assert_eq!(
        auth_endpoint("user"),
        format!("{}/auth/v1/user", crate::config::BACKEND_URL)
    );
}

#[test]
fn table_endpoint_without_filters_selects_all() {
    assert_eq!(
        table_endpoint("services", ""),
        format!("{}/rest/v1/services?select=*", crate::config::BACKEND_URL)
    );
}

#[test]
fn table_endpoint_appends_filters() {
    let url = table_endpoint("bookings", "order=created_at.desc");
    assert!(url.ends_with("/rest/v1/bookings?select=*&order=created_at.desc"));
}

#[test]
fn profile_filter_limits_to_one_row() {
    assert_eq!(profile_filter("u-1"), "id=eq.u-1&limit=1");
}

#[test]
fn my_bookings_filter_orders_newest_first() {
    assert_eq!(my_bookings_filter("u-7"), "user_id=eq.u-7&order=created_at.desc");
}

#[test]
fn bearer_prefixes_token() {
    assert_eq!(bearer("tok-123"), "Bearer tok-123");
}

#[test]
fn failure_messages_include_status() {
    assert_eq!(sign_in_failed_message(400), "sign-in failed: 400");
    assert_eq!(sign_up_failed_message(422), "sign-up failed: 422");
    assert_eq!(sign_out_failed_message(500), "sign-out failed: 500");
    assert_eq!(
        insert_failed_message("contact_messages", 403),
        "contact_messages insert failed: 403"
    );
}

#[test]
fn identity_from_signup_accepts_bare_user_object() {
    let body = serde_json::json!({ "id": "u-1", "email": "a@b.com", "aud": "authenticated" });
    let identity = identity_from_signup(&body).expect("identity");
    assert_eq!(identity.id, "u-1");
    assert_eq!(identity.email, "a@b.com");
}

#[test]
fn identity_from_signup_accepts_wrapped_session() {
    let body = serde_json::json!({
        "access_token": "tok",
        "user": { "id": "u-2", "email": "c@d.com" }
    });
    let identity = identity_from_signup(&body).expect("identity");
    assert_eq!(identity.id, "u-2");
}

#[test]
fn identity_from_signup_rejects_userless_body() {
    let body = serde_json::json!({ "msg": "confirmation sent" });
    assert!(identity_from_signup(&body).is_none());
}

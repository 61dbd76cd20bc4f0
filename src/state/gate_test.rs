use super::*;
use crate::net::types::{Identity, ProfileRow, UserRole};

fn user_with_role(role: UserRole) -> User {
    User::from_parts(
        Identity { id: "u-1".to_owned(), email: "u@example.com".to_owned() },
        ProfileRow {
            id: "u-1".to_owned(),
            full_name: Some("Test User".to_owned()),
            phone: None,
            role,
            created_at: String::new(),
        },
    )
}

fn loaded(user: Option<User>) -> AuthState {
    AuthState { user, loading: false }
}

// =============================================================
// role_home mapping
// =============================================================

#[test]
fn role_home_maps_every_role() {
    assert_eq!(role_home(UserRole::Admin), "/admin");
    assert_eq!(role_home(UserRole::Staff), "/staff");
    assert_eq!(role_home(UserRole::Customer), "/dashboard");
}

// =============================================================
// evaluate: decision table
// =============================================================

#[test]
fn loading_state_is_pending_even_with_no_user() {
    // Never flash the login screen during the initial reconciliation window.
    let auth = AuthState { user: None, loading: true };
    let decision = evaluate(&[UserRole::Admin], &auth, "/admin");
    assert_eq!(decision, GateDecision::Pending);
}

#[test]
fn anonymous_visitor_is_sent_to_login_with_origin() {
    let decision = evaluate(&[UserRole::Admin], &loaded(None), "/admin");
    assert_eq!(decision, GateDecision::LoginRedirect { from: "/admin".to_owned() });
}

#[test]
fn wrong_role_is_sent_to_own_home_not_rendered() {
    let auth = loaded(Some(user_with_role(UserRole::Staff)));
    let decision = evaluate(&[UserRole::Admin], &auth, "/admin");
    assert_eq!(decision, GateDecision::HomeRedirect { to: "/staff" });
}

#[test]
fn customer_on_admin_route_goes_to_customer_dashboard() {
    let auth = loaded(Some(user_with_role(UserRole::Customer)));
    let decision = evaluate(&[UserRole::Admin], &auth, "/admin");
    assert_eq!(decision, GateDecision::HomeRedirect { to: "/dashboard" });
}

#[test]
fn matching_role_is_granted() {
    let auth = loaded(Some(user_with_role(UserRole::Admin)));
    let decision = evaluate(&[UserRole::Admin], &auth, "/admin");
    assert_eq!(decision, GateDecision::Grant);
}

#[test]
fn empty_required_set_admits_any_authenticated_role() {
    for role in [UserRole::Admin, UserRole::Staff, UserRole::Customer] {
        let auth = loaded(Some(user_with_role(role)));
        assert_eq!(evaluate(&[], &auth, "/account"), GateDecision::Grant);
    }
}

#[test]
fn evaluation_restarts_when_auth_state_changes() {
    // The same navigation flips from Grant to LoginRedirect once the user
    // is cleared; terminal only per attempt, not per session.
    let auth = loaded(Some(user_with_role(UserRole::Customer)));
    assert_eq!(evaluate(&[UserRole::Customer], &auth, "/dashboard"), GateDecision::Grant);

    let auth = loaded(None);
    assert_eq!(
        evaluate(&[UserRole::Customer], &auth, "/dashboard"),
        GateDecision::LoginRedirect { from: "/dashboard".to_owned() }
    );
}

// =============================================================
// Redirect paths
// =============================================================

#[test]
fn login_redirect_path_carries_origin() {
    assert_eq!(login_redirect_path("/admin"), "/login?redirect=/admin");
}

#[test]
fn login_redirect_path_drops_trivial_origins() {
    assert_eq!(login_redirect_path(""), "/login");
    assert_eq!(login_redirect_path("/login"), "/login");
}

#[test]
fn post_login_destination_prefers_rooted_redirect() {
    assert_eq!(
        post_login_destination(Some("/dashboard"), UserRole::Customer),
        "/dashboard"
    );
}

#[test]
fn post_login_destination_rejects_external_targets() {
    assert_eq!(
        post_login_destination(Some("//evil.example"), UserRole::Customer),
        "/dashboard"
    );
    assert_eq!(
        post_login_destination(Some("https://evil.example"), UserRole::Admin),
        "/admin"
    );
}

#[test]
fn post_login_destination_defaults_to_role_home() {
    assert_eq!(post_login_destination(None, UserRole::Staff), "/staff");
}

// =============================================================
// Navbar shortcut
// =============================================================

#[test]
fn dashboard_path_follows_role() {
    let admin = user_with_role(UserRole::Admin);
    assert_eq!(dashboard_path(Some(&admin)), "/admin");
    assert_eq!(dashboard_path(None), "/login");
}

//! REST helpers for the hosted backend: auth grants, the live identity
//! check, and table reads/writes.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, plus the persisted
//! session marker in `localStorage`.
//! Server-side (SSR): stubs returning `None`/error since the backend is only
//! reachable with a browser-held credential.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so auth/profile
//! fetch failures degrade UI behavior without crashing hydration. A missing
//! or invalid credential is the *expected* shape of "not logged in", never an
//! error dialog.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{AuthSession, Booking, Identity, Job, ProfileRow, Service, ServiceCategory};

/// localStorage key marking local session presence.
///
/// Shared across browsing contexts of the same origin: any tab may clear it,
/// and sibling tabs treat a change to it as "possibly signed out elsewhere"
/// and re-validate against the backend.
pub const SESSION_STORAGE_KEY: &str = "homeprotect_auth_session";

#[cfg(any(test, feature = "hydrate"))]
fn auth_endpoint(path: &str) -> String {
    format!("{}/auth/v1/{path}", crate::config::BACKEND_URL)
}

#[cfg(any(test, feature = "hydrate"))]
fn table_endpoint(table: &str, filters: &str) -> String {
    if filters.is_empty() {
        format!("{}/rest/v1/{table}?select=*", crate::config::BACKEND_URL)
    } else {
        format!("{}/rest/v1/{table}?select=*&{filters}", crate::config::BACKEND_URL)
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn insert_endpoint(table: &str) -> String {
    format!("{}/rest/v1/{table}", crate::config::BACKEND_URL)
}

#[cfg(any(test, feature = "hydrate"))]
fn profile_filter(user_id: &str) -> String {
    format!("id=eq.{user_id}&limit=1")
}

#[cfg(any(test, feature = "hydrate"))]
fn my_bookings_filter(user_id: &str) -> String {
    format!("user_id=eq.{user_id}&order=created_at.desc")
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, feature = "hydrate"))]
fn sign_in_failed_message(status: u16) -> String {
    format!("sign-in failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn sign_up_failed_message(status: u16) -> String {
    format!("sign-up failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn sign_out_failed_message(status: u16) -> String {
    format!("sign-out failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn insert_failed_message(table: &str, status: u16) -> String {
    format!("{table} insert failed: {status}")
}

/// Extract the created identity from a signup response. The backend returns
/// either the bare user object or a full session wrapping one, depending on
/// whether email confirmation is required.
#[cfg(any(test, feature = "hydrate"))]
fn identity_from_signup(value: &serde_json::Value) -> Option<Identity> {
    let user = value.get("user").unwrap_or(value);
    serde_json::from_value(user.clone()).ok()
}

// =============================================================
// Session marker
// =============================================================

/// Read the persisted session marker, if any.
///
/// The marker is never authoritative for identity; it only supplies the
/// credential for the live identity check.
pub fn read_stored_session() -> Option<AuthSession> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window()?.local_storage().ok()??;
        let raw = storage.get_item(SESSION_STORAGE_KEY).ok()??;
        serde_json::from_str(&raw).ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist the session marker after a successful grant.
pub fn store_session(session: &AuthSession) {
    #[cfg(feature = "hydrate")]
    {
        if let Ok(raw) = serde_json::to_string(session) {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(storage)) = window.local_storage() {
                    let _ = storage.set_item(SESSION_STORAGE_KEY, &raw);
                }
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
    }
}

/// Delete the session marker. Used on sign-out and whenever a stored
/// credential fails live validation (poisoned marker).
pub fn clear_stored_session() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.remove_item(SESSION_STORAGE_KEY);
            }
        }
    }
}

// =============================================================
// Auth operations
// =============================================================

/// Exchange email + password for a session. Persists the session marker on
/// success.
///
/// # Errors
///
/// Returns an error string if the request fails or the backend rejects the
/// credentials.
pub async fn sign_in(email: &str, password: &str) -> Result<AuthSession, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post(&auth_endpoint("token?grant_type=password"))
            .header("apikey", crate::config::BACKEND_PUBLISHABLE_KEY)
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(sign_in_failed_message(resp.status()));
        }
        let session: AuthSession = resp.json().await.map_err(|e| e.to_string())?;
        store_session(&session);
        Ok(session)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// Create an account. Does not sign the user in; the signup page sends them
/// to login afterwards.
///
/// # Errors
///
/// Returns an error string if the request fails or the backend rejects the
/// signup.
pub async fn sign_up(email: &str, password: &str, full_name: &str) -> Result<Identity, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({
            "email": email,
            "password": password,
            "data": { "full_name": full_name }
        });
        let resp = gloo_net::http::Request::post(&auth_endpoint("signup"))
            .header("apikey", crate::config::BACKEND_PUBLISHABLE_KEY)
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(sign_up_failed_message(resp.status()));
        }
        let body: serde_json::Value = resp.json().await.map_err(|e| e.to_string())?;
        identity_from_signup(&body).ok_or_else(|| "signup returned no user".to_owned())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password, full_name);
        Err("not available on server".to_owned())
    }
}

/// Live validation of whatever credential the client currently holds.
/// Returns `None` when no marker is stored, the request fails, or the
/// backend rejects the token.
pub async fn fetch_identity() -> Option<Identity> {
    #[cfg(feature = "hydrate")]
    {
        let session = read_stored_session()?;
        let resp = gloo_net::http::Request::get(&auth_endpoint("user"))
            .header("apikey", crate::config::BACKEND_PUBLISHABLE_KEY)
            .header("Authorization", &bearer(&session.access_token))
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Identity>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Revoke the session on the backend. The local marker is cleared first in
/// all cases: losing access locally must not depend on the remote call.
///
/// # Errors
///
/// Returns an error string when the revocation request fails; the caller
/// logs it and proceeds with the local sign-out regardless.
pub async fn sign_out() -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let stored = read_stored_session();
        clear_stored_session();
        let Some(session) = stored else {
            return Ok(());
        };
        let resp = gloo_net::http::Request::post(&auth_endpoint("logout"))
            .header("apikey", crate::config::BACKEND_PUBLISHABLE_KEY)
            .header("Authorization", &bearer(&session.access_token))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(sign_out_failed_message(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Ok(())
    }
}

// =============================================================
// Table reads
// =============================================================

#[cfg(feature = "hydrate")]
async fn get_rows<T: serde::de::DeserializeOwned>(url: &str) -> Option<Vec<T>> {
    let mut req = gloo_net::http::Request::get(url)
        .header("apikey", crate::config::BACKEND_PUBLISHABLE_KEY);
    if let Some(session) = read_stored_session() {
        req = req.header("Authorization", &bearer(&session.access_token));
    }
    let resp = req.send().await.ok()?;
    if !resp.ok() {
        return None;
    }
    resp.json::<Vec<T>>().await.ok()
}

/// Fetch the profile row matching an identity id. `None` covers both request
/// failure and a missing row; callers treat either as unauthenticated.
pub async fn fetch_profile(user_id: &str) -> Option<ProfileRow> {
    #[cfg(feature = "hydrate")]
    {
        let url = table_endpoint("profiles", &profile_filter(user_id));
        let rows: Vec<ProfileRow> = get_rows(&url).await?;
        rows.into_iter().next()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user_id;
        None
    }
}

/// Fetch all service categories for the home page grid.
pub async fn fetch_service_categories() -> Option<Vec<ServiceCategory>> {
    #[cfg(feature = "hydrate")]
    {
        get_rows(&table_endpoint("service_categories", "order=name.asc")).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Fetch the full services catalogue. Listing filters happen client-side.
pub async fn fetch_services() -> Option<Vec<Service>> {
    #[cfg(feature = "hydrate")]
    {
        get_rows(&table_endpoint("services", "order=name.asc")).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Fetch the signed-in customer's bookings, newest first.
pub async fn fetch_my_bookings(user_id: &str) -> Option<Vec<Booking>> {
    #[cfg(feature = "hydrate")]
    {
        get_rows(&table_endpoint("bookings", &my_bookings_filter(user_id))).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user_id;
        None
    }
}

/// Fetch every booking, newest first. Row-level security on the backend
/// restricts this to admin/staff credentials.
pub async fn fetch_all_bookings() -> Option<Vec<Booking>> {
    #[cfg(feature = "hydrate")]
    {
        get_rows(&table_endpoint("bookings", "order=created_at.desc")).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Fetch open job postings for the careers page.
pub async fn fetch_open_jobs() -> Option<Vec<Job>> {
    #[cfg(feature = "hydrate")]
    {
        get_rows(&table_endpoint("jobs", "status=eq.open&order=created_at.desc")).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

// =============================================================
// Table writes
// =============================================================

#[cfg(feature = "hydrate")]
async fn insert_row(table: &str, payload: &serde_json::Value) -> Result<(), String> {
    let mut req = gloo_net::http::Request::post(&insert_endpoint(table))
        .header("apikey", crate::config::BACKEND_PUBLISHABLE_KEY)
        .header("Prefer", "return=minimal");
    if let Some(session) = read_stored_session() {
        req = req.header("Authorization", &bearer(&session.access_token));
    }
    let resp = req
        .json(payload)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(insert_failed_message(table, resp.status()));
    }
    Ok(())
}

/// Ensure a profile row exists for a freshly created account. The backend
/// normally creates it via trigger; this covers projects without one.
///
/// # Errors
///
/// Returns an error string if the insert request fails.
pub async fn create_profile(id: &str, full_name: &str, phone: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({
            "id": id,
            "full_name": full_name,
            "phone": phone,
            "role": "customer"
        });
        insert_row("profiles", &payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, full_name, phone);
        Err("not available on server".to_owned())
    }
}

/// Submit a contact-page message.
///
/// # Errors
///
/// Returns an error string if the insert request fails.
pub async fn submit_contact_message(
    name: &str,
    email: &str,
    phone: &str,
    category: &str,
    message: &str,
) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({
            "name": name,
            "email": email,
            "phone": phone,
            "category": category,
            "message": message,
            "status": "unread"
        });
        insert_row("contact_messages", &payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (name, email, phone, category, message);
        Err("not available on server".to_owned())
    }
}

//! Wire DTOs for the hosted-backend REST boundary.
//!
//! DESIGN
//! ======
//! These types mirror the backend's auth payloads and table rows so serde can
//! decode responses directly and unknown columns are ignored. Nullable columns
//! are `Option` here; defaulting to presentation-friendly values happens at
//! the join points (`User::from_parts`) or in the views, never during decode.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Application role stored on the profile row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Staff,
    Customer,
}

/// The backend's proof of a currently valid credential.
///
/// Returned by the live identity check; carries no application-level data
/// beyond the join key and the account email.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Stable account identifier (UUID string).
    pub id: String,
    /// Account email address.
    #[serde(default)]
    pub email: String,
}

/// Token-grant payload persisted as the local session marker.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: String,
    /// Unix timestamp of token expiry, when the backend reports one.
    pub expires_at: Option<i64>,
    /// Identity the tokens were issued for.
    pub user: Identity,
}

/// Kind of a backend auth-stream notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthEventKind {
    SignedIn,
    SignedOut,
    TokenRefreshed,
    UserUpdated,
}

/// One notification on the auth-event stream, optionally carrying the live
/// session it concerns.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthEvent {
    pub kind: AuthEventKind,
    pub session: Option<AuthSession>,
}

impl AuthEvent {
    pub fn signed_in(session: AuthSession) -> Self {
        Self { kind: AuthEventKind::SignedIn, session: Some(session) }
    }

    pub fn signed_out() -> Self {
        Self { kind: AuthEventKind::SignedOut, session: None }
    }

    pub fn token_refreshed(session: AuthSession) -> Self {
        Self { kind: AuthEventKind::TokenRefreshed, session: Some(session) }
    }

    pub fn user_updated(session: Option<AuthSession>) -> Self {
        Self { kind: AuthEventKind::UserUpdated, session }
    }
}

/// A `profiles` table row keyed by the identity id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRow {
    /// Matches [`Identity::id`]; equality is the session/profile join key.
    pub id: String,
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub role: UserRole,
    #[serde(default)]
    pub created_at: String,
}

/// The signed-in user as the rest of the application sees it: a live
/// identity joined with its profile row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub full_name: String,
    pub phone: String,
    pub role: UserRole,
    pub created_at: String,
}

impl User {
    /// Join an identity with its profile row, defaulting the optional
    /// presentation fields to empty strings.
    pub fn from_parts(identity: Identity, row: ProfileRow) -> Self {
        Self {
            id: row.id,
            email: identity.email,
            full_name: row.full_name.unwrap_or_default(),
            phone: row.phone.unwrap_or_default(),
            role: row.role,
            created_at: row.created_at,
        }
    }
}

/// A `service_categories` row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceCategory {
    pub id: String,
    pub name: String,
    pub icon: Option<String>,
    pub description: Option<String>,
}

/// A `services` row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub category_id: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub marked_price: Option<f64>,
    pub discount_price: Option<f64>,
    pub is_active: Option<bool>,
}

impl Service {
    /// Whether the service should appear in public listings. Rows created
    /// before the `is_active` column existed count as listed.
    pub fn is_listed(&self) -> bool {
        self.is_active.unwrap_or(true)
    }
}

/// Lifecycle of a booking row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

impl BookingStatus {
    /// Short label for status badges.
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }
}

/// A `bookings` row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    pub user_id: Option<String>,
    #[serde(default)]
    pub status: BookingStatus,
    pub total_amount: Option<f64>,
    pub scheduled_at: Option<String>,
    pub address: Option<String>,
    pub contact_number: Option<String>,
    #[serde(default)]
    pub created_at: String,
}

/// Publication state of a job posting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Open,
    Closed,
}

/// A `jobs` row for the careers page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub title: String,
    pub category: Option<String>,
    pub location: Option<String>,
    #[serde(rename = "type")]
    pub job_type: Option<String>,
    pub description: Option<String>,
    pub status: JobStatus,
    #[serde(default)]
    pub created_at: String,
}

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// Status every registration starts in. No route moves it elsewhere.
pub const DEFAULT_STATUS: &str = "pending";

#[derive(Debug, Clone, FromRow, Serialize, PartialEq, Eq)]
pub struct Registration {
    pub id: i64,
    pub user_id: i64,
    pub event_id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub preferred_date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewRegistration {
    /// Always the verified caller, never a body field.
    pub user_id: i64,
    pub event_id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub preferred_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

/// Row of `GET /api/registrations/my`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserRegistration {
    pub id: i64,
    pub event_title: String,
    pub event_category: String,
    pub event_date: NaiveDate,
    pub preferred_date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub status: String,
}

/// Row of the public `GET /api/registrations` listing; contact details are
/// the ones typed into the registration form.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RegistrationOverview {
    pub registration_id: i64,
    pub user_name: String,
    pub user_email: String,
    pub user_phone: Option<String>,
    pub event_title: String,
    pub event_date: NaiveDate,
    pub preferred_date: Option<NaiveDate>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Row of `GET /api/admin/registrations`; names come from the owning account.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AdminRegistration {
    pub id: i64,
    pub user_name: String,
    pub user_email: String,
    pub event_title: String,
    pub preferred_date: Option<NaiveDate>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

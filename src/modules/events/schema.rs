use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use super::model::EventInput;
use crate::error::AppError;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

// =============================================================================
// CREATE / UPDATE
// =============================================================================

/// Body of `POST /api/events` and `PUT /api/events/{id}`.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct EventRequest {
    #[validate(
        required(message = "Required fields missing"),
        length(min = 1, message = "Required fields missing")
    )]
    pub title: Option<String>,
    #[validate(
        required(message = "Required fields missing"),
        length(min = 1, message = "Required fields missing")
    )]
    pub category: Option<String>,
    #[validate(
        required(message = "Required fields missing"),
        length(min = 1, message = "Required fields missing")
    )]
    pub date: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
}

impl EventRequest {
    pub fn into_input(self) -> Result<EventInput, AppError> {
        self.validate()?;

        let raw_date = self.date.unwrap_or_default();
        let date = parse_date(&raw_date)
            .ok_or_else(|| AppError::validation(format!("Invalid date {raw_date:?}, expected YYYY-MM-DD")))?;

        Ok(EventInput {
            title: self.title.unwrap_or_default(),
            category: self.category.unwrap_or_default(),
            date,
            description: self.description,
            image: self.image,
        })
    }
}

/// Accepts a bare date or the date prefix of an ISO timestamp.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    let date_part = raw.get(..10).unwrap_or(raw);
    NaiveDate::parse_from_str(date_part, DATE_FORMAT).ok()
}

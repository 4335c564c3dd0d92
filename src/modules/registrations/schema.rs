use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

use super::model::NewRegistration;
use crate::error::AppError;
use crate::modules::events::schema::parse_date;
use crate::services::jwt::Identity;

// =============================================================================
// CREATE
// =============================================================================

/// Body of `POST /api/registrations`. A `user_id` field, if sent, is ignored.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct RegistrationRequest {
    #[serde(deserialize_with = "flexible_id")]
    #[validate(required(message = "Required fields missing."))]
    pub event_id: Option<i64>,
    #[validate(
        required(message = "Required fields missing."),
        length(min = 1, message = "Required fields missing.")
    )]
    pub name: Option<String>,
    #[validate(
        required(message = "Required fields missing."),
        length(min = 1, message = "Required fields missing.")
    )]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub preferred_date: Option<String>,
    pub notes: Option<String>,
}

impl RegistrationRequest {
    /// Binds the request to the verified caller.
    pub fn into_new(self, owner: &Identity) -> Result<NewRegistration, AppError> {
        self.validate()?;

        let preferred_date = match self.preferred_date.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(parse_date(raw).ok_or_else(|| {
                AppError::validation(format!("Invalid preferred_date {raw:?}, expected YYYY-MM-DD"))
            })?),
        };

        Ok(NewRegistration {
            user_id: owner.id,
            event_id: self.event_id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            phone: self.phone,
            preferred_date,
            notes: self.notes,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct RegistrationCreatedResponse {
    pub message: &'static str,
    pub id: i64,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IdRepr {
    Number(i64),
    Text(String),
}

/// HTML forms post ids as strings; accept `3` and `"3"` alike.
fn flexible_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<IdRepr>::deserialize(deserializer)? {
        None => Ok(None),
        Some(IdRepr::Number(id)) => Ok(Some(id)),
        Some(IdRepr::Text(text)) if text.trim().is_empty() => Ok(None),
        Some(IdRepr::Text(text)) => text
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("invalid event_id {text:?}"))),
    }
}

use serde::Deserialize;
use validator::Validate;

use super::model::NewContactMessage;
use crate::error::AppError;

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct ContactRequest {
    #[validate(
        required(message = "All fields required."),
        length(min = 1, message = "All fields required.")
    )]
    pub name: Option<String>,
    #[validate(
        required(message = "All fields required."),
        length(min = 1, message = "All fields required.")
    )]
    pub email: Option<String>,
    #[validate(
        required(message = "All fields required."),
        length(min = 1, message = "All fields required.")
    )]
    pub message: Option<String>,
}

impl ContactRequest {
    pub fn into_new(self) -> Result<NewContactMessage, AppError> {
        self.validate()?;
        Ok(NewContactMessage {
            name: self.name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            message: self.message.unwrap_or_default(),
        })
    }
}

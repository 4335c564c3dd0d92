use serde::{Deserialize, Serialize};
use validator::Validate;

use super::model::{Role, User};

// =============================================================================
// SIGNUP
// =============================================================================

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct SignupRequest {
    #[validate(
        required(message = "All fields are required."),
        length(min = 1, message = "All fields are required.")
    )]
    pub name: Option<String>,
    #[validate(
        required(message = "All fields are required."),
        email(message = "Invalid email format")
    )]
    pub email: Option<String>,
    #[validate(
        required(message = "All fields are required."),
        length(min = 1, message = "All fields are required.")
    )]
    pub password: Option<String>,
}

// =============================================================================
// LOGIN
// =============================================================================

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct LoginRequest {
    #[validate(
        required(message = "Email and password required."),
        length(min = 1, message = "Email and password required.")
    )]
    pub email: Option<String>,
    #[validate(
        required(message = "Email and password required."),
        length(min = 1, message = "Email and password required.")
    )]
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: &'static str,
    pub token: String,
    pub user: UserResponse,
}

/// Public account fields. Never carries the password hash.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
        }
    }
}

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;
use validator::Validate;

use crate::error::{internal, AppError, MessageResponse};
use crate::extract::AppJson;
use crate::modules::auth::{
    model::{NewUser, Role},
    schema::{LoginRequest, LoginResponse, SignupRequest},
};
use crate::services::hashing;
use crate::store::StoreError;
use crate::AppState;

const EMAIL_TAKEN: &str = "Email already registered.";

pub async fn signup(
    State(state): State<Arc<AppState>>,
    AppJson(req): AppJson<SignupRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    req.validate()?;
    let (name, email, password) = (
        req.name.unwrap_or_default(),
        req.email.unwrap_or_default(),
        req.password.unwrap_or_default(),
    );

    let outcome = &state.metrics.signups_total;

    if state
        .store
        .users
        .email_exists(&email)
        .await
        .map_err(internal("Server error"))?
    {
        outcome.with_label_values(&["conflict"]).inc();
        return Err(AppError::Conflict(EMAIL_TAKEN.into()));
    }

    let password_hash = tokio::task::spawn_blocking(move || hashing::hash_password(&password))
        .await
        .map_err(internal("Server error"))?
        .map_err(internal("Server error"))?;

    let user = NewUser {
        name,
        email,
        password_hash,
        role: Role::User,
    };

    // A concurrent signup can still win the race past the check above.
    let id = match state.store.users.create(&user).await {
        Ok(id) => id,
        Err(StoreError::Duplicate) => {
            outcome.with_label_values(&["conflict"]).inc();
            return Err(AppError::Conflict(EMAIL_TAKEN.into()));
        }
        Err(e) => return Err(internal("Server error")(e)),
    };

    outcome.with_label_values(&["created"]).inc();
    tracing::info!(user_id = id, email = %user.email, "user signed up");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Signup successful!")),
    ))
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    AppJson(req): AppJson<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    req.validate()?;
    let (email, password) = (req.email.unwrap_or_default(), req.password.unwrap_or_default());

    let outcome = &state.metrics.logins_total;

    let Some(user) = state
        .store
        .users
        .find_by_email(&email)
        .await
        .map_err(internal("Server error"))?
    else {
        outcome.with_label_values(&["unknown_email"]).inc();
        tracing::warn!(email = %email, "login for unknown email");
        return Err(AppError::not_found("User not found."));
    };

    let stored_hash = user.password.clone();
    let valid = tokio::task::spawn_blocking(move || hashing::verify_password(&password, &stored_hash))
        .await
        .map_err(internal("Server error"))?
        .map_err(internal("Server error"))?;

    if !valid {
        outcome.with_label_values(&["bad_password"]).inc();
        tracing::warn!(user_id = user.id, "login with invalid password");
        return Err(AppError::Unauthorized("Invalid password.".into()));
    }

    let token = state
        .jwt_service
        .issue(user.id, &user.email, user.role)
        .map_err(internal("Server error"))?;

    outcome.with_label_values(&["success"]).inc();
    tracing::info!(user_id = user.id, role = %user.role, "user logged in");

    Ok(Json(LoginResponse {
        message: "Login successful",
        token,
        user: user.into(),
    }))
}

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use std::sync::Arc;

use super::model::{RegistrationOverview, UserRegistration};
use super::schema::{RegistrationCreatedResponse, RegistrationRequest};
use crate::error::{internal, AppError, MessageResponse};
use crate::extract::{parse_id, AppJson};
use crate::services::jwt::Identity;
use crate::store::StoreError;
use crate::AppState;

pub const REGISTRATION_NOT_FOUND: &str = "Registration not found.";

// =============================================================================
// POST /api/registrations (authenticated)
// =============================================================================

pub async fn create_registration(
    State(state): State<Arc<AppState>>,
    Extension(identity): Extension<Identity>,
    AppJson(req): AppJson<RegistrationRequest>,
) -> Result<(StatusCode, Json<RegistrationCreatedResponse>), AppError> {
    let registration = req.into_new(&identity)?;

    let id = match state.store.registrations.create(&registration).await {
        Ok(id) => id,
        Err(StoreError::MissingReference) => return Err(AppError::not_found("Event not found")),
        Err(e) => return Err(internal("Error saving registration.")(e)),
    };

    state.metrics.registrations_created_total.inc();
    tracing::info!(
        registration_id = id,
        user_id = identity.id,
        event_id = registration.event_id,
        "registration created"
    );

    Ok((
        StatusCode::CREATED,
        Json(RegistrationCreatedResponse {
            message: "Registration successful!",
            id,
        }),
    ))
}

// =============================================================================
// GET /api/registrations/my (authenticated)
// =============================================================================

pub async fn list_my_registrations(
    State(state): State<Arc<AppState>>,
    Extension(identity): Extension<Identity>,
) -> Result<Json<Vec<UserRegistration>>, AppError> {
    tracing::debug!(user_id = identity.id, "fetching registrations for user");

    let rows = state
        .store
        .registrations
        .list_for_user(identity.id)
        .await
        .map_err(internal("Error fetching registrations."))?;

    Ok(Json(rows))
}

// =============================================================================
// GET /api/registrations
// =============================================================================

pub async fn list_registrations(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<RegistrationOverview>>, AppError> {
    let rows = state
        .store
        .registrations
        .list_overview()
        .await
        .map_err(internal("Error fetching registrations."))?;

    Ok(Json(rows))
}

// =============================================================================
// DELETE /api/registrations/{id}
// =============================================================================

pub async fn delete_registration(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = parse_id(&raw_id, REGISTRATION_NOT_FOUND)?;
    remove(&state, id).await?;
    Ok(Json(MessageResponse::new("Registration deleted successfully.")))
}

/// Shared by the public and admin delete routes.
pub async fn remove(state: &AppState, id: i64) -> Result<(), AppError> {
    let deleted = state
        .store
        .registrations
        .delete(id)
        .await
        .map_err(internal("Error deleting registration."))?;

    if !deleted {
        return Err(AppError::not_found(REGISTRATION_NOT_FOUND));
    }

    tracing::info!(registration_id = id, "registration deleted");
    Ok(())
}

// =============================================================================
// POST /api/registrations/fix-cascade (admin)
// =============================================================================

pub async fn enable_event_cascade(
    State(state): State<Arc<AppState>>,
    Extension(identity): Extension<Identity>,
) -> Result<Json<MessageResponse>, AppError> {
    state
        .store
        .registrations
        .enable_event_cascade()
        .await
        .map_err(internal("Error updating foreign key constraint."))?;

    tracing::info!(admin_id = identity.id, "registrations.event_id now cascades on delete");
    Ok(Json(MessageResponse::new(
        "Foreign key updated with ON DELETE CASCADE.",
    )))
}

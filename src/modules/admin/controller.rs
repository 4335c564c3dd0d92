use axum::{
    extract::{Path, State},
    Extension, Json,
};
use std::sync::Arc;

use crate::error::{internal, AppError, MessageResponse};
use crate::extract::parse_id;
use crate::modules::contact::{self, model::ContactMessage};
use crate::modules::registrations::{self, model::AdminRegistration};
use crate::services::jwt::Identity;
use crate::AppState;

// =============================================================================
// REGISTRATIONS
// =============================================================================

pub async fn list_registrations(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<AdminRegistration>>, AppError> {
    let rows = state
        .store
        .registrations
        .list_for_admin()
        .await
        .map_err(internal("Server error"))?;

    Ok(Json(rows))
}

pub async fn delete_registration(
    State(state): State<Arc<AppState>>,
    Extension(admin): Extension<Identity>,
    Path(raw_id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = parse_id(&raw_id, registrations::controller::REGISTRATION_NOT_FOUND)?;
    registrations::controller::remove(&state, id).await?;
    tracing::info!(admin_id = admin.id, registration_id = id, "registration removed by admin");
    Ok(Json(MessageResponse::new("Registration deleted successfully")))
}

// =============================================================================
// CONTACT MESSAGES
// =============================================================================

pub async fn list_messages(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ContactMessage>>, AppError> {
    let rows = state
        .store
        .contacts
        .list()
        .await
        .map_err(internal("Server error"))?;

    Ok(Json(rows))
}

pub async fn delete_message(
    State(state): State<Arc<AppState>>,
    Extension(admin): Extension<Identity>,
    Path(raw_id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = parse_id(&raw_id, contact::controller::MESSAGE_NOT_FOUND)?;
    contact::controller::remove(&state, id).await?;
    tracing::info!(admin_id = admin.id, contact_id = id, "contact message removed by admin");
    Ok(Json(MessageResponse::new("Message deleted successfully")))
}

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use super::model::ContactMessage;
use super::schema::ContactRequest;
use crate::error::{internal, AppError, MessageResponse};
use crate::extract::{parse_id, AppJson};
use crate::AppState;

pub const MESSAGE_NOT_FOUND: &str = "Message not found";

pub async fn submit_message(
    State(state): State<Arc<AppState>>,
    AppJson(req): AppJson<ContactRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    let message = req.into_new()?;

    let id = state
        .store
        .contacts
        .create(&message)
        .await
        .map_err(internal("Error saving message"))?;

    tracing::info!(contact_id = id, "contact message received");
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Message sent successfully!")),
    ))
}

pub async fn list_messages(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ContactMessage>>, AppError> {
    let messages = state
        .store
        .contacts
        .list()
        .await
        .map_err(internal("Error fetching messages"))?;

    Ok(Json(messages))
}

pub async fn delete_message(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = parse_id(&raw_id, MESSAGE_NOT_FOUND)?;
    remove(&state, id).await?;
    Ok(Json(MessageResponse::new("Message deleted successfully!")))
}

/// Shared by the public and admin delete routes.
pub async fn remove(state: &AppState, id: i64) -> Result<(), AppError> {
    let deleted = state
        .store
        .contacts
        .delete(id)
        .await
        .map_err(internal("Error deleting message"))?;

    if !deleted {
        return Err(AppError::not_found(MESSAGE_NOT_FOUND));
    }

    tracing::info!(contact_id = id, "contact message deleted");
    Ok(())
}

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use super::model::Event;
use super::schema::EventRequest;
use crate::error::{internal, AppError, MessageResponse};
use crate::extract::{parse_id, AppJson};
use crate::modules::registrations::model::Registration;
use crate::AppState;

const EVENT_NOT_FOUND: &str = "Event not found";

// =============================================================================
// GET /api/events
// =============================================================================

pub async fn list_events(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Event>>, AppError> {
    let events = state
        .store
        .events
        .list()
        .await
        .map_err(internal("Error fetching events"))?;

    tracing::debug!(count = events.len(), "events fetched");
    Ok(Json(events))
}

// =============================================================================
// GET /api/events/{id}
// =============================================================================

pub async fn get_event(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
) -> Result<Json<Event>, AppError> {
    let id = parse_id(&raw_id, EVENT_NOT_FOUND)?;

    state
        .store
        .events
        .find_by_id(id)
        .await
        .map_err(internal("Error fetching event"))?
        .map(Json)
        .ok_or_else(|| AppError::not_found(EVENT_NOT_FOUND))
}

// =============================================================================
// POST /api/events
// =============================================================================

pub async fn create_event(
    State(state): State<Arc<AppState>>,
    AppJson(req): AppJson<EventRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    let input = req.into_input()?;

    let id = state
        .store
        .events
        .create(&input)
        .await
        .map_err(internal("Error creating event"))?;

    tracing::info!(event_id = id, title = %input.title, "event created");
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Event created successfully!")),
    ))
}

// =============================================================================
// PUT /api/events/{id}
// =============================================================================

pub async fn update_event(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
    AppJson(req): AppJson<EventRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = parse_id(&raw_id, EVENT_NOT_FOUND)?;
    let input = req.into_input()?;

    let found = state
        .store
        .events
        .update(id, &input)
        .await
        .map_err(internal("Error updating event"))?;

    if !found {
        return Err(AppError::not_found(EVENT_NOT_FOUND));
    }

    tracing::info!(event_id = id, "event updated");
    Ok(Json(MessageResponse::new("Event updated successfully!")))
}

// =============================================================================
// DELETE /api/events/{id}
// =============================================================================

pub async fn delete_event(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = parse_id(&raw_id, EVENT_NOT_FOUND)?;

    let removed = state
        .store
        .events
        .delete_with_registrations(id)
        .await
        .map_err(internal("Error deleting event"))?
        .ok_or_else(|| AppError::not_found(EVENT_NOT_FOUND))?;

    tracing::info!(event_id = id, registrations_removed = removed, "event deleted");
    Ok(Json(MessageResponse::new(
        "Event and related registrations deleted successfully!",
    )))
}

// =============================================================================
// GET /api/events/{id}/registrations
// =============================================================================

pub async fn list_event_registrations(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
) -> Result<Json<Vec<Registration>>, AppError> {
    let id = parse_id(&raw_id, EVENT_NOT_FOUND)?;

    let exists = state
        .store
        .events
        .find_by_id(id)
        .await
        .map_err(internal("Error fetching event"))?
        .is_some();
    if !exists {
        return Err(AppError::not_found(EVENT_NOT_FOUND));
    }

    let rows = state
        .store
        .registrations
        .list_by_event(id)
        .await
        .map_err(internal("Error fetching registrations."))?;

    Ok(Json(rows))
}

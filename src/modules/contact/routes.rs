use axum::{
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;

use crate::services::auth_gate::managed;
use crate::AppState;
use super::controller;

pub fn contact_routes(state: &Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/",
            post(controller::submit_message).merge(managed(state, get(controller::list_messages))),
        )
        .route("/{id}", managed(state, delete(controller::delete_message)))
}

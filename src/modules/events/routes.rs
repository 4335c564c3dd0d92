use axum::{
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;

use crate::services::auth_gate::managed;
use crate::AppState;
use super::controller;

pub fn event_routes(state: &Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/",
            get(controller::list_events).merge(managed(state, post(controller::create_event))),
        )
        .route(
            "/{id}",
            get(controller::get_event).merge(managed(
                state,
                put(controller::update_event).delete(controller::delete_event),
            )),
        )
        .route(
            "/{id}/registrations",
            managed(state, get(controller::list_event_registrations)),
        )
}

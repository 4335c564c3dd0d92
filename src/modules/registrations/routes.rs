use axum::{
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;

use crate::services::auth_gate::{admin_only, authenticated, managed};
use crate::AppState;
use super::controller;

pub fn registration_routes(state: &Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/",
            authenticated(state, post(controller::create_registration))
                .merge(managed(state, get(controller::list_registrations))),
        )
        .route("/my", authenticated(state, get(controller::list_my_registrations)))
        .route("/fix-cascade", admin_only(state, post(controller::enable_event_cascade)))
        .route("/{id}", managed(state, delete(controller::delete_registration)))
}

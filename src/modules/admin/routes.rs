use axum::{
    middleware,
    routing::{delete, get},
    Router,
};
use std::sync::Arc;

use crate::services::auth_gate::require_admin;
use crate::AppState;
use super::controller;

/// Everything under `/api/admin` sits behind the admin gate.
pub fn admin_routes(state: &Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route("/registrations", get(controller::list_registrations))
        .route("/registrations/{id}", delete(controller::delete_registration))
        .route("/contact", get(controller::list_messages))
        .route("/contact/{id}", delete(controller::delete_message))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin))
}

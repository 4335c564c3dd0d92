use axum::{middleware, routing::post, Router};
use std::sync::Arc;

use crate::services::rate_limit::{create_rate_limiter, throttle};
use crate::AppState;
use super::controller;

/// Signup and login draw from one bucket per app instance.
pub fn auth_routes(state: &Arc<AppState>) -> Router<Arc<AppState>> {
    let limiter = create_rate_limiter(
        state.settings.auth_rate_limit_burst,
        state.settings.auth_rate_limit_per_minute,
    );

    Router::new()
        .route("/signup", post(controller::signup))
        .route("/login", post(controller::login))
        .layer(middleware::from_fn_with_state(limiter, throttle))
}

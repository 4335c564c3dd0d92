pub mod config;
pub mod error;
pub mod extract;
pub mod modules;
pub mod services;
pub mod store;

use axum::{middleware, routing::get, Json, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};

use config::HttpSettings;
use error::MessageResponse;
use modules::{
    admin::admin_routes, auth::auth_routes, contact::contact_routes, events::event_routes,
    metrics::metrics_routes, registrations::registration_routes,
};
use services::jwt::JwtService;
use services::metrics::{metrics_middleware, MetricsRegistry};
use services::security::security_headers;
use store::Store;

pub struct AppState {
    pub store: Store,
    pub jwt_service: JwtService,
    pub metrics: Arc<MetricsRegistry>,
    pub settings: HttpSettings,
}

pub fn create_app(
    store: Store,
    jwt_service: JwtService,
    metrics: Arc<MetricsRegistry>,
    settings: HttpSettings,
) -> Router {
    let max_body_bytes = settings.max_body_bytes;
    let state = Arc::new(AppState {
        store,
        jwt_service,
        metrics,
        settings,
    });

    let api = Router::new()
        .nest("/auth", auth_routes(&state))
        .nest("/events", event_routes(&state))
        .nest("/registrations", registration_routes(&state))
        .nest("/contact", contact_routes(&state))
        .nest("/admin", admin_routes(&state));

    Router::new()
        .route("/", get(root))
        .merge(metrics_routes())
        .nest("/api", api)
        .fallback(not_found)
        .layer(middleware::from_fn_with_state(
            state.metrics.clone(),
            metrics_middleware,
        ))
        .layer(middleware::from_fn(security_headers))
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn root() -> &'static str {
    "Event Portal API"
}

async fn not_found() -> (axum::http::StatusCode, Json<MessageResponse>) {
    (
        axum::http::StatusCode::NOT_FOUND,
        Json(MessageResponse::new("Route not found")),
    )
}

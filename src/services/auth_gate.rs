use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::{self, Next},
    response::Response,
    routing::MethodRouter,
};
use std::sync::Arc;

use crate::config::AccessPolicy;
use crate::error::AppError;
use crate::services::jwt::{Identity, JwtService};
use crate::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateRejection {
    /// No `Authorization` header at all.
    MissingToken,
    /// Header present but the token is malformed, tampered or expired.
    InvalidToken,
    /// Valid token without the admin role.
    NotAdmin,
}

impl GateRejection {
    pub fn reason(&self) -> &'static str {
        match self {
            Self::MissingToken => "missing_token",
            Self::InvalidToken => "invalid_token",
            Self::NotAdmin => "not_admin",
        }
    }
}

impl From<GateRejection> for AppError {
    fn from(rejection: GateRejection) -> Self {
        match rejection {
            GateRejection::MissingToken => AppError::Unauthenticated("No token provided".into()),
            GateRejection::InvalidToken => AppError::forbidden("Invalid or expired token"),
            GateRejection::NotAdmin => AppError::forbidden("Access denied"),
        }
    }
}

/// Pulls the bearer token out of `headers` and verifies it.
pub fn authenticate(headers: &HeaderMap, jwt: &JwtService) -> Result<Identity, GateRejection> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(GateRejection::MissingToken)?;

    let token = value
        .to_str()
        .ok()
        .and_then(bearer_token)
        .ok_or(GateRejection::InvalidToken)?;

    jwt.verify(token)
        .map(Identity::from)
        .map_err(|_| GateRejection::InvalidToken)
}

/// `authenticate` plus the admin role check.
pub fn authenticate_admin(headers: &HeaderMap, jwt: &JwtService) -> Result<Identity, GateRejection> {
    let identity = authenticate(headers, jwt)?;
    if !identity.is_admin() {
        return Err(GateRejection::NotAdmin);
    }
    Ok(identity)
}

fn bearer_token(value: &str) -> Option<&str> {
    let (scheme, token) = value.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

pub async fn require_auth(
    State(state): State<Arc<AppState>>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    gate(&state, req, next, authenticate).await
}

pub async fn require_admin(
    State(state): State<Arc<AppState>>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    gate(&state, req, next, authenticate_admin).await
}

/// Wraps `route` so every method on it needs a valid token.
pub fn authenticated(state: &Arc<AppState>, route: MethodRouter<Arc<AppState>>) -> MethodRouter<Arc<AppState>> {
    route.route_layer(middleware::from_fn_with_state(state.clone(), require_auth))
}

/// Wraps `route` so every method on it needs an admin token.
pub fn admin_only(state: &Arc<AppState>, route: MethodRouter<Arc<AppState>>) -> MethodRouter<Arc<AppState>> {
    route.route_layer(middleware::from_fn_with_state(state.clone(), require_admin))
}

/// Management routes on the public prefixes: open under
/// `AccessPolicy::Compatible`, admin-only under `AccessPolicy::Strict`.
pub fn managed(state: &Arc<AppState>, route: MethodRouter<Arc<AppState>>) -> MethodRouter<Arc<AppState>> {
    match state.settings.access_policy {
        AccessPolicy::Compatible => route,
        AccessPolicy::Strict => admin_only(state, route),
    }
}

async fn gate<F>(state: &AppState, mut req: Request, next: Next, check: F) -> Result<Response, AppError>
where
    F: Fn(&HeaderMap, &JwtService) -> Result<Identity, GateRejection>,
{
    let identity = check(req.headers(), &state.jwt_service).map_err(|rejection| {
        tracing::warn!(
            reason = rejection.reason(),
            path = %req.uri().path(),
            "request rejected by auth gate"
        );
        state
            .metrics
            .auth_rejections_total
            .with_label_values(&[rejection.reason()])
            .inc();
        AppError::from(rejection)
    })?;

    req.extensions_mut().insert(identity);
    Ok(next.run(req).await)
}

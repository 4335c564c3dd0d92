use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use governor::{
    clock::DefaultClock,
    state::{InMemoryState, NotKeyed},
    Quota, RateLimiter,
};
use std::{num::NonZeroU32, sync::Arc};

use crate::error::MessageResponse;

/// One bucket shared by every caller of the routes it guards.
pub type SharedLimiter = Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>;

/// `burst` requests up front, then `per_minute` refilled each minute.
/// Zero values are raised to one.
pub fn create_rate_limiter(burst: u32, per_minute: u32) -> SharedLimiter {
    let refill = NonZeroU32::new(per_minute).unwrap_or(NonZeroU32::MIN);
    let burst = NonZeroU32::new(burst).unwrap_or(NonZeroU32::MIN);
    Arc::new(RateLimiter::direct(Quota::per_minute(refill).allow_burst(burst)))
}

pub async fn throttle(State(limiter): State<SharedLimiter>, req: Request, next: Next) -> Response {
    if limiter.check().is_err() {
        tracing::warn!(path = %req.uri().path(), "rate limit exceeded");
        return (
            StatusCode::TOO_MANY_REQUESTS,
            Json(MessageResponse::new("Too many requests, try again later.")),
        )
            .into_response();
    }

    next.run(req).await
}

use axum::extract::FromRequest;

use crate::error::AppError;

/// `axum::Json` whose rejections (bad syntax, wrong field types, missing
/// content type) answer with the usual `{message}` body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Path ids arrive as text. Anything that does not parse names no row, so
/// it gets the same 404 as an id that is simply absent.
pub fn parse_id(raw: &str, missing: &'static str) -> Result<i64, AppError> {
    raw.trim().parse().map_err(|_| AppError::not_found(missing))
}

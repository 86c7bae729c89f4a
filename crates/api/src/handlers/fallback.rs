//! Catch-all handlers so unmatched requests still get the JSON error body.

use axum::http::Uri;

use crate::error::AppError;

/// No route matches the request path.
pub async fn route_not_found(uri: Uri) -> AppError {
    AppError::RouteNotFound(uri.path().to_string())
}

/// The path exists but not for this method.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

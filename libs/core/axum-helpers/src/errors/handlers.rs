use axum::{http::StatusCode, response::Response};

use super::detail_response;

/// Handler for 404 Not Found errors.
///
/// Used as the router fallback.
pub async fn not_found() -> Response {
    detail_response(StatusCode::NOT_FOUND, "Not Found")
}

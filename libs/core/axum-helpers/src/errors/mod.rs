//! Error bodies shared by every route.
//!
//! Server-side failures are reported as `{"detail": "<message>"}`; request
//! bodies that fail to parse are reported as a list of [`ValidationIssue`]s
//! under the same `detail` key.

pub mod handlers;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of every non-validation error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorDetail {
    /// Human-readable error message
    pub detail: String,
}

/// One rejected field of a request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ValidationIssue {
    /// Location of the offending value, starting with `"body"`
    pub loc: Vec<String>,
    pub msg: String,
    /// Machine-readable category (`json_invalid`, `value_error`, ...)
    #[serde(rename = "type")]
    pub kind: String,
}

impl ValidationIssue {
    pub fn new(loc: Vec<String>, msg: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            loc,
            msg: msg.into(),
            kind: kind.into(),
        }
    }
}

/// Body returned when the request body is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ValidationErrorResponse {
    pub detail: Vec<ValidationIssue>,
}

impl IntoResponse for ValidationErrorResponse {
    fn into_response(self) -> Response {
        (StatusCode::UNPROCESSABLE_ENTITY, Json(self)).into_response()
    }
}

/// Builds a `{"detail": message}` response with the given status.
pub fn detail_response(status: StatusCode, message: impl Into<String>) -> Response {
    let body = Json(ErrorDetail {
        detail: message.into(),
    });

    (status, body).into_response()
}

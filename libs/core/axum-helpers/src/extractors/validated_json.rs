//! JSON extractor that reports deserialization failures field by field.

use crate::errors::{ValidationErrorResponse, ValidationIssue};
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{HeaderMap, header},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use serde_json::error::Category;

/// JSON extractor with structured rejections.
///
/// The body is deserialized with `serde_path_to_error`, so a type mismatch
/// deep inside the payload is reported with its full location, e.g.
/// `["body", "participants", "0", "archetype"]`. Rejections are returned
/// as HTTP 422 with a [`ValidationErrorResponse`] body.
///
/// A request without a `Content-Type` header is parsed as JSON. Any other
/// non-JSON media type is rejected with a single `["body"]` issue.
///
/// # Example
/// ```ignore
/// async fn create(ValidatedJson(payload): ValidatedJson<CreateThing>) -> String {
///     format!("Creating: {}", payload.name)
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !accepts_json_body(req.headers()) {
            tracing::debug!("Rejected request body with non-JSON content type");
            return Err(ValidationErrorResponse {
                detail: vec![ValidationIssue::new(
                    vec!["body".to_string()],
                    "Input should be a valid dictionary or object to extract fields from",
                    "model_attributes_type",
                )],
            }
            .into_response());
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;

        parse_body(&bytes)
            .map(ValidatedJson)
            .map_err(|issue| {
                tracing::debug!(loc = ?issue.loc, "Rejected request body: {}", issue.msg);
                ValidationErrorResponse {
                    detail: vec![issue],
                }
                .into_response()
            })
    }
}

/// True when the body should be read as JSON: no `Content-Type` at all, or a
/// JSON media type.
fn accepts_json_body(headers: &HeaderMap) -> bool {
    let Some(value) = headers.get(header::CONTENT_TYPE) else {
        return true;
    };
    let Ok(content_type) = value.to_str() else {
        return false;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}

/// Deserializes `bytes` into `T`, translating failures into a located issue.
pub(crate) fn parse_body<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ValidationIssue> {
    let mut deserializer = serde_json::Deserializer::from_slice(bytes);

    let value: T = serde_path_to_error::deserialize(&mut deserializer).map_err(|err| {
        let mut loc = vec!["body".to_string()];
        loc.extend(err.path().iter().filter_map(|segment| {
            use serde_path_to_error::Segment;
            match segment {
                Segment::Seq { index } => Some(index.to_string()),
                Segment::Map { key } => Some(key.clone()),
                Segment::Enum { variant } => Some(variant.clone()),
                Segment::Unknown => None,
            }
        }));

        let inner = err.into_inner();
        let kind = match inner.classify() {
            Category::Syntax | Category::Eof => "json_invalid",
            Category::Data => "value_error",
            Category::Io => "io_error",
        };

        ValidationIssue::new(loc, inner.to_string(), kind)
    })?;

    deserializer.end().map_err(|err| {
        ValidationIssue::new(vec!["body".to_string()], err.to_string(), "json_invalid")
    })?;

    Ok(value)
}

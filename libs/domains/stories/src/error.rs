use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum_helpers::detail_response;
use domain_vector::VectorError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoryError {
    /// The language model call failed or its reply did not match the schema
    #[error("{0}")]
    Model(String),

    #[error(transparent)]
    Store(#[from] VectorError),

    /// A background task panicked or was cancelled
    #[error("{0}")]
    Task(String),
}

pub type StoryResult<T> = Result<T, StoryError>;

impl From<tokio::task::JoinError> for StoryError {
    fn from(err: tokio::task::JoinError) -> Self {
        StoryError::Task(err.to_string())
    }
}

impl From<reqwest::Error> for StoryError {
    fn from(err: reqwest::Error) -> Self {
        StoryError::Model(err.to_string())
    }
}

impl IntoResponse for StoryError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Story generation failed");
        detail_response(StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    #[tokio::test]
    async fn test_error_renders_detail_body() {
        let response = StoryError::Model("connection refused".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, serde_json::json!({"detail": "connection refused"}));
    }

    #[test]
    fn test_vector_error_converts_to_store() {
        let err: StoryError = VectorError::CollectionNotFound("stories".to_string()).into();
        assert!(matches!(err, StoryError::Store(_)));
        assert_eq!(err.to_string(), "Collection not found: stories");
    }
}

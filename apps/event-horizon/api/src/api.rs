//! Route composition and the readiness check.

use std::sync::Arc;

use axum::{
    Router,
    extract::State,
    response::{IntoResponse, Response},
    routing::get,
};
use axum_helpers::server::{HealthCheckFuture, run_health_checks};
use domain_stories::StoryService;

/// Story endpoints (`GET /`, `POST /generate`)
pub fn routes(service: Arc<StoryService>) -> Router {
    domain_stories::handlers::router(service)
}

/// `/ready`, backed by a live check of the vector store
pub fn ready_router(service: Arc<StoryService>) -> Router {
    Router::new()
        .route("/ready", get(ready_handler))
        .with_state(service)
}

/// Readiness check endpoint that verifies the story collection is reachable.
pub async fn ready_handler(State(service): State<Arc<StoryService>>) -> Response {
    let checks: Vec<(&str, HealthCheckFuture<'_>)> = vec![(
        "vector_store",
        Box::pin(async {
            service
                .store()
                .ping()
                .await
                .map_err(|e| format!("Vector store ping failed: {}", e))
        }),
    )];

    match run_health_checks(checks).await {
        Ok((status, json)) => (status, json).into_response(),
        Err((status, json)) => (status, json).into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use domain_stories::{StoryAIOutput, StoryModel, StoryResult, StoryStore};
    use domain_vector::{
        EmbeddingProvider, EmbeddingProviderType, InMemoryRepository, Vector, VectorConfig,
        VectorRepository, VectorResult,
    };
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;
    use uuid::Uuid;

    struct UnusedModel;

    #[async_trait]
    impl StoryModel for UnusedModel {
        async fn generate(&self, _system_prompt: &str, _prompt: &str) -> StoryResult<StoryAIOutput> {
            unreachable!("readiness never calls the model")
        }
    }

    /// Accepts collection creation but never reports the collection as present
    struct ForgetfulRepository;

    #[async_trait]
    impl VectorRepository for ForgetfulRepository {
        async fn collection_exists(&self, _collection_name: &str) -> VectorResult<bool> {
            Ok(false)
        }

        async fn create_collection(&self, _collection_name: &str, _config: VectorConfig) -> VectorResult<()> {
            Ok(())
        }

        async fn upsert(&self, _collection_name: &str, vector: Vector, _wait: bool) -> VectorResult<Uuid> {
            Ok(vector.id)
        }

        async fn count(&self, _collection_name: &str) -> VectorResult<u64> {
            Ok(0)
        }
    }

    struct ZeroEmbedder;

    #[async_trait]
    impl EmbeddingProvider for ZeroEmbedder {
        fn provider_type(&self) -> EmbeddingProviderType {
            EmbeddingProviderType::Local
        }

        fn dimension(&self) -> u32 {
            384
        }

        async fn embed(&self, _text: &str) -> VectorResult<Vec<f32>> {
            Ok(vec![0.0; 384])
        }

        async fn embed_batch(&self, texts: &[String]) -> VectorResult<Vec<Vec<f32>>> {
            Ok(vec![vec![0.0; 384]; texts.len()])
        }
    }

    async fn ready_body(router: Router) -> (StatusCode, Value) {
        let request = Request::builder()
            .uri("/ready")
            .body(Body::empty())
            .unwrap();
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_ready_when_collection_exists() {
        let store = StoryStore::connect(
            Arc::new(InMemoryRepository::new()),
            Arc::new(ZeroEmbedder),
            "stories",
        )
        .await
        .unwrap();
        let service = Arc::new(StoryService::new(Arc::new(UnusedModel), store));

        let (status, body) = ready_body(ready_router(service)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "ready", "vector_store": "connected"}));
    }

    #[tokio::test]
    async fn test_not_ready_when_collection_missing() {
        let store = StoryStore::connect(
            Arc::new(ForgetfulRepository),
            Arc::new(ZeroEmbedder),
            "stories",
        )
        .await
        .unwrap();
        let service = Arc::new(StoryService::new(Arc::new(UnusedModel), store));

        let (status, body) = ready_body(ready_router(service)).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(
            body,
            json!({"status": "not ready", "vector_store": "disconnected"})
        );
    }
}

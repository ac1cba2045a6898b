use std::sync::Arc;

use domain_vector::{
    EmbeddingProvider, Vector, VectorConfig, VectorError, VectorRepository, VectorResult,
};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, info, instrument};
use uuid::Uuid;

/// Dense vector size of every stored story
pub const STORY_VECTOR_DIMENSION: u32 = 384;

/// Write side of the story collection: embeds text and upserts one point per story.
#[derive(Clone)]
pub struct StoryStore {
    repository: Arc<dyn VectorRepository>,
    embedder: Arc<dyn EmbeddingProvider>,
    collection: String,
}

impl StoryStore {
    /// Wraps the repository and makes sure the collection exists.
    pub async fn connect(
        repository: Arc<dyn VectorRepository>,
        embedder: Arc<dyn EmbeddingProvider>,
        collection: impl Into<String>,
    ) -> VectorResult<Self> {
        let store = Self {
            repository,
            embedder,
            collection: collection.into(),
        };
        store.ensure_collection().await?;
        Ok(store)
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// Creates the collection (384 dims, cosine) when it is missing.
    pub async fn ensure_collection(&self) -> VectorResult<()> {
        if self.repository.collection_exists(&self.collection).await? {
            debug!(collection = %self.collection, "Collection already exists");
            return Ok(());
        }

        self.repository
            .create_collection(&self.collection, VectorConfig::new(STORY_VECTOR_DIMENSION))
            .await?;
        info!(collection = %self.collection, "Created story collection");
        Ok(())
    }

    /// Embeds `text` and stores it with `metadata` merged into the payload.
    ///
    /// Metadata must serialize to a JSON object; its keys sit next to `text`.
    #[instrument(skip_all, fields(collection = %self.collection))]
    pub async fn add_story<M: Serialize>(&self, text: &str, metadata: &M) -> VectorResult<Uuid> {
        let values = self.embedder.embed(text).await?;
        if values.len() as u32 != STORY_VECTOR_DIMENSION {
            return Err(VectorError::Embedding(format!(
                "Embedding has {} dimensions, collection expects {}",
                values.len(),
                STORY_VECTOR_DIMENSION
            )));
        }

        let mut payload = Map::new();
        payload.insert("text".to_string(), Value::String(text.to_string()));
        match serde_json::to_value(metadata)
            .map_err(|e| VectorError::Internal(format!("Invalid story metadata: {}", e)))?
        {
            Value::Object(fields) => payload.extend(fields),
            Value::Null => {}
            other => {
                return Err(VectorError::Internal(format!(
                    "Story metadata must be an object, got {}",
                    other
                )));
            }
        }

        let id = Uuid::new_v4();
        let vector = Vector::new(id, values).with_payload(Value::Object(payload));
        let stored = self.repository.upsert(&self.collection, vector, true).await?;

        debug!(point_id = %stored, "Stored story vector");
        Ok(stored)
    }

    /// Readiness check: the collection is reachable and present
    pub async fn ping(&self) -> VectorResult<()> {
        if self.repository.collection_exists(&self.collection).await? {
            Ok(())
        } else {
            Err(VectorError::CollectionNotFound(self.collection.clone()))
        }
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::FixedEmbedder;
    use super::*;
    use domain_vector::InMemoryRepository;
    use serde_json::json;

    async fn store_with(repo: Arc<InMemoryRepository>) -> StoryStore {
        StoryStore::connect(repo, Arc::new(FixedEmbedder::default()), "stories")
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_connect_creates_collection_once() {
        let repo = Arc::new(InMemoryRepository::new());
        let store = store_with(repo.clone()).await;

        assert!(repo.collection_exists("stories").await.unwrap());
        store.ensure_collection().await.unwrap();
        store.ensure_collection().await.unwrap();
        store.ping().await.unwrap();

        // A second client over the same backend sees the existing collection
        store_with(repo).await;
    }

    #[tokio::test]
    async fn test_add_story_merges_metadata() {
        let repo = Arc::new(InMemoryRepository::new());
        let store = store_with(repo.clone()).await;

        let id = store
            .add_story(
                "The void answered.",
                &json!({"title": "Static", "genres": ["Cyberpunk"]}),
            )
            .await
            .unwrap();

        let points = repo.points("stories").await.unwrap();
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].id, id);
        assert_eq!(points[0].values.len(), 384);
        assert_eq!(
            points[0].payload,
            Some(json!({
                "text": "The void answered.",
                "title": "Static",
                "genres": ["Cyberpunk"]
            }))
        );
    }

    #[tokio::test]
    async fn test_each_story_gets_fresh_id() {
        let repo = Arc::new(InMemoryRepository::new());
        let store = store_with(repo.clone()).await;

        let first = store.add_story("same", &json!({})).await.unwrap();
        let second = store.add_story("same", &json!({})).await.unwrap();

        assert_ne!(first, second);
        assert_eq!(repo.count("stories").await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_wrong_embedding_size_is_rejected() {
        let repo = Arc::new(InMemoryRepository::new());
        let store = StoryStore::connect(
            repo.clone(),
            Arc::new(FixedEmbedder { dimension: 768 }),
            "stories",
        )
        .await
        .unwrap();

        let err = store.add_story("text", &json!({})).await.unwrap_err();
        assert!(matches!(err, VectorError::Embedding(_)));
        assert_eq!(repo.count("stories").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_non_object_metadata_is_rejected() {
        let store = store_with(Arc::new(InMemoryRepository::new())).await;
        assert!(store.add_story("text", &json!([1, 2])).await.is_err());
    }

    #[tokio::test]
    async fn test_ping_fails_when_collection_missing() {
        let store = StoryStore {
            repository: Arc::new(InMemoryRepository::new()),
            embedder: Arc::new(FixedEmbedder::default()),
            collection: "stories".to_string(),
        };

        assert!(matches!(
            store.ping().await,
            Err(VectorError::CollectionNotFound(_))
        ));
    }
}

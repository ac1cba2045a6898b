use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{VectorError, VectorResult};
use crate::models::{Vector, VectorConfig};
use crate::repository::VectorRepository;

#[derive(Debug)]
struct Collection {
    config: VectorConfig,
    points: HashMap<Uuid, Vector>,
}

/// Process-local vector store selected by the `:memory:` location.
///
/// Contents vanish when the process exits.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    collections: RwLock<HashMap<String, Collection>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every point in a collection
    pub async fn points(&self, collection_name: &str) -> VectorResult<Vec<Vector>> {
        let collections = self.collections.read().await;
        let collection = collections
            .get(collection_name)
            .ok_or_else(|| VectorError::CollectionNotFound(collection_name.to_string()))?;
        Ok(collection.points.values().cloned().collect())
    }
}

#[async_trait]
impl VectorRepository for InMemoryRepository {
    async fn collection_exists(&self, collection_name: &str) -> VectorResult<bool> {
        Ok(self.collections.read().await.contains_key(collection_name))
    }

    async fn create_collection(
        &self,
        collection_name: &str,
        config: VectorConfig,
    ) -> VectorResult<()> {
        let mut collections = self.collections.write().await;
        if collections.contains_key(collection_name) {
            return Err(VectorError::Internal(format!(
                "Collection already exists: {}",
                collection_name
            )));
        }

        collections.insert(
            collection_name.to_string(),
            Collection {
                config,
                points: HashMap::new(),
            },
        );
        Ok(())
    }

    async fn upsert(
        &self,
        collection_name: &str,
        vector: Vector,
        _wait: bool,
    ) -> VectorResult<Uuid> {
        let mut collections = self.collections.write().await;
        let collection = collections
            .get_mut(collection_name)
            .ok_or_else(|| VectorError::CollectionNotFound(collection_name.to_string()))?;

        if vector.dimension() != collection.config.dimension {
            return Err(VectorError::DimensionMismatch {
                expected: collection.config.dimension,
                actual: vector.dimension(),
            });
        }

        let id = vector.id;
        collection.points.insert(id, vector);
        Ok(id)
    }

    async fn count(&self, collection_name: &str) -> VectorResult<u64> {
        let collections = self.collections.read().await;
        collections
            .get(collection_name)
            .map(|c| c.points.len() as u64)
            .ok_or_else(|| VectorError::CollectionNotFound(collection_name.to_string()))
    }
}

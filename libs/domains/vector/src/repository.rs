use async_trait::async_trait;
use uuid::Uuid;

use crate::error::VectorResult;
use crate::models::{Vector, VectorConfig};

/// Repository trait for vector storage operations
///
/// Abstracts the underlying vector database so the in-process store and
/// Qdrant are interchangeable.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VectorRepository: Send + Sync {
    /// Whether a collection with this name exists
    async fn collection_exists(&self, collection_name: &str) -> VectorResult<bool>;

    /// Create a new collection with the given configuration
    async fn create_collection(
        &self,
        collection_name: &str,
        config: VectorConfig,
    ) -> VectorResult<()>;

    /// Upsert a single vector, returning its id
    async fn upsert(&self, collection_name: &str, vector: Vector, wait: bool)
    -> VectorResult<Uuid>;

    /// Number of points stored in a collection
    async fn count(&self, collection_name: &str) -> VectorResult<u64>;
}

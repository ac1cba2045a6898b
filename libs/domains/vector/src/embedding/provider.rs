use async_trait::async_trait;

use crate::error::VectorResult;
use crate::models::EmbeddingProviderType;

/// Trait for embedding generation providers
///
/// Implementations can run a local model or call a remote embeddings API.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Get the provider type
    fn provider_type(&self) -> EmbeddingProviderType;

    /// Length of every vector this provider returns
    fn dimension(&self) -> u32;

    /// Generate embedding for a single text
    async fn embed(&self, text: &str) -> VectorResult<Vec<f32>>;

    /// Generate embeddings for multiple texts in batch, preserving order
    async fn embed_batch(&self, texts: &[String]) -> VectorResult<Vec<Vec<f32>>>;
}

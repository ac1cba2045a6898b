use std::sync::Arc;

use async_trait::async_trait;
use fastembed::{EmbeddingModel, InitOptions, TextEmbedding};

use super::EmbeddingProvider;
use crate::error::{VectorError, VectorResult};
use crate::models::EmbeddingProviderType;

/// Output size of BAAI/bge-small-en-v1.5
pub const FASTEMBED_DIMENSION: u32 = 384;

/// Local ONNX embeddings (BAAI/bge-small-en-v1.5) via fastembed.
///
/// Inference is CPU-bound and runs on tokio's blocking pool.
#[derive(Clone)]
pub struct FastEmbedProvider {
    model: Arc<TextEmbedding>,
}

impl FastEmbedProvider {
    /// Loads the model, downloading it into the fastembed cache on first use.
    pub async fn load() -> VectorResult<Self> {
        let model = tokio::task::spawn_blocking(|| {
            TextEmbedding::try_new(
                InitOptions::new(EmbeddingModel::BGESmallENV15)
                    .with_show_download_progress(false),
            )
        })
        .await?
        .map_err(|e| VectorError::Embedding(format!("Failed to load embedding model: {}", e)))?;

        tracing::info!("Loaded local embedding model BAAI/bge-small-en-v1.5");

        Ok(Self {
            model: Arc::new(model),
        })
    }
}

#[async_trait]
impl EmbeddingProvider for FastEmbedProvider {
    fn provider_type(&self) -> EmbeddingProviderType {
        EmbeddingProviderType::Local
    }

    fn dimension(&self) -> u32 {
        FASTEMBED_DIMENSION
    }

    async fn embed(&self, text: &str) -> VectorResult<Vec<f32>> {
        self.embed_batch(&[text.to_string()])
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| VectorError::Embedding("No embedding returned".to_string()))
    }

    async fn embed_batch(&self, texts: &[String]) -> VectorResult<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(vec![]);
        }

        let model = Arc::clone(&self.model);
        let input = texts.to_vec();

        tokio::task::spawn_blocking(move || model.embed(input, None))
            .await?
            .map_err(|e| VectorError::Embedding(e.to_string()))
    }
}

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::EmbeddingProvider;
use crate::error::{VectorError, VectorResult};
use crate::models::EmbeddingProviderType;

/// OpenAI-compatible embedding provider configuration
#[derive(Debug, Clone)]
pub struct OpenAIConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub dimension: u32,
}

impl OpenAIConfig {
    pub fn new(api_key: String, model: String, dimension: u32) -> Self {
        Self {
            api_key,
            base_url: "https://api.openai.com/v1".to_string(),
            model,
            dimension,
        }
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }
}

/// Embeddings from any server exposing `POST {base_url}/embeddings`
pub struct OpenAIProvider {
    client: Client,
    config: OpenAIConfig,
}

impl OpenAIProvider {
    pub fn new(config: OpenAIConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }
}

#[derive(Debug, Serialize)]
struct EmbeddingRequest<'a> {
    model: &'a str,
    input: &'a [String],
    dimensions: u32,
}

#[derive(Debug, Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
    index: usize,
}

fn into_ordered_vectors(response: EmbeddingResponse, expected: usize) -> VectorResult<Vec<Vec<f32>>> {
    let mut data = response.data;
    if data.len() != expected {
        return Err(VectorError::Embedding(format!(
            "Expected {} embeddings, got {}",
            expected,
            data.len()
        )));
    }

    // Sort by index to maintain order
    data.sort_by_key(|d| d.index);
    Ok(data.into_iter().map(|d| d.embedding).collect())
}

#[async_trait]
impl EmbeddingProvider for OpenAIProvider {
    fn provider_type(&self) -> EmbeddingProviderType {
        EmbeddingProviderType::OpenAI
    }

    fn dimension(&self) -> u32 {
        self.config.dimension
    }

    async fn embed(&self, text: &str) -> VectorResult<Vec<f32>> {
        let results = self.embed_batch(&[text.to_string()]).await?;
        results
            .into_iter()
            .next()
            .ok_or_else(|| VectorError::Embedding("No embedding returned".to_string()))
    }

    async fn embed_batch(&self, texts: &[String]) -> VectorResult<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(vec![]);
        }

        let request = EmbeddingRequest {
            model: &self.config.model,
            input: texts,
            dimensions: self.config.dimension,
        };

        let response = self
            .client
            .post(format!("{}/embeddings", self.config.base_url))
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(VectorError::Embedding(format!(
                "Embeddings API error ({}): {}",
                status, error_text
            )));
        }

        let embedding_response: EmbeddingResponse = response.json().await?;
        into_ordered_vectors(embedding_response, texts.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_shape() {
        let input = vec!["first".to_string()];
        let request = EmbeddingRequest {
            model: "text-embedding-3-small",
            input: &input,
            dimensions: 384,
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"model": "text-embedding-3-small", "input": ["first"], "dimensions": 384})
        );
    }

    #[test]
    fn test_response_is_reordered_by_index() {
        let response: EmbeddingResponse = serde_json::from_value(json!({
            "data": [
                {"embedding": [0.2, 0.2], "index": 1},
                {"embedding": [0.1, 0.1], "index": 0}
            ],
            "usage": {"prompt_tokens": 4, "total_tokens": 4}
        }))
        .unwrap();

        let vectors = into_ordered_vectors(response, 2).unwrap();
        assert_eq!(vectors, vec![vec![0.1, 0.1], vec![0.2, 0.2]]);
    }

    #[test]
    fn test_response_count_mismatch() {
        let response = EmbeddingResponse { data: vec![] };
        assert!(matches!(
            into_ordered_vectors(response, 1),
            Err(VectorError::Embedding(_))
        ));
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let config = OpenAIConfig::new("key".into(), "m".into(), 384)
            .with_base_url("http://localhost:1234/v1/".into());
        assert_eq!(config.base_url, "http://localhost:1234/v1");
    }
}

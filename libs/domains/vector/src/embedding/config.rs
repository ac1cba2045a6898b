use std::sync::Arc;

use super::{EmbeddingProvider, FastEmbedProvider, OpenAIConfig, OpenAIProvider};
use crate::error::{VectorError, VectorResult};
use crate::models::EmbeddingProviderType;

const DEFAULT_BASE_URL: &str = "http://localhost:1234/v1";
const DEFAULT_API_KEY: &str = "lm-studio";
const DEFAULT_REMOTE_MODEL: &str = "text-embedding-3-small";

/// Selects and configures the embedding backend
#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddingConfig {
    pub provider: EmbeddingProviderType,
    pub model: String,
    pub base_url: String,
    pub api_key: String,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            provider: EmbeddingProviderType::Local,
            model: DEFAULT_REMOTE_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: DEFAULT_API_KEY.to_string(),
        }
    }
}

impl EmbeddingConfig {
    /// Reads `EMBEDDING_PROVIDER`, `EMBEDDING_MODEL`, `EMBEDDING_BASE_URL` and
    /// `EMBEDDING_API_KEY`. The last two fall back to `LLM_BASE_URL` and
    /// `LLM_API_KEY`.
    pub fn from_env() -> VectorResult<Self> {
        let provider = match std::env::var("EMBEDDING_PROVIDER") {
            Ok(raw) => raw.parse().map_err(VectorError::Config)?,
            Err(_) => EmbeddingProviderType::Local,
        };

        let model =
            std::env::var("EMBEDDING_MODEL").unwrap_or_else(|_| DEFAULT_REMOTE_MODEL.to_string());

        let base_url = std::env::var("EMBEDDING_BASE_URL")
            .or_else(|_| std::env::var("LLM_BASE_URL"))
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let api_key = std::env::var("EMBEDDING_API_KEY")
            .or_else(|_| std::env::var("LLM_API_KEY"))
            .unwrap_or_else(|_| DEFAULT_API_KEY.to_string());

        Ok(Self {
            provider,
            model,
            base_url,
            api_key,
        })
    }

    /// Builds the configured provider, producing vectors of `dimension` length.
    pub async fn build(&self, dimension: u32) -> VectorResult<Arc<dyn EmbeddingProvider>> {
        match self.provider {
            EmbeddingProviderType::Local => {
                let provider = FastEmbedProvider::load().await?;
                if provider.dimension() != dimension {
                    return Err(VectorError::DimensionMismatch {
                        expected: dimension,
                        actual: provider.dimension(),
                    });
                }
                Ok(Arc::new(provider))
            }
            EmbeddingProviderType::OpenAI => {
                tracing::info!(
                    "Using remote embeddings model {} at {}",
                    self.model,
                    self.base_url
                );
                let config = OpenAIConfig::new(self.api_key.clone(), self.model.clone(), dimension)
                    .with_base_url(self.base_url.clone());
                Ok(Arc::new(OpenAIProvider::new(config)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VARS: [&str; 6] = [
        "EMBEDDING_PROVIDER",
        "EMBEDDING_MODEL",
        "EMBEDDING_BASE_URL",
        "EMBEDDING_API_KEY",
        "LLM_BASE_URL",
        "LLM_API_KEY",
    ];

    #[test]
    fn test_from_env_defaults() {
        temp_env::with_vars_unset(VARS, || {
            let config = EmbeddingConfig::from_env().unwrap();
            assert_eq!(config, EmbeddingConfig::default());
        });
    }

    #[test]
    fn test_falls_back_to_llm_settings() {
        temp_env::with_vars(
            [
                ("EMBEDDING_PROVIDER", Some("openai")),
                ("EMBEDDING_BASE_URL", None),
                ("EMBEDDING_API_KEY", None),
                ("LLM_BASE_URL", Some("http://llm:8000/v1")),
                ("LLM_API_KEY", Some("llm-key")),
            ],
            || {
                let config = EmbeddingConfig::from_env().unwrap();
                assert_eq!(config.provider, EmbeddingProviderType::OpenAI);
                assert_eq!(config.base_url, "http://llm:8000/v1");
                assert_eq!(config.api_key, "llm-key");
            },
        );
    }

    #[test]
    fn test_explicit_embedding_settings_win() {
        temp_env::with_vars(
            [
                ("EMBEDDING_BASE_URL", Some("http://embed:9000/v1")),
                ("EMBEDDING_API_KEY", Some("embed-key")),
                ("EMBEDDING_MODEL", Some("nomic-embed-text")),
                ("LLM_BASE_URL", Some("http://llm:8000/v1")),
                ("LLM_API_KEY", Some("llm-key")),
            ],
            || {
                let config = EmbeddingConfig::from_env().unwrap();
                assert_eq!(config.base_url, "http://embed:9000/v1");
                assert_eq!(config.api_key, "embed-key");
                assert_eq!(config.model, "nomic-embed-text");
            },
        );
    }

    #[test]
    fn test_unknown_provider_is_config_error() {
        temp_env::with_var("EMBEDDING_PROVIDER", Some("word2vec"), || {
            assert!(matches!(
                EmbeddingConfig::from_env(),
                Err(VectorError::Config(_))
            ));
        });
    }

    #[tokio::test]
    async fn test_build_remote_provider() {
        let config = EmbeddingConfig {
            provider: EmbeddingProviderType::OpenAI,
            ..EmbeddingConfig::default()
        };
        let provider = config.build(384).await.unwrap();
        assert_eq!(provider.provider_type(), EmbeddingProviderType::OpenAI);
        assert_eq!(provider.dimension(), 384);
    }
}

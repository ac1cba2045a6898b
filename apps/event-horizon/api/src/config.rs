use core_config::{AppInfo, FromEnv, app_info, env_or_default, server::ServerConfig};
use domain_stories::LlmConfig;
use domain_vector::{EmbeddingConfig, QdrantConfig};

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Application-specific configuration
/// Composes shared config components from the `config` library and the domains
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub environment: Environment,
    pub llm: LlmConfig,
    pub qdrant: QdrantConfig,
    pub collection: String,
    pub embedding: EmbeddingConfig,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?; // Uses defaults: HOST=0.0.0.0, PORT=8080
        let llm = LlmConfig::from_env()?; // Defaults to a local LM Studio server
        let qdrant = QdrantConfig::from_env()?; // Defaults to the in-memory store
        let embedding = EmbeddingConfig::from_env()?;
        let collection = env_or_default("QDRANT_COLLECTION", "stories");

        Ok(Self {
            app: app_info!(),
            server,
            environment,
            llm,
            qdrant,
            collection,
            embedding,
        })
    }
}

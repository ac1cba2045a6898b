use std::sync::Arc;

use crate::error::{VectorError, VectorResult};
use crate::memory::InMemoryRepository;
use crate::repository::VectorRepository;

use super::QdrantRepository;

/// Location value that selects the in-process store instead of a server.
pub const IN_MEMORY_LOCATION: &str = ":memory:";

/// Where vectors live: in this process, or on a Qdrant server
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreLocation {
    InMemory,
    Url(String),
}

impl StoreLocation {
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed == IN_MEMORY_LOCATION {
            StoreLocation::InMemory
        } else {
            StoreLocation::Url(trimmed.to_string())
        }
    }
}

impl std::fmt::Display for StoreLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreLocation::InMemory => f.write_str(IN_MEMORY_LOCATION),
            StoreLocation::Url(url) => f.write_str(url),
        }
    }
}

/// Qdrant connection configuration
#[derive(Debug, Clone)]
pub struct QdrantConfig {
    pub location: StoreLocation,
    pub api_key: Option<String>,
    pub timeout_secs: u64,
}

impl QdrantConfig {
    pub fn new(location: StoreLocation) -> Self {
        Self {
            location,
            api_key: None,
            timeout_secs: 30,
        }
    }

    pub fn in_memory() -> Self {
        Self::new(StoreLocation::InMemory)
    }

    /// Reads `QDRANT_URL` (default `:memory:`), `QDRANT_API_KEY` and
    /// `QDRANT_TIMEOUT_SECS` (default 30).
    pub fn from_env() -> VectorResult<Self> {
        let location = std::env::var("QDRANT_URL")
            .map(|raw| StoreLocation::parse(&raw))
            .unwrap_or(StoreLocation::InMemory);

        let api_key = std::env::var("QDRANT_API_KEY")
            .ok()
            .filter(|key| !key.is_empty());

        let timeout_secs = match std::env::var("QDRANT_TIMEOUT_SECS") {
            Ok(raw) => raw.trim().parse().map_err(|e| {
                VectorError::Config(format!("QDRANT_TIMEOUT_SECS '{}' is invalid: {}", raw, e))
            })?,
            Err(_) => 30,
        };

        Ok(Self {
            location,
            api_key,
            timeout_secs,
        })
    }

    /// Opens the repository this configuration points at.
    pub async fn connect(&self) -> VectorResult<Arc<dyn VectorRepository>> {
        match &self.location {
            StoreLocation::InMemory => {
                tracing::info!("Using in-memory vector store");
                Ok(Arc::new(InMemoryRepository::new()))
            }
            StoreLocation::Url(url) => {
                tracing::info!("Connecting to Qdrant at {}", url);
                Ok(Arc::new(QdrantRepository::new(self.clone()).await?))
            }
        }
    }
}

impl Default for QdrantConfig {
    fn default() -> Self {
        Self::in_memory()
    }
}

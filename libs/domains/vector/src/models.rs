use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Vector collection configuration. Collections always use cosine distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VectorConfig {
    pub dimension: u32,
}

impl VectorConfig {
    pub fn new(dimension: u32) -> Self {
        Self { dimension }
    }
}

/// A single point: id, dense values and an optional JSON payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    pub id: Uuid,
    pub values: Vec<f32>,
    pub payload: Option<serde_json::Value>,
}

impl Vector {
    pub fn new(id: Uuid, values: Vec<f32>) -> Self {
        Self {
            id,
            values,
            payload: None,
        }
    }

    pub fn with_payload(mut self, payload: serde_json::Value) -> Self {
        self.payload = Some(payload);
        self
    }

    pub fn dimension(&self) -> u32 {
        self.values.len() as u32
    }
}

/// Which backend produces embeddings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmbeddingProviderType {
    /// In-process ONNX model via fastembed
    #[default]
    Local,
    /// OpenAI-compatible `/embeddings` endpoint
    OpenAI,
}

impl std::str::FromStr for EmbeddingProviderType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "local" | "fastembed" => Ok(Self::Local),
            "openai" => Ok(Self::OpenAI),
            other => Err(format!(
                "unknown embedding provider '{}', expected 'local' or 'openai'",
                other
            )),
        }
    }
}

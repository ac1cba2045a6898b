mod config;
mod local;
mod openai;
mod provider;

pub use config::EmbeddingConfig;
pub use local::{FASTEMBED_DIMENSION, FastEmbedProvider};
pub use openai::{OpenAIConfig, OpenAIProvider};
pub use provider::EmbeddingProvider;


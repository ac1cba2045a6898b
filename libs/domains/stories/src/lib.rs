//! Stories Domain
//!
//! Turns story parameters into a generated sci-fi story and records every
//! story in a vector collection.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │   Handlers   │  ← POST /generate, GET /
//! └──────┬───────┘
//!        │
//! ┌──────▼───────┐
//! │ StoryService │  ← prompt, model call, store
//! └──┬────────┬──┘
//!    │        │
//! ┌──▼─────┐ ┌▼───────────┐
//! │ Story  │ │ StoryStore │  ← embeds + upserts via domain_vector
//! │ Model  │ └────────────┘
//! └────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use core_config::FromEnv;
//! use domain_stories::{LlmConfig, OpenAiChatModel, StoryService, StoryStore};
//! use domain_vector::{EmbeddingConfig, QdrantConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let repository = QdrantConfig::from_env()?.connect().await?;
//! let embedder = EmbeddingConfig::from_env()?.build(384).await?;
//! let store = StoryStore::connect(repository, embedder, "stories").await?;
//!
//! let model = OpenAiChatModel::new(LlmConfig::from_env()?)?;
//! let service = Arc::new(StoryService::new(Arc::new(model), store));
//! let router = domain_stories::handlers::router(service);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod llm;
pub mod models;
pub mod prompts;
pub mod service;
pub mod store;

// Re-export commonly used types
pub use error::{StoryError, StoryResult};
pub use handlers::StoriesApiDoc;
pub use llm::{LlmConfig, OpenAiChatModel, StoryModel};
pub use models::{
    NarrativeSpark, Participant, ReadingEffort, StoryAIOutput, StoryMetadata, StoryRequest,
    StoryResponse, TimePeriod,
};
pub use service::StoryService;
pub use store::{STORY_VECTOR_DIMENSION, StoryStore};

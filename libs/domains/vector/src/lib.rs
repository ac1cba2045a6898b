//! Vector Domain Library
//!
//! Dense-vector storage behind a repository trait, plus the embedding
//! providers that turn text into vectors.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐     ┌───────────────────┐
//! │ VectorRepository │     │ EmbeddingProvider │
//! │     (trait)      │     │      (trait)      │
//! └────────┬─────────┘     └─────────┬─────────┘
//!          │                         │
//! ┌────────▼─────────┐     ┌─────────▼─────────┐
//! │ QdrantRepository │     │ FastEmbedProvider │
//! │InMemoryRepository│     │  OpenAIProvider   │
//! └──────────────────┘     └───────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_vector::{EmbeddingConfig, QdrantConfig, Vector, VectorConfig};
//! use uuid::Uuid;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let repository = QdrantConfig::from_env()?.connect().await?;
//! let embedder = EmbeddingConfig::from_env()?.build(384).await?;
//!
//! if !repository.collection_exists("documents").await? {
//!     repository
//!         .create_collection("documents", VectorConfig::new(384))
//!         .await?;
//! }
//!
//! let values = embedder.embed("hello world").await?;
//! repository
//!     .upsert("documents", Vector::new(Uuid::new_v4(), values), true)
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod embedding;
pub mod error;
pub mod memory;
pub mod models;
pub mod qdrant;
pub mod repository;

// Re-export commonly used types
pub use embedding::{
    EmbeddingConfig, EmbeddingProvider, FASTEMBED_DIMENSION, FastEmbedProvider, OpenAIConfig,
    OpenAIProvider,
};
pub use error::{VectorError, VectorResult};
pub use memory::InMemoryRepository;
pub use models::{EmbeddingProviderType, Vector, VectorConfig};
pub use qdrant::{IN_MEMORY_LOCATION, QdrantConfig, QdrantRepository, StoreLocation};
pub use repository::VectorRepository;

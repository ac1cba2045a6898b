mod client;
mod config;

pub use client::QdrantRepository;
pub use config::{IN_MEMORY_LOCATION, QdrantConfig, StoreLocation};

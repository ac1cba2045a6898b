//! Language model access for story generation.

mod client;
mod config;

pub use client::OpenAiChatModel;
pub use config::LlmConfig;

use async_trait::async_trait;

use crate::error::StoryResult;
use crate::models::StoryAIOutput;

/// A model that turns a prompt into a structured story
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StoryModel: Send + Sync {
    async fn generate(&self, system_prompt: &str, prompt: &str) -> StoryResult<StoryAIOutput>;
}

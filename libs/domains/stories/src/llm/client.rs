use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use super::{LlmConfig, StoryModel};
use crate::error::{StoryError, StoryResult};
use crate::models::StoryAIOutput;

/// Chat completion client for any OpenAI-compatible server
/// (OpenAI, LM Studio, Ollama, vLLM).
pub struct OpenAiChatModel {
    client: Client,
    config: LlmConfig,
    output_schema: Value,
}

impl OpenAiChatModel {
    pub fn new(config: LlmConfig) -> StoryResult<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let client = builder
            .build()
            .map_err(|e| StoryError::Model(format!("Failed to build HTTP client: {}", e)))?;

        let output_schema = serde_json::to_value(schemars::schema_for!(StoryAIOutput))
            .map_err(|e| StoryError::Model(format!("Failed to build output schema: {}", e)))?;

        Ok(Self {
            client,
            config,
            output_schema,
        })
    }

    fn request_body(&self, system_prompt: &str, prompt: &str) -> ChatRequest<'_> {
        ChatRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system_prompt.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: prompt.to_string(),
                },
            ],
            temperature: self.config.temperature,
            response_format: json!({
                "type": "json_schema",
                "json_schema": {
                    "name": "StoryAIOutput",
                    "schema": self.output_schema,
                }
            }),
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    response_format: Value,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    content: Option<String>,
}

/// Strips a surrounding markdown code fence, if any
fn unwrap_code_fence(content: &str) -> &str {
    let trimmed = content.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    // Drop the language tag on the opening fence line
    let body = match rest.find('\n') {
        Some(newline) => &rest[newline + 1..],
        None => rest,
    };

    body.trim_end().strip_suffix("```").unwrap_or(body).trim()
}

/// Parses a model reply into the structured story output
pub(crate) fn parse_output(content: &str) -> StoryResult<StoryAIOutput> {
    serde_json::from_str(unwrap_code_fence(content)).map_err(|e| {
        StoryError::Model(format!("Model reply did not match the story schema: {}", e))
    })
}

#[async_trait]
impl StoryModel for OpenAiChatModel {
    async fn generate(&self, system_prompt: &str, prompt: &str) -> StoryResult<StoryAIOutput> {
        let response = self
            .client
            .post(format!("{}/chat/completions", self.config.base_url))
            .bearer_auth(&self.config.api_key)
            .json(&self.request_body(system_prompt, prompt))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(StoryError::Model(format!(
                "Chat completion API error {}: {}",
                status, body
            )));
        }

        let completion: ChatResponse = response.json().await?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| StoryError::Model("Model returned no content".to_string()))?;

        tracing::debug!(chars = content.len(), "Received model reply");

        parse_output(&content)
    }
}

use std::sync::Arc;

use tracing::{info, instrument};

use crate::error::StoryResult;
use crate::llm::StoryModel;
use crate::models::{StoryMetadata, StoryRequest, StoryResponse};
use crate::prompts::{SYSTEM_PROMPT, build_prompt};
use crate::store::StoryStore;

/// Generates stories and records each one in the vector store
#[derive(Clone)]
pub struct StoryService {
    model: Arc<dyn StoryModel>,
    store: StoryStore,
}

impl StoryService {
    pub fn new(model: Arc<dyn StoryModel>, store: StoryStore) -> Self {
        Self { model, store }
    }

    pub fn store(&self) -> &StoryStore {
        &self.store
    }

    /// Asks the model for a story, stores it, and returns it with the request echoed back.
    ///
    /// Nothing is stored when the model call fails. A storage failure fails the
    /// whole operation.
    #[instrument(
        skip(self, request),
        fields(
            time_period = %request.time_period,
            reading_effort = %request.reading_effort,
            first_chapter = request.create_only_first_chapter,
        )
    )]
    pub async fn generate_and_save_story(&self, request: StoryRequest) -> StoryResult<StoryResponse> {
        let prompt = build_prompt(&request);
        let output = self.model.generate(SYSTEM_PROMPT, &prompt).await?;

        let metadata = StoryMetadata::new(&output, &request);
        let store = self.store.clone();
        let text = output.full_text.clone();
        let point_id = tokio::spawn(async move { store.add_story(&text, &metadata).await }).await??;

        info!(%point_id, title = %output.title, "Story generated and stored");

        Ok(StoryResponse::new(output, request))
    }
}

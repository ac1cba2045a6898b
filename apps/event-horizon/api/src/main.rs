use axum_helpers::server::{create_production_app, health_router};
use core_config::load_dotenv;
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_stories::{
    OpenAiChatModel, STORY_VECTOR_DIMENSION, StoriesApiDoc, StoryService, StoryStore,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

mod api;
mod config;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    let dotenv_loaded = load_dotenv();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing with ErrorLayer for span trace capture
    init_tracing(&config.environment);

    if dotenv_loaded {
        info!("Loaded settings from .env");
    }

    let repository = config.qdrant.connect().await?;
    let embedder = config.embedding.build(STORY_VECTOR_DIMENSION).await?;
    let store = StoryStore::connect(repository, embedder, config.collection.clone()).await?;
    info!(
        "Vector store ready at {} (collection: {})",
        config.qdrant.location,
        store.collection()
    );

    let model = OpenAiChatModel::new(config.llm.clone())?;
    info!(
        "Using language model {} at {}",
        config.llm.model, config.llm.base_url
    );

    let service = Arc::new(StoryService::new(Arc::new(model), store));

    // create_router adds docs/middleware to our composed routes
    let router = axum_helpers::create_router::<StoriesApiDoc>(api::routes(service.clone()))?;

    // - /health: liveness check with app name/version
    // - /ready: readiness check against the vector store
    let app = router
        .merge(health_router(config.app))
        .merge(api::ready_router(service.clone()));

    info!("Starting Event Horizon API with production-ready shutdown (30s timeout)");

    create_production_app(
        app,
        &config.server,
        Duration::from_secs(30), // 30s graceful shutdown timeout
        async move {
            info!("Shutting down: releasing story service");
            drop(service);
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Event Horizon API shutdown complete");
    Ok(())
}

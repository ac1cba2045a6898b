use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use axum_helpers::{ErrorDetail, ValidatedJson, ValidationErrorResponse, ValidationIssue};
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

use crate::error::StoryResult;
use crate::models::{
    NarrativeSpark, Participant, ReadingEffort, StoryRequest, StoryResponse, TimePeriod,
};
use crate::service::StoryService;

pub const WELCOME_MESSAGE: &str =
    "Welcome to Event Horizon API. Use POST /generate to create stories.";

/// OpenAPI documentation for the story endpoints
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Event Horizon Backend",
        description = "Backend for the Event Horizon sci-fi story generator.",
        version = "0.1.0"
    ),
    paths(root, generate_story),
    components(schemas(
        StoryRequest,
        StoryResponse,
        Participant,
        NarrativeSpark,
        TimePeriod,
        ReadingEffort,
        WelcomeMessage,
        ErrorDetail,
        ValidationErrorResponse,
        ValidationIssue
    )),
    tags((name = "stories", description = "Sci-fi story generation"))
)]
pub struct StoriesApiDoc;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct WelcomeMessage {
    pub message: String,
}

/// Router for `GET /` and `POST /generate`
pub fn router(service: Arc<StoryService>) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/generate", post(generate_story))
        .with_state(service)
}

/// Welcome message
#[utoipa::path(
    get,
    path = "/",
    tag = "stories",
    responses(
        (status = 200, description = "Static welcome message", body = WelcomeMessage)
    )
)]
pub async fn root() -> Json<WelcomeMessage> {
    Json(WelcomeMessage {
        message: WELCOME_MESSAGE.to_string(),
    })
}

/// Generate a story and store it
#[utoipa::path(
    post,
    path = "/generate",
    tag = "stories",
    request_body = StoryRequest,
    responses(
        (status = 200, description = "Generated story", body = StoryResponse),
        (status = 422, description = "Malformed or non-JSON request body", body = ValidationErrorResponse),
        (status = 500, description = "Generation or storage failed", body = ErrorDetail)
    )
)]
pub async fn generate_story(
    State(service): State<Arc<StoryService>>,
    ValidatedJson(request): ValidatedJson<StoryRequest>,
) -> StoryResult<Json<StoryResponse>> {
    let story = service.generate_and_save_story(request).await?;
    Ok(Json(story))
}

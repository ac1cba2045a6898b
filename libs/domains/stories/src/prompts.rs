use crate::models::{Participant, StoryRequest};

/// Fixed system prompt for every generation
pub const SYSTEM_PROMPT: &str = "You are 'Event Horizon', an advanced AI storyteller. Generate a creative, detailed, and immersive sci-fi story based on the user's inputs. Adhere to the requested genre, time period, characters, and reading effort level. The story must be a complete narrative with a beginning, middle, and end, NOT a summary. Aim for a length appropriate to the complexity, typically 400-800 words unless specified otherwise. You MUST respond with a VALID JSON object matching the output schema. Ensure the 'full_text' field contains the entire story, not just a snippet.";

const FIRST_CHAPTER_INSTRUCTION: &str = "Write ONLY the first chapter of a story";
const FULL_STORY_INSTRUCTION: &str = "Write a complete, detailed story";

/// One `- archetype[: description]` line per participant
pub fn render_participants(participants: &[Participant]) -> String {
    participants
        .iter()
        .map(|p| match p.custom_desc.as_deref().filter(|d| !d.is_empty()) {
            Some(desc) => format!("- {}: {}", p.archetype, desc),
            None => format!("- {}", p.archetype),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Builds the user prompt for a story request
pub fn build_prompt(request: &StoryRequest) -> String {
    let chapter_instruction = if request.create_only_first_chapter {
        FIRST_CHAPTER_INSTRUCTION
    } else {
        FULL_STORY_INSTRUCTION
    };

    let spark_detail = request
        .narrative_spark
        .custom_spark
        .as_deref()
        .filter(|spark| !spark.is_empty())
        .map(|spark| format!("- {}", spark))
        .unwrap_or_default();

    format!(
        "{chapter_instruction} based on these parameters:\n\
         Genres: {genres}\n\
         Time Period: {time_period}\n\
         Participants:\n\
         {participants}\n\
         Narrative Spark: {starter} {spark_detail}\n\
         \n\
         Reading Effort & Style Instructions:\n\
         {style}\n\
         IMPORTANT: Provide a full, engaging story in the 'full_text' field, not a brief synopsis.",
        genres = request.genres.join(", "),
        time_period = request.time_period,
        participants = render_participants(&request.participants),
        starter = request.narrative_spark.starter,
        style = request.reading_effort.style_instruction(),
    )
}

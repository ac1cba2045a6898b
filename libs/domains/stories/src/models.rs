use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Era in which the story takes place
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum TimePeriod {
    #[serde(rename = "2030s")]
    NearFuture,
    #[serde(rename = "2150s")]
    FarFuture,
    #[serde(rename = "3000+")]
    DistantFuture,
    #[serde(rename = "End of Time")]
    EndOfTime,
}

impl TimePeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimePeriod::NearFuture => "2030s",
            TimePeriod::FarFuture => "2150s",
            TimePeriod::DistantFuture => "3000+",
            TimePeriod::EndOfTime => "End of Time",
        }
    }
}

impl std::fmt::Display for TimePeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Desired reading level and complexity of the prose
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ToSchema)]
pub enum ReadingEffort {
    #[serde(rename = "Level 1 (Quick-Read / Light)")]
    Light,
    #[default]
    #[serde(rename = "Level 2 (Standard / Balanced)")]
    Standard,
    #[serde(rename = "Level 3 (Deep / Immersive)")]
    Deep,
    #[serde(rename = "Level 4 (Technical / Hard)")]
    Technical,
}

impl ReadingEffort {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReadingEffort::Light => "Level 1 (Quick-Read / Light)",
            ReadingEffort::Standard => "Level 2 (Standard / Balanced)",
            ReadingEffort::Deep => "Level 3 (Deep / Immersive)",
            ReadingEffort::Technical => "Level 4 (Technical / Hard)",
        }
    }

    /// Style guidance handed to the model for this level
    pub fn style_instruction(&self) -> &'static str {
        match self {
            ReadingEffort::Light => {
                "Use a 5th-grade reading level. Keep sentences under 15 words. Avoid technical jargon; explain sci-fi concepts simply. Focus on dialogue and action."
            }
            ReadingEffort::Standard => {
                "Use a high-school reading level. Mix short and long sentences. Use common sci-fi terms without over-explaining or getting too technical."
            }
            ReadingEffort::Deep => {
                "Use a university reading level. Employ complex sentence structures and 'Show, Don't Tell' descriptions. Use rich, evocative vocabulary and abstract metaphors."
            }
            ReadingEffort::Technical => {
                "Write with extreme precision. Use dense paragraphs, heavy technical jargon, and complex speculative theories. Assume the reader has a high scientific IQ."
            }
        }
    }
}

impl std::fmt::Display for ReadingEffort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A character in the story
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Participant {
    /// The archetype of the character, e.g. 'The Rebel', 'The Scientist'
    pub archetype: String,
    /// Optional custom description or traits
    #[serde(default)]
    pub custom_desc: Option<String>,
}

/// The inciting incident
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NarrativeSpark {
    /// The initial situation or inciting incident
    pub starter: String,
    /// Optional custom details for the spark
    #[serde(default)]
    pub custom_spark: Option<String>,
}

/// Parameters for one story
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StoryRequest {
    /// Sci-fi subgenres, e.g. 'Cyberpunk', 'Solarpunk'
    pub genres: Vec<String>,
    /// The era in which the story takes place
    pub time_period: TimePeriod,
    /// Characters involved in the story
    pub participants: Vec<Participant>,
    pub narrative_spark: NarrativeSpark,
    /// The desired reading level/complexity of the story
    #[serde(default)]
    pub reading_effort: ReadingEffort,
    /// If true, generate only the first chapter of the story
    #[serde(default)]
    pub create_only_first_chapter: bool,
}

/// Structured output the language model must produce
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, JsonSchema)]
pub struct StoryAIOutput {
    /// The title of the generated story
    pub title: String,
    /// The complete text of the story
    pub full_text: String,
    /// Probability score (0-1) of the scenario being dystopian
    pub dystopia_probability: f64,
}

/// Generated story together with the parameters that produced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StoryResponse {
    /// The title of the generated story
    pub title: String,
    /// The complete text of the story
    pub full_text: String,
    /// Probability score (0-1) of the scenario being dystopian
    pub dystopia_probability: f64,
    /// The parameters used to generate this story
    pub request_params: StoryRequest,
}

impl StoryResponse {
    pub fn new(output: StoryAIOutput, request_params: StoryRequest) -> Self {
        Self {
            title: output.title,
            full_text: output.full_text,
            dystopia_probability: output.dystopia_probability,
            request_params,
        }
    }
}

/// Payload fields stored next to the story text in the vector store
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoryMetadata {
    pub title: String,
    pub genres: Vec<String>,
    pub time_period: TimePeriod,
    pub dystopia_probability: f64,
    pub reading_effort: ReadingEffort,
}

impl StoryMetadata {
    pub fn new(output: &StoryAIOutput, request: &StoryRequest) -> Self {
        Self {
            title: output.title.clone(),
            genres: request.genres.clone(),
            time_period: request.time_period,
            dystopia_probability: output.dystopia_probability,
            reading_effort: request.reading_effort,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_enums_serialize_by_value() {
        assert_eq!(json!(TimePeriod::DistantFuture), json!("3000+"));
        assert_eq!(json!(TimePeriod::EndOfTime), json!("End of Time"));
        assert_eq!(json!(ReadingEffort::Technical), json!("Level 4 (Technical / Hard)"));

        let period: TimePeriod = serde_json::from_value(json!("2150s")).unwrap();
        assert_eq!(period, TimePeriod::FarFuture);
        assert_eq!(period.to_string(), "2150s");
    }

    #[test]
    fn test_unknown_time_period_rejected() {
        assert!(serde_json::from_value::<TimePeriod>(json!("1990s")).is_err());
    }

    #[test]
    fn test_request_defaults() {
        let request: StoryRequest = serde_json::from_value(json!({
            "genres": ["Cyberpunk"],
            "time_period": "2030s",
            "participants": [{"archetype": "The Rebel"}],
            "narrative_spark": {"starter": "A signal from the void"}
        }))
        .unwrap();

        assert_eq!(request.reading_effort, ReadingEffort::Standard);
        assert!(!request.create_only_first_chapter);
        assert_eq!(request.participants[0].custom_desc, None);
        assert_eq!(request.narrative_spark.custom_spark, None);
    }

    #[test]
    fn test_every_level_has_distinct_instruction() {
        let levels = [
            ReadingEffort::Light,
            ReadingEffort::Standard,
            ReadingEffort::Deep,
            ReadingEffort::Technical,
        ];
        let instructions: std::collections::HashSet<_> =
            levels.iter().map(|l| l.style_instruction()).collect();
        assert_eq!(instructions.len(), 4);
        assert!(ReadingEffort::default().style_instruction().contains("high-school"));
    }

    #[test]
    fn test_metadata_stores_enum_values() {
        let request: StoryRequest = serde_json::from_value(json!({
            "genres": ["Solarpunk", "Space Opera"],
            "time_period": "End of Time",
            "participants": [],
            "narrative_spark": {"starter": "The last star flickers"},
            "reading_effort": "Level 3 (Deep / Immersive)"
        }))
        .unwrap();
        let output = StoryAIOutput {
            title: "Afterglow".into(),
            full_text: "...".into(),
            dystopia_probability: 0.4,
        };

        let metadata = serde_json::to_value(StoryMetadata::new(&output, &request)).unwrap();
        assert_eq!(
            metadata,
            json!({
                "title": "Afterglow",
                "genres": ["Solarpunk", "Space Opera"],
                "time_period": "End of Time",
                "dystopia_probability": 0.4,
                "reading_effort": "Level 3 (Deep / Immersive)"
            })
        );
    }

    #[test]
    fn test_response_flattens_output() {
        let request: StoryRequest = serde_json::from_value(json!({
            "genres": [],
            "time_period": "2030s",
            "participants": [],
            "narrative_spark": {"starter": "x"}
        }))
        .unwrap();
        let response = StoryResponse::new(
            StoryAIOutput {
                title: "T".into(),
                full_text: "F".into(),
                dystopia_probability: 1.0,
            },
            request.clone(),
        );

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["title"], "T");
        assert_eq!(value["full_text"], "F");
        assert_eq!(value["request_params"]["time_period"], "2030s");
        assert_eq!(response.request_params, request);
    }
}

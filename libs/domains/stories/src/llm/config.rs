use core_config::{ConfigError, FromEnv, env_or_default, env_parse_optional};

/// OpenAI-compatible chat completion endpoint settings
#[derive(Debug, Clone, PartialEq)]
pub struct LlmConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
    /// Whole-request timeout; `None` waits indefinitely
    pub timeout_secs: Option<u64>,
    pub temperature: Option<f32>,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:1234/v1".to_string(),
            api_key: "lm-studio".to_string(),
            model: "local-model".to_string(),
            timeout_secs: None,
            temperature: None,
        }
    }
}

impl FromEnv for LlmConfig {
    /// Reads LLM_BASE_URL, LLM_API_KEY, LLM_MODEL, LLM_TIMEOUT_SECS and
    /// LLM_TEMPERATURE, falling back to a local LM Studio server.
    fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        Ok(Self {
            base_url: env_or_default("LLM_BASE_URL", &defaults.base_url)
                .trim_end_matches('/')
                .to_string(),
            api_key: env_or_default("LLM_API_KEY", &defaults.api_key),
            model: env_or_default("LLM_MODEL", &defaults.model),
            timeout_secs: env_parse_optional("LLM_TIMEOUT_SECS")?,
            temperature: env_parse_optional("LLM_TEMPERATURE")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VARS: [&str; 5] = [
        "LLM_BASE_URL",
        "LLM_API_KEY",
        "LLM_MODEL",
        "LLM_TIMEOUT_SECS",
        "LLM_TEMPERATURE",
    ];

    #[test]
    fn test_defaults() {
        temp_env::with_vars_unset(VARS, || {
            assert_eq!(LlmConfig::from_env().unwrap(), LlmConfig::default());
        });
    }

    #[test]
    fn test_overrides() {
        temp_env::with_vars(
            [
                ("LLM_BASE_URL", Some("https://api.openai.com/v1/")),
                ("LLM_API_KEY", Some("sk-test")),
                ("LLM_MODEL", Some("gpt-4o-mini")),
                ("LLM_TIMEOUT_SECS", Some("120")),
                ("LLM_TEMPERATURE", Some("0.8")),
            ],
            || {
                let config = LlmConfig::from_env().unwrap();
                assert_eq!(config.base_url, "https://api.openai.com/v1");
                assert_eq!(config.api_key, "sk-test");
                assert_eq!(config.model, "gpt-4o-mini");
                assert_eq!(config.timeout_secs, Some(120));
                assert_eq!(config.temperature, Some(0.8));
            },
        );
    }

    #[test]
    fn test_bad_timeout_fails() {
        temp_env::with_var("LLM_TIMEOUT_SECS", Some("-1"), || {
            let err = LlmConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("LLM_TIMEOUT_SECS"));
        });
    }
}

//! Configuration file schema

use aer_domain::VotingConfig;
use serde::{Deserialize, Serialize};

/// Model/provider settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelSettings {
    /// Model identifier sent to the provider
    pub name: String,
    /// OpenAI-compatible API base URL
    pub base_url: String,
    /// Environment variable holding the API key
    pub api_key_env: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            name: "deepseek-chat".to_string(),
            base_url: "https://api.deepseek.com".to_string(),
            api_key_env: "AER_API_KEY".to_string(),
            timeout_secs: 120,
        }
    }
}

/// Batch run settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSettings {
    /// Documents presented per question
    pub top_k: usize,
    /// Process only the first N questions
    pub limit: Option<usize>,
    /// In-flight sampling requests per question (None = sequential)
    pub max_concurrency: Option<usize>,
    /// Character cap for raw responses in detail records
    pub response_char_cap: Option<usize>,
    /// Where to write the results document
    pub results_path: String,
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            top_k: 10,
            limit: None,
            max_concurrency: None,
            response_char_cap: None,
            results_path: "results.json".to_string(),
        }
    }
}

/// Complete file configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub model: ModelSettings,
    pub voting: VotingConfig,
    pub run: RunSettings,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FileConfig::default();
        assert_eq!(config.model.name, "deepseek-chat");
        assert_eq!(config.voting.num_samples, 7);
        assert_eq!(config.run.top_k, 10);
        assert!(config.run.limit.is_none());
    }

    #[test]
    fn test_deserialize_partial_toml_keeps_defaults() {
        use figment::providers::{Format, Serialized, Toml};

        let config: FileConfig = figment::Figment::new()
            .merge(Serialized::defaults(FileConfig::default()))
            .merge(Toml::string(
                r#"
                [voting]
                num_samples = 5
                vote_threshold = 3
            "#,
            ))
            .extract()
            .unwrap();

        assert_eq!(config.voting.num_samples, 5);
        assert_eq!(config.voting.vote_threshold, 3);
        // untouched sections keep their defaults
        assert_eq!(config.voting.strict_threshold, 5);
        assert_eq!(config.model.name, "deepseek-chat");
    }
}

//! Service configuration
//!
//! Loaded from an optional YAML file, with environment-variable overrides for
//! the values that should not live on disk (API key) or that deployments
//! commonly tweak (port).

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("invalid {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Supported LLM providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LlmProvider {
    OpenAI,
    Ollama,
    Gemini,
}

/// Settings for the natural-language-to-SQL collaborator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NlqConfig {
    /// The LLM provider to use
    pub provider: LlmProvider,
    /// Model name (e.g. "gpt-4o-mini", "llama3")
    pub model: String,
    /// API key (optional; can come from ASKEBS_API_KEY)
    #[serde(default)]
    pub api_key: Option<String>,
    /// Base URL override (required for self-hosted Ollama, optional otherwise)
    #[serde(default)]
    pub api_base_url: Option<String>,
    /// System prompt override; the default constrains the model to the
    /// recognized clause catalog
    #[serde(default)]
    pub system_prompt: Option<String>,
}

/// Top-level service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// HTTP listen port
    #[serde(default = "default_port")]
    pub port: u16,
    /// Whole-pipeline timeout per submitted question, in seconds
    #[serde(default = "default_query_timeout_secs")]
    pub query_timeout_secs: u64,
    /// NLQ settings; when absent, only questions that are already SQL are
    /// accepted
    #[serde(default)]
    pub nlq: Option<NlqConfig>,
}

fn default_port() -> u16 {
    8080
}

fn default_query_timeout_secs() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            query_timeout_secs: default_query_timeout_secs(),
            nlq: None,
        }
    }
}

impl Config {
    /// Load from a YAML file, then apply environment overrides
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        let mut config: Config = serde_yaml::from_str(&raw)?;
        config.apply_env()?;
        Ok(config)
    }

    /// Defaults plus environment overrides (no config file)
    pub fn from_env() -> ConfigResult<Self> {
        let mut config = Config::default();
        config.apply_env()?;
        Ok(config)
    }

    fn apply_env(&mut self) -> ConfigResult<()> {
        if let Ok(port) = std::env::var("ASKEBS_PORT") {
            self.port = port
                .parse()
                .map_err(|_| ConfigError::InvalidValue {
                    name: "ASKEBS_PORT",
                    value: port,
                })?;
        }
        if let Ok(key) = std::env::var("ASKEBS_API_KEY") {
            if let Some(nlq) = self.nlq.as_mut() {
                nlq.api_key = Some(key);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.query_timeout_secs, 30);
        assert!(config.nlq.is_none());
    }

    #[test]
    fn test_parse_yaml() {
        let raw = "
port: 9090
nlq:
  provider: ollama
  model: llama3
  api_base_url: http://localhost:11434
";
        let config: Config = serde_yaml::from_str(raw).unwrap();
        assert_eq!(config.port, 9090);
        assert_eq!(config.query_timeout_secs, 30);
        let nlq = config.nlq.unwrap();
        assert_eq!(nlq.provider, LlmProvider::Ollama);
        assert_eq!(nlq.model, "llama3");
        assert!(nlq.api_key.is_none());
    }
}

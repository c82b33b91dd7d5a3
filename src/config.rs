//! Configuration file handling.
//!
//! This module handles loading and merging configuration from
//! `.emowell.toml` files.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Server settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Model settings.
    #[serde(default)]
    pub model: ModelConfig,
}

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

fn default_port() -> u16 {
    8000
}

/// LLM generation settings.
///
/// These are the fixed generation parameters used for every feedback
/// request; there is no per-request tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Groq model name.
    #[serde(default = "default_model")]
    pub name: String,

    /// Base URL of the OpenAI-compatible Groq API.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Temperature for generation.
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Nucleus sampling parameter.
    #[serde(default = "default_top_p")]
    pub top_p: f32,

    /// Maximum tokens in the completion.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            name: default_model(),
            api_url: default_api_url(),
            temperature: default_temperature(),
            top_p: default_top_p(),
            max_tokens: default_max_tokens(),
            timeout_seconds: default_timeout(),
        }
    }
}

fn default_model() -> String {
    "qwen/qwen3-32b".to_string()
}

fn default_api_url() -> String {
    "https://api.groq.com/openai/v1".to_string()
}

fn default_temperature() -> f32 {
    0.7
}

fn default_top_p() -> f32 {
    1.0
}

fn default_max_tokens() -> u32 {
    4096
}

fn default_timeout() -> u64 {
    60
}

impl Config {
    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Try to load configuration from the default location.
    ///
    /// Returns `Ok(None)` if the file doesn't exist, `Err` if it exists but can't be parsed.
    pub fn load_default() -> Result<Option<Self>> {
        let default_path = Path::new(".emowell.toml");

        if default_path.exists() {
            Ok(Some(Self::load(default_path)?))
        } else {
            Ok(None)
        }
    }

    /// Merge this configuration with CLI arguments.
    ///
    /// CLI arguments take precedence over config file settings; optional
    /// arguments only override when explicitly provided.
    pub fn merge_with_args(&mut self, args: &crate::cli::Args) {
        if let Some(port) = args.port {
            self.server.port = port;
        }

        if let Some(ref model) = args.model {
            self.model.name = model.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.model.name, "qwen/qwen3-32b");
        assert_eq!(config.model.temperature, 0.7);
        assert_eq!(config.model.top_p, 1.0);
        assert_eq!(config.model.max_tokens, 4096);
    }

    #[test]
    fn test_parse_config() {
        let toml_content = r#"
[server]
port = 9000

[model]
name = "llama-3.1-8b-instant"
temperature = 0.3
"#;

        let config: Config = toml::from_str(toml_content).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.model.name, "llama-3.1-8b-instant");
        assert_eq!(config.model.temperature, 0.3);
        // Unspecified fields keep their defaults.
        assert_eq!(config.model.max_tokens, 4096);
    }

    #[test]
    fn test_merge_with_args() {
        use crate::cli::Args;

        let mut config = Config::default();
        let args = Args {
            port: Some(9000),
            bind: "127.0.0.1".to_string(),
            database_url: "postgres://localhost/emowell".to_string(),
            groq_api_key: "gsk_test".to_string(),
            model: Some("llama-3.1-8b-instant".to_string()),
            config: None,
            verbose: false,
            quiet: false,
        };

        config.merge_with_args(&args);
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.model.name, "llama-3.1-8b-instant");
    }
}

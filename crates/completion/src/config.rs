//! Completion client configuration from environment variables.

use std::env;
use thiserror::Error;

/// Default Groq OpenAI-compatible base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Default model to use.
pub const DEFAULT_MODEL: &str = "llama-3.1-8b-instant";

/// Default upper bound on completion length.
pub const DEFAULT_MAX_TOKENS: u32 = 1024;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: String, value: String },
}

/// Completion client configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionConfig {
    /// API key sent as a bearer token.
    pub api_key: String,
    /// Model name (e.g., "llama-3.1-8b-instant").
    pub model: String,
    /// Base URL for the API, without the `/chat/completions` suffix.
    pub base_url: String,
    /// Sampling temperature; 0 keeps classification and extraction stable.
    pub temperature: f32,
    pub max_tokens: u32,
}

impl CompletionConfig {
    /// Configuration with defaults for everything except the key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            temperature: 0.0,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Required:
    /// - `GROQ_API_KEY`: API key for the completion endpoint
    ///
    /// Optional:
    /// - `PANTRY_CHEF_MODEL`: Model name (default: "llama-3.1-8b-instant")
    /// - `PANTRY_CHEF_BASE_URL`: API base URL (default: Groq)
    /// - `PANTRY_CHEF_TEMPERATURE`: Sampling temperature (default: 0.0)
    /// - `PANTRY_CHEF_MAX_TOKENS`: Completion length cap (default: 1024)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as `from_env`, reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_key = lookup("GROQ_API_KEY")
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("GROQ_API_KEY".to_string()))?;

        let mut config = Self::new(api_key);

        if let Some(model) = lookup("PANTRY_CHEF_MODEL") {
            config.model = model;
        }
        if let Some(base_url) = lookup("PANTRY_CHEF_BASE_URL") {
            config.base_url = base_url;
        }
        if let Some(raw) = lookup("PANTRY_CHEF_TEMPERATURE") {
            config.temperature = parse_var("PANTRY_CHEF_TEMPERATURE", &raw)?;
        }
        if let Some(raw) = lookup("PANTRY_CHEF_MAX_TOKENS") {
            config.max_tokens = parse_var("PANTRY_CHEF_MAX_TOKENS", &raw)?;
        }

        Ok(config)
    }

    /// Full URL of the chat-completions endpoint
    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
        name: name.to_string(),
        value: raw.to_string(),
    })
}

use std::env;

use serde::{Deserialize, Serialize};

fn default_model() -> String {
    "gpt-3.5-turbo".to_string()
}

fn default_api_url() -> String {
    "https://api.openai.com/v1/chat/completions".to_string()
}

fn default_max_tokens() -> u32 {
    1000
}

fn default_temperature() -> f32 {
    0.7
}

/// Token budget bounds accepted by the request builder.
pub const MIN_MAX_TOKENS: u32 = 100;
pub const MAX_MAX_TOKENS: u32 = 1000;

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct TranslatorConfig {
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Clamped into [`MIN_MAX_TOKENS`]..=[`MAX_MAX_TOKENS`] at payload build.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Non-zero for natural phrasing.
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

impl TranslatorConfig {
    pub fn new() -> Self {
        let model = env::var("TRANSLATOR_MODEL").unwrap_or_else(|_| default_model());
        let api_url = env::var("TRANSLATOR_API_URL").unwrap_or_else(|_| default_api_url());

        let max_tokens = env::var("TRANSLATOR_MAX_TOKENS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_max_tokens);

        let temperature = env::var("TRANSLATOR_TEMPERATURE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_temperature);

        Self {
            model,
            api_url,
            max_tokens,
            temperature,
        }
    }
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            api_url: default_api_url(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
        }
    }
}

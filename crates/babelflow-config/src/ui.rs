use std::env;

use serde::{Deserialize, Serialize};

fn default_source_language() -> String {
    "Auto".to_string()
}

fn default_target_language() -> String {
    "English".to_string()
}

fn default_theme() -> String {
    "system".to_string()
}

fn default_font_size() -> f64 {
    14.0
}

/// Persisted user preferences mirrored into the pickers at startup.
#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct UiConfig {
    #[serde(default = "default_source_language")]
    pub default_source_language: String,
    #[serde(default = "default_target_language")]
    pub default_target_language: String,
    /// "system", "light" or "dark"
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_font_size")]
    pub font_size: f64,
}

impl UiConfig {
    pub fn new() -> Self {
        let default_source_language =
            env::var("DEFAULT_SOURCE_LANGUAGE").unwrap_or_else(|_| default_source_language());
        let default_target_language =
            env::var("DEFAULT_TARGET_LANGUAGE").unwrap_or_else(|_| default_target_language());

        Self {
            default_source_language,
            default_target_language,
            theme: default_theme(),
            font_size: default_font_size(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_source_language: default_source_language(),
            default_target_language: default_target_language(),
            theme: default_theme(),
            font_size: default_font_size(),
        }
    }
}

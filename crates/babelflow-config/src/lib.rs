use std::env;

use serde::{Deserialize, Serialize};

use self::speech::SpeechConfig;
use self::translator::TranslatorConfig;
use self::ui::UiConfig;

pub mod speech;
pub mod translator;
pub mod ui;

#[derive(Serialize, Deserialize)]
pub struct Config {
    pub translator: TranslatorConfig,
    pub speech: SpeechConfig,
    pub ui: UiConfig,

    /// HTTP client timeout for translation requests
    pub request_timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            translator: TranslatorConfig::default(),
            speech: SpeechConfig::default(),
            ui: UiConfig::default(),
            request_timeout_seconds: 60,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        let request_timeout_seconds = env::var("REQUEST_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(60); // URLSession-equivalent default

        Config {
            translator: TranslatorConfig::new(),
            speech: SpeechConfig::default(),
            ui: UiConfig::new(),

            request_timeout_seconds,
        }
    }
}

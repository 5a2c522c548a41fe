use serde::{Deserialize, Serialize};

fn default_partial_results() -> bool {
    true
}

fn default_max_recognition_retries() -> u32 {
    3
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct SpeechConfig {
    /// Stream partial transcripts into the input box while recording
    #[serde(default = "default_partial_results")]
    pub partial_results: bool,
    /// Bounded retry budget for the recognizer; translation is never retried
    #[serde(default = "default_max_recognition_retries")]
    pub max_recognition_retries: u32,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            partial_results: default_partial_results(),
            max_recognition_retries: default_max_recognition_retries(),
        }
    }
}

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use babelflow_config::Config;
use babelflow_core::Language;
use babelflow_secret::SecretStore;
use tokio::sync::RwLock;

pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    pub secrets: Arc<dyn SecretStore>,

    pub source_language: RwLock<Language>,
    pub target_language: RwLock<Language>,
    /// Kept across failures so the user can retry without retyping.
    pub input_text: RwLock<String>,
    pub translated_text: RwLock<String>,

    /// One recognizer at a time; set on start, cleared on stop or when the
    /// transcript stream ends.
    pub dictation_active: AtomicBool,
}

impl AppState {
    pub fn new(config: Config, secrets: Arc<dyn SecretStore>) -> Self {
        let source = Language::from_name(&config.ui.default_source_language);
        let mut target = Language::from_name(&config.ui.default_target_language);

        // Auto is never a valid target.
        if target.is_auto() {
            tracing::warn!("default target language was Auto, using English");
            target = Language::English;
        }

        Self {
            config: Arc::new(RwLock::new(config)),
            secrets,
            source_language: RwLock::new(source),
            target_language: RwLock::new(target),
            input_text: RwLock::new(String::new()),
            translated_text: RwLock::new(String::new()),
            dictation_active: AtomicBool::new(false),
        }
    }
}

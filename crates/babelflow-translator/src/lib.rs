use babelflow_core::Language;

pub mod client;
pub mod envelope;
pub mod error;
pub mod prompt;

pub use client::OpenAiTranslator;
pub use error::TranslateError;

/// Translation provider interface
///
/// The secret is borrowed per call; implementations must not cache it.
#[async_trait::async_trait]
pub trait Translator: Send + Sync {
    /// Translate text from source to target language
    async fn translate(
        &self,
        text: &str,
        from: Language,
        to: Language,
        secret: &str,
    ) -> Result<String, TranslateError>;
}

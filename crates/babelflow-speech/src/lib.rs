use kanal::AsyncSender;

/// A recognized chunk of speech. Partial transcripts refine the input box
/// while recording; the final transcript enters the translation path.
#[derive(Debug, Clone)]
pub struct Transcript {
    pub text: String,
    pub is_final: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum SpeechError {
    #[error("speech engine unavailable: {0}")]
    EngineUnavailable(String),

    #[error("recognition failed: {0}")]
    RecognitionFailed(String),

    #[error("not recording")]
    NotRecording,
}

/// Text-to-speech playback. Locale tags come pre-mapped from the language
/// mapper ("fr-FR", not "French").
#[async_trait::async_trait]
pub trait SpeechOutput: Send + Sync {
    async fn speak(&self, text: &str, locale: &str) -> Result<(), SpeechError>;
    async fn pause(&self);
    async fn resume(&self);
    async fn stop(&self);
}

/// Speech-to-text capture. Transcripts stream into `sink` until `stop`.
///
/// Implementations own their retry policy (bounded by
/// `SpeechConfig::max_recognition_retries`); callers never retry.
#[async_trait::async_trait]
pub trait SpeechInput: Send + Sync {
    async fn start(&self, locale: &str, sink: AsyncSender<Transcript>) -> Result<(), SpeechError>;
    async fn stop(&self);
}

/// Playback stub for headless runs and tests; logs instead of speaking.
pub struct NullSpeechOutput;

#[async_trait::async_trait]
impl SpeechOutput for NullSpeechOutput {
    async fn speak(&self, text: &str, locale: &str) -> Result<(), SpeechError> {
        tracing::info!("speak [{}]: {}", locale, text);
        Ok(())
    }

    async fn pause(&self) {}
    async fn resume(&self) {}
    async fn stop(&self) {}
}

/// Capture stub; reports the engine as unavailable.
pub struct NullSpeechInput;

#[async_trait::async_trait]
impl SpeechInput for NullSpeechInput {
    async fn start(
        &self,
        _locale: &str,
        _sink: AsyncSender<Transcript>,
    ) -> Result<(), SpeechError> {
        Err(SpeechError::EngineUnavailable(
            "no speech engine configured".to_string(),
        ))
    }

    async fn stop(&self) {}
}

use serde::{Deserialize, Serialize};

/// Events flowing between the UI layer and the backend.
///
/// Language fields carry human-readable names ("French", "Auto"); the
/// backend maps them to provider codes and speech locales.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Text submitted for translation, either typed or dictated.
    Submit {
        text: String,
        source: TextSource,
    },
    SetSourceLanguage(String),
    SetTargetLanguage(String),
    /// Swap source/target; also exchanges input and translated text.
    SwapLanguages,
    ClearText,

    SpeakInput,
    SpeakTranslation,
    PauseSpeech,
    ResumeSpeech,
    StopSpeech,

    StartDictation,
    StopDictation,
    /// Streaming transcript from the recognizer; final transcripts re-enter
    /// the submission path as `TextSource::Speech`.
    DictationTranscript {
        text: String,
        is_final: bool,
    },

    SetSecret(String),
    ClearSecret,

    /// Translation result for the UI output area.
    ShowTranslation {
        text: String,
    },
    /// Failure message shown in place of translated text; input is kept.
    ShowError {
        message: String,
    },
    /// The current secret is missing or rejected; prompt for setup.
    SecretRequired,

    BackendReady,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextSource {
    Manual,
    Speech,
}

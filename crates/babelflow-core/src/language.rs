use serde::{Deserialize, Serialize};

/// The closed language set offered by the pickers.
///
/// `Auto` is only meaningful as a *source* language ("let the model detect
/// it"); it is never a valid translation target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    Auto,
    English,
    Chinese,
    Spanish,
    French,
    German,
    Japanese,
    Korean,
    Russian,
    Italian,
    Portuguese,
}

impl Language {
    /// Picker order: `Auto` first, then the concrete languages.
    pub const ALL: [Language; 11] = [
        Language::Auto,
        Language::English,
        Language::Chinese,
        Language::Spanish,
        Language::French,
        Language::German,
        Language::Japanese,
        Language::Korean,
        Language::Russian,
        Language::Italian,
        Language::Portuguese,
    ];

    /// Parse a human-readable name, case-insensitively.
    ///
    /// Unknown names fall back to `English`: prompt construction and speech
    /// playback must always proceed with some value.
    pub fn from_name(name: &str) -> Language {
        match name.to_lowercase().as_str() {
            "auto" => Language::Auto,
            "english" => Language::English,
            "chinese" => Language::Chinese,
            "spanish" => Language::Spanish,
            "french" => Language::French,
            "german" => Language::German,
            "japanese" => Language::Japanese,
            "korean" => Language::Korean,
            "russian" => Language::Russian,
            "italian" => Language::Italian,
            "portuguese" => Language::Portuguese,
            _ => Language::English,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Language::Auto => "Auto",
            Language::English => "English",
            Language::Chinese => "Chinese",
            Language::Spanish => "Spanish",
            Language::French => "French",
            Language::German => "German",
            Language::Japanese => "Japanese",
            Language::Korean => "Korean",
            Language::Russian => "Russian",
            Language::Italian => "Italian",
            Language::Portuguese => "Portuguese",
        }
    }

    /// Short ISO 639-1 code used in translation prompts.
    ///
    /// `Auto` has no code of its own; the prompt omits the source language
    /// entirely, so English is returned only as the documented fallback.
    pub fn provider_code(&self) -> &'static str {
        match self {
            Language::Auto | Language::English => "en",
            Language::Chinese => "zh",
            Language::Spanish => "es",
            Language::French => "fr",
            Language::German => "de",
            Language::Japanese => "ja",
            Language::Korean => "ko",
            Language::Russian => "ru",
            Language::Italian => "it",
            Language::Portuguese => "pt",
        }
    }

    /// Full locale tag for the speech synthesizer and recognizer.
    pub fn speech_locale(&self) -> &'static str {
        match self {
            Language::Auto | Language::English => "en-US",
            Language::Chinese => "zh-CN",
            Language::Spanish => "es-ES",
            Language::French => "fr-FR",
            Language::German => "de-DE",
            Language::Japanese => "ja-JP",
            Language::Korean => "ko-KR",
            Language::Russian => "ru-RU",
            Language::Italian => "it-IT",
            Language::Portuguese => "pt-PT",
        }
    }

    pub fn is_auto(&self) -> bool {
        matches!(self, Language::Auto)
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

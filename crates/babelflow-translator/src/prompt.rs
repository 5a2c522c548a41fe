use babelflow_config::translator::{MAX_MAX_TOKENS, MIN_MAX_TOKENS, TranslatorConfig};
use babelflow_core::Language;
use serde::Serialize;

const SYSTEM_PROMPT: &str = "You are a professional translator.";

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

/// Wire body for the chat-completion endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ChatPayload {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
    pub temperature: f32,
}

/// Build the provider payload for one translation request.
///
/// Pure and deterministic; `text` is assumed non-empty (the session checks
/// before dispatch) and `target` is never `Auto`.
pub fn build_payload(
    text: &str,
    source: Language,
    target: Language,
    config: &TranslatorConfig,
) -> ChatPayload {
    let to = target.provider_code();

    let directive = if source.is_auto() {
        format!("Detect the source language and translate the following text to {to}:")
    } else {
        let from = source.provider_code();
        format!("Translate the following text from {from} to {to}:")
    };

    let user_prompt = format!(
        "{directive}\n{text}\n\nOnly return the translated text, without any additional context or explanation."
    );

    ChatPayload {
        model: config.model.clone(),
        messages: vec![
            ChatMessage {
                role: "system".to_string(),
                content: SYSTEM_PROMPT.to_string(),
            },
            ChatMessage {
                role: "user".to_string(),
                content: user_prompt,
            },
        ],
        max_tokens: config.max_tokens.clamp(MIN_MAX_TOKENS, MAX_MAX_TOKENS),
        temperature: config.temperature,
    }
}

use serde::Deserialize;

use crate::error::TranslateError;

/// Provider response envelope: `{choices:[{message:{content}}]}`.
#[derive(Debug, Deserialize)]
pub struct ChatCompletionReply {
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: Message,
}

#[derive(Debug, Deserialize)]
pub struct Message {
    pub content: String,
}

/// Extract the translated text from a raw response body.
///
/// Stateless; staleness of the originating request is the caller's problem.
pub fn parse_reply(body: &str) -> Result<String, TranslateError> {
    let reply: ChatCompletionReply =
        serde_json::from_str(body).map_err(|_| TranslateError::MalformedResponse)?;

    let content = reply
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content)
        .ok_or(TranslateError::MalformedResponse)?;

    Ok(content.trim().to_string())
}

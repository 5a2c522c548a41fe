use std::time::Duration;

use babelflow_config::translator::TranslatorConfig;
use babelflow_core::Language;
use reqwest::StatusCode;

use crate::envelope::parse_reply;
use crate::error::TranslateError;
use crate::prompt::build_payload;
use crate::Translator;

/// Chat-completion transport for the OpenAI-style endpoint.
///
/// One POST per call, no retries; cancellation and staleness are handled by
/// the session that owns the request.
pub struct OpenAiTranslator {
    client: reqwest::Client,
    config: TranslatorConfig,
}

impl OpenAiTranslator {
    pub fn new(config: TranslatorConfig, timeout: Duration) -> Result<Self, TranslateError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, config })
    }
}

#[async_trait::async_trait]
impl Translator for OpenAiTranslator {
    async fn translate(
        &self,
        text: &str,
        from: Language,
        to: Language,
        secret: &str,
    ) -> Result<String, TranslateError> {
        if secret.is_empty() {
            return Err(TranslateError::MissingSecret);
        }

        let payload = build_payload(text, from, to, &self.config);

        let response = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(secret)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(TranslateError::Unauthorized);
        }
        if !status.is_success() {
            return Err(TranslateError::Http(status.as_u16()));
        }

        let body = response.text().await?;
        parse_reply(&body)
    }
}

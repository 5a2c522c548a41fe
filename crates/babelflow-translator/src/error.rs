/// Failure taxonomy for one translation request.
///
/// Cancellation is not represented here: a superseded request is dropped by
/// the session before its outcome is ever surfaced.
#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    /// Local short-circuit; no network call was attempted.
    #[error("Please enter text to translate.")]
    EmptyInput,

    /// No secret configured; no network call was attempted.
    #[error("No API key is configured. Please add one in settings.")]
    MissingSecret,

    /// HTTP 401: the secret was rejected by the provider.
    #[error("The API key was rejected. Please check it in settings.")]
    Unauthorized,

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Translation service returned status {0}")]
    Http(u16),

    #[error("Could not parse the translation response.")]
    MalformedResponse,
}

impl TranslateError {
    /// Whether the UI should prompt for secret (re)configuration, beyond
    /// showing the error message.
    pub fn needs_secret_setup(&self) -> bool {
        matches!(
            self,
            TranslateError::MissingSecret | TranslateError::Unauthorized
        )
    }
}

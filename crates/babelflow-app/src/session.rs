use std::sync::{Arc, Mutex};

use babelflow_core::preprocess::normalize_input;
use babelflow_core::Language;
use babelflow_translator::{TranslateError, Translator};
use babelflow_types::AppEvent;
use kanal::AsyncSender;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::state::AppState;

/// One in-flight translation request.
///
/// The token is advisory (the HTTP call may run to completion in the
/// background); the id comparison in [`TranslationSession::finish`] is what
/// actually keeps a stale result off the screen.
#[derive(Clone)]
struct ActiveRequest {
    id: Uuid,
    cancel: CancellationToken,
}

/// Per-session translation orchestrator.
///
/// Holds the single-slot "current request" register: a new submission
/// cancels and replaces whatever is in the slot, and only the completion
/// whose id still matches the slot may reach the UI. Latest-submitted wins
/// regardless of completion order.
pub struct TranslationSession {
    translator: Arc<dyn Translator>,
    state: Arc<AppState>,
    events: AsyncSender<AppEvent>,
    active: Mutex<Option<ActiveRequest>>,
}

impl TranslationSession {
    pub fn new(
        translator: Arc<dyn Translator>,
        state: Arc<AppState>,
        events: AsyncSender<AppEvent>,
    ) -> Self {
        Self {
            translator,
            state,
            events,
            active: Mutex::new(None),
        }
    }

    /// Submit text for translation, superseding any in-flight request.
    ///
    /// Empty input and a missing secret short-circuit locally; neither
    /// touches the network or the active-request slot.
    pub async fn submit(
        self: &Arc<Self>,
        text: &str,
        from: Language,
        to: Language,
    ) -> anyhow::Result<()> {
        let text = normalize_input(text);
        if text.is_empty() {
            self.fail(&TranslateError::EmptyInput).await?;
            return Ok(());
        }

        // Fetched once per request, never cached.
        let secret = self.state.secrets.get().unwrap_or_default();
        if secret.is_empty() {
            self.fail(&TranslateError::MissingSecret).await?;
            return Ok(());
        }

        let request = ActiveRequest {
            id: Uuid::new_v4(),
            cancel: CancellationToken::new(),
        };

        {
            let mut active = self.active.lock().expect("session lock poisoned");
            if let Some(previous) = active.replace(request.clone()) {
                tracing::debug!(superseded = %previous.id, "cancelling in-flight request");
                previous.cancel.cancel();
            }
        }

        tracing::info!(request = %request.id, %from, %to, "translation requested");

        let session = Arc::clone(self);
        tokio::spawn(async move {
            let outcome = tokio::select! {
                _ = request.cancel.cancelled() => {
                    tracing::debug!(request = %request.id, "request cancelled in flight");
                    return;
                }
                outcome = session.translator.translate(&text, from, to, &secret) => outcome,
            };

            session.finish(request.id, outcome).await;
        });

        Ok(())
    }

    /// Apply a completion if and only if its request is still the active one.
    async fn finish(&self, id: Uuid, outcome: Result<String, TranslateError>) {
        let still_active = {
            let mut active = self.active.lock().expect("session lock poisoned");
            match active.as_ref() {
                Some(request) if request.id == id => {
                    active.take();
                    true
                }
                _ => false,
            }
        };

        if !still_active {
            tracing::debug!(request = %id, "dropping stale completion");
            return;
        }

        match outcome {
            Ok(text) => {
                *self.state.translated_text.write().await = text.clone();
                if let Err(e) = self.events.send(AppEvent::ShowTranslation { text }).await {
                    tracing::warn!("ui channel closed, dropping translation: {e}");
                }
            }
            Err(err) => {
                if let Err(e) = self.fail(&err).await {
                    tracing::warn!("ui channel closed, dropping failure report: {e}");
                }
            }
        }
    }

    async fn fail(&self, err: &TranslateError) -> anyhow::Result<()> {
        tracing::warn!("translation failed: {err}");
        if err.needs_secret_setup() {
            self.events.send(AppEvent::SecretRequired).await?;
        }
        self.events
            .send(AppEvent::ShowError {
                message: err.to_string(),
            })
            .await?;
        Ok(())
    }
}

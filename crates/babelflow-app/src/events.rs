use std::sync::Arc;

use babelflow_core::Language;
use babelflow_speech::{SpeechInput, SpeechOutput};
use babelflow_translator::Translator;
use babelflow_types::AppEvent;
use kanal::{AsyncReceiver, AsyncSender};
use tokio_util::sync::CancellationToken;

use crate::session::TranslationSession;
use crate::state::AppState;

pub mod speech;
pub mod submit;

use speech::{handle_speak, handle_start_dictation, handle_transcript};
use submit::handle_submit;

/// App's main loop
pub async fn event_loop(
    state: Arc<AppState>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    loopback_tx: AsyncSender<AppEvent>,
    translator: Arc<dyn Translator>,
    speech_out: Arc<dyn SpeechOutput>,
    speech_in: Arc<dyn SpeechInput>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let session = Arc::new(TranslationSession::new(
        translator,
        state.clone(),
        app_to_ui_tx.clone(),
    ));

    app_to_ui_tx.send(AppEvent::BackendReady).await?;

    tracing::info!("event loop started");
    loop {
        let event = tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("event loop shutting down");
                return Ok(());
            }
            event = ui_to_app_rx.recv() => event?,
        };

        handle_event(
            &state,
            &session,
            &speech_out,
            &speech_in,
            &app_to_ui_tx,
            &loopback_tx,
            event,
        )
        .await?;
    }
}

async fn handle_event(
    state: &Arc<AppState>,
    session: &Arc<TranslationSession>,
    speech_out: &Arc<dyn SpeechOutput>,
    speech_in: &Arc<dyn SpeechInput>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    loopback_tx: &AsyncSender<AppEvent>,
    event: AppEvent,
) -> anyhow::Result<()> {
    match event {
        AppEvent::Submit { text, source } => {
            tracing::debug!(?source, "submit: {} chars", text.len());
            handle_submit(state, session, text).await?;
        }

        AppEvent::SetSourceLanguage(name) => {
            *state.source_language.write().await = Language::from_name(&name);
        }
        AppEvent::SetTargetLanguage(name) => {
            let lang = Language::from_name(&name);
            if lang.is_auto() {
                tracing::warn!("ignoring Auto as target language");
            } else {
                *state.target_language.write().await = lang;
            }
        }
        AppEvent::SwapLanguages => {
            handle_swap(state).await;
        }
        AppEvent::ClearText => {
            speech_out.stop().await;
            state.input_text.write().await.clear();
            state.translated_text.write().await.clear();
        }

        AppEvent::SpeakInput => {
            let text = state.input_text.read().await.clone();
            let lang = *state.source_language.read().await;
            handle_speak(speech_out, &text, lang).await;
        }
        AppEvent::SpeakTranslation => {
            let text = state.translated_text.read().await.clone();
            let lang = *state.target_language.read().await;
            handle_speak(speech_out, &text, lang).await;
        }
        AppEvent::PauseSpeech => speech_out.pause().await,
        AppEvent::ResumeSpeech => speech_out.resume().await,
        AppEvent::StopSpeech => speech_out.stop().await,

        AppEvent::StartDictation => {
            handle_start_dictation(state, speech_in, app_to_ui_tx, loopback_tx).await?;
        }
        AppEvent::StopDictation => {
            state
                .dictation_active
                .store(false, std::sync::atomic::Ordering::SeqCst);
            speech_in.stop().await;
        }
        AppEvent::DictationTranscript { text, is_final } => {
            handle_transcript(state, session, app_to_ui_tx, text, is_final).await?;
        }

        AppEvent::SetSecret(secret) => {
            if let Err(e) = state.secrets.set(&secret) {
                tracing::error!("failed to store secret: {e}");
            }
        }
        AppEvent::ClearSecret => {
            if let Err(e) = state.secrets.clear() {
                tracing::error!("failed to clear secret: {e}");
            }
        }

        AppEvent::ShowTranslation { .. }
        | AppEvent::ShowError { .. }
        | AppEvent::SecretRequired
        | AppEvent::BackendReady => {
            // UI-only events, ignore in backend
        }
    }

    Ok(())
}

/// Swap source/target languages and the two text areas, as the arrow button
/// in the original UI does. Auto cannot become a target, so the swap is a
/// no-op while the source is Auto.
async fn handle_swap(state: &Arc<AppState>) {
    let mut source = state.source_language.write().await;
    let mut target = state.target_language.write().await;

    if source.is_auto() {
        tracing::debug!("swap ignored: source is Auto");
        return;
    }

    std::mem::swap(&mut *source, &mut *target);

    let mut input = state.input_text.write().await;
    let mut translated = state.translated_text.write().await;
    if !translated.is_empty() {
        std::mem::swap(&mut *input, &mut *translated);
    }
}

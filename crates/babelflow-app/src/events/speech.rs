use std::sync::atomic::Ordering;
use std::sync::Arc;

use babelflow_core::Language;
use babelflow_speech::{SpeechInput, SpeechOutput, Transcript};
use babelflow_types::AppEvent;
use kanal::AsyncSender;

use crate::session::TranslationSession;
use crate::state::AppState;

pub async fn handle_speak(speech_out: &Arc<dyn SpeechOutput>, text: &str, lang: Language) {
    if text.is_empty() {
        return;
    }
    if let Err(e) = speech_out.speak(text, lang.speech_locale()).await {
        tracing::warn!("speech playback failed: {e}");
    }
}

/// Start the recognizer and bridge its transcript stream back into the
/// event loop as `DictationTranscript` events.
pub async fn handle_start_dictation(
    state: &Arc<AppState>,
    speech_in: &Arc<dyn SpeechInput>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    loopback_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    // One recognizer at a time; a second start while recording is a no-op.
    if state.dictation_active.swap(true, Ordering::SeqCst) {
        tracing::debug!("dictation already running, ignoring start");
        return Ok(());
    }

    let locale = state.source_language.read().await.speech_locale();
    let (tx, rx) = kanal::bounded_async::<Transcript>(32);

    if let Err(e) = speech_in.start(locale, tx).await {
        state.dictation_active.store(false, Ordering::SeqCst);
        tracing::warn!("dictation unavailable: {e}");
        app_to_ui_tx
            .send(AppEvent::ShowError {
                message: e.to_string(),
            })
            .await?;
        return Ok(());
    }

    tracing::info!(%locale, "dictation started");

    let loopback = loopback_tx.clone();
    let state = state.clone();
    tokio::spawn(async move {
        while let Ok(transcript) = rx.recv().await {
            let event = AppEvent::DictationTranscript {
                text: transcript.text,
                is_final: transcript.is_final,
            };
            if loopback.send(event).await.is_err() {
                break;
            }
        }
        state.dictation_active.store(false, Ordering::SeqCst);
    });

    Ok(())
}

/// Partial transcripts refresh the input box; the final transcript enters
/// the same submission path as typed text.
pub async fn handle_transcript(
    state: &Arc<AppState>,
    session: &Arc<TranslationSession>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    text: String,
    is_final: bool,
) -> anyhow::Result<()> {
    if is_final {
        tracing::debug!("final transcript: {} chars", text.len());
        // Let the UI settle the input box on the final text, then submit it
        // exactly as if it had been typed.
        app_to_ui_tx
            .send(AppEvent::DictationTranscript {
                text: text.clone(),
                is_final: true,
            })
            .await?;
        return crate::events::submit::handle_submit(state, session, text).await;
    }

    let stream_partials = {
        let config = state.config.read().await;
        config.speech.partial_results
    };
    if stream_partials {
        *state.input_text.write().await = text.clone();
        app_to_ui_tx
            .send(AppEvent::DictationTranscript {
                text,
                is_final: false,
            })
            .await?;
    }

    Ok(())
}

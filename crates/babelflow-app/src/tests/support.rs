use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use babelflow_config::Config;
use babelflow_core::Language;
use babelflow_secret::{MemorySecretStore, SecretStore};
use babelflow_speech::{SpeechError, SpeechInput, Transcript};
use babelflow_translator::{TranslateError, Translator};
use babelflow_types::AppEvent;
use kanal::{AsyncReceiver, AsyncSender};
use tokio::time::timeout;

use crate::state::AppState;

#[derive(Clone)]
pub enum ScriptedOutcome {
    Success(String),
    Unauthorized,
    Malformed,
    Http(u16),
}

/// Translator double keyed by input text, so concurrent requests resolve
/// deterministically regardless of task scheduling.
pub struct ScriptedTranslator {
    responses: Mutex<HashMap<String, (Duration, ScriptedOutcome)>>,
    calls: AtomicUsize,
}

impl ScriptedTranslator {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(HashMap::new()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn respond(self, text: &str, delay: Duration, outcome: ScriptedOutcome) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(text.to_string(), (delay, outcome));
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl Translator for ScriptedTranslator {
    async fn translate(
        &self,
        text: &str,
        _from: Language,
        _to: Language,
        _secret: &str,
    ) -> Result<String, TranslateError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let (delay, outcome) = self
            .responses
            .lock()
            .unwrap()
            .get(text)
            .cloned()
            .unwrap_or_else(|| panic!("no scripted response for {text:?}"));

        tokio::time::sleep(delay).await;

        match outcome {
            ScriptedOutcome::Success(reply) => Ok(reply),
            ScriptedOutcome::Unauthorized => Err(TranslateError::Unauthorized),
            ScriptedOutcome::Malformed => Err(TranslateError::MalformedResponse),
            ScriptedOutcome::Http(status) => Err(TranslateError::Http(status)),
        }
    }
}

/// Recognizer double that replays a fixed transcript sequence on `start`.
///
/// Holds a sink clone so the transcript stream stays open, like a live
/// recognizer, until `stop` is called.
pub struct ScriptedRecognizer {
    transcripts: Vec<Transcript>,
    starts: AtomicUsize,
    held_sinks: Mutex<Vec<AsyncSender<Transcript>>>,
}

impl ScriptedRecognizer {
    pub fn new(transcripts: Vec<Transcript>) -> Self {
        Self {
            transcripts,
            starts: AtomicUsize::new(0),
            held_sinks: Mutex::new(Vec::new()),
        }
    }

    pub fn starts(&self) -> usize {
        self.starts.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl SpeechInput for ScriptedRecognizer {
    async fn start(
        &self,
        _locale: &str,
        sink: AsyncSender<Transcript>,
    ) -> Result<(), SpeechError> {
        self.starts.fetch_add(1, Ordering::SeqCst);
        self.held_sinks.lock().unwrap().push(sink.clone());

        let transcripts = self.transcripts.clone();
        tokio::spawn(async move {
            for transcript in transcripts {
                if sink.send(transcript).await.is_err() {
                    break;
                }
            }
        });
        Ok(())
    }

    async fn stop(&self) {
        self.held_sinks.lock().unwrap().clear();
    }
}

pub fn test_state(secret: Option<&str>) -> Arc<AppState> {
    let store = MemorySecretStore::new();
    if let Some(secret) = secret {
        store.set(secret).unwrap();
    }
    Arc::new(AppState::new(Config::default(), Arc::new(store)))
}

/// Receive the next event or fail the test after two seconds.
pub async fn next_event(rx: &AsyncReceiver<AppEvent>) -> AppEvent {
    timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("timed out waiting for event")
        .expect("event channel closed")
}

/// Assert that nothing arrives within the given window.
pub async fn assert_silent(rx: &AsyncReceiver<AppEvent>, window: Duration) {
    if let Ok(event) = timeout(window, rx.recv()).await {
        panic!("unexpected event: {:?}", event.unwrap());
    }
}

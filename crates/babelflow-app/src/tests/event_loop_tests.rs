use std::sync::Arc;
use std::time::Duration;

use babelflow_core::Language;
use babelflow_speech::{NullSpeechInput, NullSpeechOutput, Transcript};
use babelflow_types::{AppEvent, TextSource};
use tokio::task::JoinSet;

use crate::controller::AppController;
use crate::state::AppState;
use crate::tests::support::{
    next_event, test_state, ScriptedOutcome, ScriptedRecognizer, ScriptedTranslator,
};

async fn start_backend(
    state: Arc<AppState>,
    translator: ScriptedTranslator,
) -> (
    AppController,
    JoinSet<anyhow::Result<()>>,
    kanal::AsyncReceiver<AppEvent>,
    kanal::AsyncSender<AppEvent>,
) {
    let controller = AppController::new(state);
    let (from_backend, to_backend) = controller.ui_endpoints();
    // The caller holds the JoinSet; dropping it would abort the backend.
    let tasks = controller.spawn_tasks(
        Arc::new(translator),
        Arc::new(NullSpeechOutput),
        Arc::new(NullSpeechInput),
    );

    assert!(matches!(
        next_event(&from_backend).await,
        AppEvent::BackendReady
    ));
    (controller, tasks, from_backend, to_backend)
}

#[tokio::test]
async fn typed_submission_round_trips() {
    let state = test_state(Some("sk-test"));
    let translator = ScriptedTranslator::new().respond(
        "good morning",
        Duration::from_millis(5),
        ScriptedOutcome::Success("bonjour".to_string()),
    );
    let (_controller, _tasks, from_backend, to_backend) = start_backend(state.clone(), translator).await;

    to_backend
        .send(AppEvent::SetSourceLanguage("English".to_string()))
        .await
        .unwrap();
    to_backend
        .send(AppEvent::SetTargetLanguage("French".to_string()))
        .await
        .unwrap();
    to_backend
        .send(AppEvent::Submit {
            text: "good morning".to_string(),
            source: TextSource::Manual,
        })
        .await
        .unwrap();

    match next_event(&from_backend).await {
        AppEvent::ShowTranslation { text } => assert_eq!(text, "bonjour"),
        other => panic!("expected ShowTranslation, got {other:?}"),
    }

    // The loop processes events in order, so state reflects the pickers.
    assert_eq!(*state.source_language.read().await, Language::English);
    assert_eq!(*state.target_language.read().await, Language::French);
    assert_eq!(*state.input_text.read().await, "good morning");
    assert_eq!(*state.translated_text.read().await, "bonjour");
}

#[tokio::test]
async fn auto_is_rejected_as_target() {
    let state = test_state(Some("sk-test"));
    let translator = ScriptedTranslator::new().respond(
        "x",
        Duration::ZERO,
        ScriptedOutcome::Success("y".to_string()),
    );
    let (_controller, _tasks, from_backend, to_backend) = start_backend(state.clone(), translator).await;

    to_backend
        .send(AppEvent::SetTargetLanguage("Auto".to_string()))
        .await
        .unwrap();

    // Fence on a round-trip so the picker event has been handled.
    to_backend
        .send(AppEvent::Submit {
            text: "x".to_string(),
            source: TextSource::Manual,
        })
        .await
        .unwrap();
    assert!(matches!(
        next_event(&from_backend).await,
        AppEvent::ShowTranslation { .. }
    ));

    assert_eq!(*state.target_language.read().await, Language::English);
}

#[tokio::test]
async fn swap_exchanges_languages_and_texts() {
    let state = test_state(Some("sk-test"));
    let translator = ScriptedTranslator::new()
        .respond(
            "hello",
            Duration::ZERO,
            ScriptedOutcome::Success("bonjour".to_string()),
        )
        .respond(
            "fence",
            Duration::ZERO,
            ScriptedOutcome::Success("fence".to_string()),
        );
    let (_controller, _tasks, from_backend, to_backend) = start_backend(state.clone(), translator).await;

    for event in [
        AppEvent::SetSourceLanguage("English".to_string()),
        AppEvent::SetTargetLanguage("French".to_string()),
        AppEvent::Submit {
            text: "hello".to_string(),
            source: TextSource::Manual,
        },
    ] {
        to_backend.send(event).await.unwrap();
    }
    assert!(matches!(
        next_event(&from_backend).await,
        AppEvent::ShowTranslation { .. }
    ));

    to_backend.send(AppEvent::SwapLanguages).await.unwrap();
    to_backend
        .send(AppEvent::Submit {
            text: "fence".to_string(),
            source: TextSource::Manual,
        })
        .await
        .unwrap();
    assert!(matches!(
        next_event(&from_backend).await,
        AppEvent::ShowTranslation { .. }
    ));

    assert_eq!(*state.source_language.read().await, Language::French);
    assert_eq!(*state.target_language.read().await, Language::English);
    // Swap ran before the fence submission overwrote the input box.
    assert_eq!(*state.translated_text.read().await, "fence");
}

#[tokio::test]
async fn swap_is_a_no_op_while_source_is_auto() {
    let state = test_state(Some("sk-test"));
    let translator = ScriptedTranslator::new().respond(
        "fence",
        Duration::ZERO,
        ScriptedOutcome::Success("fence".to_string()),
    );
    let (_controller, _tasks, from_backend, to_backend) = start_backend(state.clone(), translator).await;

    to_backend.send(AppEvent::SwapLanguages).await.unwrap();
    to_backend
        .send(AppEvent::Submit {
            text: "fence".to_string(),
            source: TextSource::Manual,
        })
        .await
        .unwrap();
    assert!(matches!(
        next_event(&from_backend).await,
        AppEvent::ShowTranslation { .. }
    ));

    assert_eq!(*state.source_language.read().await, Language::Auto);
    assert_eq!(*state.target_language.read().await, Language::English);
}

#[tokio::test]
async fn dictated_text_enters_the_submission_path() {
    let state = test_state(Some("sk-test"));
    let translator = ScriptedTranslator::new().respond(
        "bonjour le monde",
        Duration::from_millis(5),
        ScriptedOutcome::Success("hello world".to_string()),
    );

    let controller = AppController::new(state.clone());
    let (from_backend, to_backend) = controller.ui_endpoints();
    let recognizer = ScriptedRecognizer::new(vec![
        Transcript {
            text: "bonjour".to_string(),
            is_final: false,
        },
        Transcript {
            text: "bonjour le monde".to_string(),
            is_final: true,
        },
    ]);
    // Held for the duration of the test; dropping it would abort the backend.
    let _tasks = controller.spawn_tasks(
        Arc::new(translator),
        Arc::new(NullSpeechOutput),
        Arc::new(recognizer),
    );

    assert!(matches!(
        next_event(&from_backend).await,
        AppEvent::BackendReady
    ));

    to_backend
        .send(AppEvent::SetSourceLanguage("French".to_string()))
        .await
        .unwrap();
    to_backend.send(AppEvent::StartDictation).await.unwrap();

    // Partial transcript streams through to the UI.
    match next_event(&from_backend).await {
        AppEvent::DictationTranscript { text, is_final } => {
            assert_eq!(text, "bonjour");
            assert!(!is_final);
        }
        other => panic!("expected partial transcript, got {other:?}"),
    }

    // Final transcript is echoed, then translated like typed input.
    match next_event(&from_backend).await {
        AppEvent::DictationTranscript { text, is_final } => {
            assert_eq!(text, "bonjour le monde");
            assert!(is_final);
        }
        other => panic!("expected final transcript, got {other:?}"),
    }
    match next_event(&from_backend).await {
        AppEvent::ShowTranslation { text } => assert_eq!(text, "hello world"),
        other => panic!("expected ShowTranslation, got {other:?}"),
    }
    assert_eq!(*state.input_text.read().await, "bonjour le monde");
}

#[tokio::test]
async fn repeated_dictation_start_reuses_the_running_recognizer() {
    let state = test_state(Some("sk-test"));
    let translator = ScriptedTranslator::new().respond(
        "fence",
        Duration::ZERO,
        ScriptedOutcome::Success("fence".to_string()),
    );

    let controller = AppController::new(state.clone());
    let (from_backend, to_backend) = controller.ui_endpoints();
    // No transcripts: the stream just stays open until StopDictation.
    let recognizer = Arc::new(ScriptedRecognizer::new(vec![]));
    let _tasks = controller.spawn_tasks(
        Arc::new(translator),
        Arc::new(NullSpeechOutput),
        recognizer.clone(),
    );

    assert!(matches!(
        next_event(&from_backend).await,
        AppEvent::BackendReady
    ));

    to_backend.send(AppEvent::StartDictation).await.unwrap();
    to_backend.send(AppEvent::StartDictation).await.unwrap();

    // Fence on a round-trip so both start events have been handled.
    to_backend
        .send(AppEvent::Submit {
            text: "fence".to_string(),
            source: TextSource::Manual,
        })
        .await
        .unwrap();
    assert!(matches!(
        next_event(&from_backend).await,
        AppEvent::ShowTranslation { .. }
    ));
    assert_eq!(recognizer.starts(), 1);

    // After an explicit stop, dictation can start again.
    to_backend.send(AppEvent::StopDictation).await.unwrap();
    to_backend.send(AppEvent::StartDictation).await.unwrap();
    to_backend
        .send(AppEvent::Submit {
            text: "fence".to_string(),
            source: TextSource::Manual,
        })
        .await
        .unwrap();
    assert!(matches!(
        next_event(&from_backend).await,
        AppEvent::ShowTranslation { .. }
    ));
    assert_eq!(recognizer.starts(), 2);
}

#[tokio::test]
async fn secret_updates_flow_through_the_store() {
    let state = test_state(None);
    let translator = ScriptedTranslator::new().respond(
        "hello",
        Duration::ZERO,
        ScriptedOutcome::Success("hola".to_string()),
    );
    let (_controller, _tasks, from_backend, to_backend) = start_backend(state.clone(), translator).await;

    // No secret yet: submission fails and prompts for setup.
    to_backend
        .send(AppEvent::Submit {
            text: "hello".to_string(),
            source: TextSource::Manual,
        })
        .await
        .unwrap();
    assert!(matches!(
        next_event(&from_backend).await,
        AppEvent::SecretRequired
    ));
    assert!(matches!(
        next_event(&from_backend).await,
        AppEvent::ShowError { .. }
    ));

    // Configure one and retry the same input.
    to_backend
        .send(AppEvent::SetSecret("sk-new".to_string()))
        .await
        .unwrap();
    to_backend
        .send(AppEvent::Submit {
            text: "hello".to_string(),
            source: TextSource::Manual,
        })
        .await
        .unwrap();

    match next_event(&from_backend).await {
        AppEvent::ShowTranslation { text } => assert_eq!(text, "hola"),
        other => panic!("expected ShowTranslation, got {other:?}"),
    }
    assert!(state.secrets.is_custom_set());
}

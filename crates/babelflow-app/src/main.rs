use std::sync::Arc;
use std::time::Duration;

use babelflow_config::Config;
use babelflow_secret::{EnvSecretStore, MemorySecretStore, SecretStore};
use babelflow_speech::{NullSpeechInput, NullSpeechOutput};
use babelflow_translator::OpenAiTranslator;
use tokio::signal;
use tracing_subscriber::EnvFilter;

pub mod controller;
pub mod events;
pub mod session;
pub mod state;

#[cfg(test)]
mod tests;

use self::controller::AppController;
use self::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = Config::new();

    // User-supplied secrets shadow the environment key; no bundled default.
    let secrets: Arc<dyn SecretStore> = Arc::new(MemorySecretStore::with_fallback(Box::new(
        EnvSecretStore::new("OPENAI_API_KEY"),
    )));

    let translator = Arc::new(OpenAiTranslator::new(
        config.translator.clone(),
        Duration::from_secs(config.request_timeout_seconds),
    )?);

    let state = Arc::new(AppState::new(config, secrets));
    let controller = AppController::new(state);

    let mut tasks = controller.spawn_tasks(
        translator,
        Arc::new(NullSpeechOutput),
        Arc::new(NullSpeechInput),
    );

    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("Shutdown requested");
            controller.shutdown();
        }
        Some(result) = tasks.join_next() => {
            match result {
                Ok(Ok(())) => tracing::warn!("backend task exited"),
                Ok(Err(e)) => tracing::error!("backend task failed: {e}"),
                Err(e) => tracing::error!("backend task panicked: {e}"),
            }
        }
    }

    tasks.shutdown().await;
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if atty::is(atty::Stream::Stdout) {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    }
}

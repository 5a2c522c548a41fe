use std::sync::Arc;

use crate::session::TranslationSession;
use crate::state::AppState;

/// Shared entry point for typed and dictated text.
pub async fn handle_submit(
    state: &Arc<AppState>,
    session: &Arc<TranslationSession>,
    text: String,
) -> anyhow::Result<()> {
    // Kept verbatim so a failed request can be retried without retyping.
    *state.input_text.write().await = text.clone();

    let from = *state.source_language.read().await;
    let to = *state.target_language.read().await;

    session.submit(&text, from, to).await
}

//! Assistant chat endpoints.

use axum::{extract::State, Json};

use super::{error, success, ApiResult};
use crate::errors::AppError;
use crate::models::{AskRequest, ChatCategory, ChatExchange, ChatMessage};
use crate::AppState;

/// GET /api/chat - The saved transcript.
pub async fn get_transcript(State(state): State<AppState>) -> ApiResult<Vec<ChatMessage>> {
    let revision_id = state.repo.get_revision_id().await.unwrap_or(0);
    success(state.repo.transcript().await, revision_id)
}

/// POST /api/chat - Ask the assistant; responds once the reply is ready.
pub async fn ask(
    State(state): State<AppState>,
    Json(request): Json<AskRequest>,
) -> ApiResult<ChatExchange> {
    let revision_id = state.repo.get_revision_id().await.unwrap_or(0);

    if request.category == ChatCategory::General && request.message.trim().is_empty() {
        return error(
            AppError::Validation("Message is required".to_string()),
            revision_id,
        );
    }

    match state.repo.clone().ask(request).await {
        Ok(exchange) => {
            let new_revision = state.repo.get_revision_id().await.unwrap_or(revision_id);
            success(exchange, new_revision)
        }
        Err(e) => error(e, revision_id),
    }
}

/// DELETE /api/chat - Clear the transcript.
pub async fn clear_transcript(State(state): State<AppState>) -> ApiResult<()> {
    let revision_id = state.repo.get_revision_id().await.unwrap_or(0);

    match state.repo.clear_chat().await {
        Ok(()) => {
            let new_revision = state.repo.get_revision_id().await.unwrap_or(revision_id);
            success((), new_revision)
        }
        Err(e) => error(e, revision_id),
    }
}

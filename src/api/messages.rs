//! Message API endpoints.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use super::{error, success, ApiResult};
use crate::db::MessageInbox;
use crate::models::{Message, SendMessageRequest, StatusFilter};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct InboxQuery {
    #[serde(default)]
    pub status: StatusFilter,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkReadResponse {
    pub message_id: String,
    pub changed: bool,
}

/// GET /api/messages - List messages, optionally only unread or read ones.
pub async fn list_messages(
    State(state): State<AppState>,
    Query(query): Query<InboxQuery>,
) -> ApiResult<MessageInbox> {
    let revision_id = state.repo.get_revision_id().await.unwrap_or(0);
    success(state.repo.list_messages(query.status).await, revision_id)
}

/// POST /api/messages - Message a task's mentor.
pub async fn send_message(
    State(state): State<AppState>,
    Json(request): Json<SendMessageRequest>,
) -> ApiResult<Message> {
    let revision_id = state.repo.get_revision_id().await.unwrap_or(0);

    let draft = match request.validate() {
        Ok(draft) => draft,
        Err(e) => return error(e, revision_id),
    };

    match state.repo.send_message(draft).await {
        Ok(message) => {
            let new_revision = state.repo.get_revision_id().await.unwrap_or(revision_id);
            success(message, new_revision)
        }
        Err(e) => error(e, revision_id),
    }
}

/// POST /api/messages/:id/read - Mark a message as read.
pub async fn mark_read(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<MarkReadResponse> {
    let revision_id = state.repo.get_revision_id().await.unwrap_or(0);

    match state.repo.mark_read(&id).await {
        Ok(changed) => {
            let new_revision = state.repo.get_revision_id().await.unwrap_or(revision_id);
            success(
                MarkReadResponse {
                    message_id: id,
                    changed,
                },
                new_revision,
            )
        }
        Err(e) => error(e, revision_id),
    }
}

//! Full snapshot of persisted application data.

use serde::{Deserialize, Serialize};

use super::{Message, Task};

/// Everything the store holds apart from the chat transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Datastore {
    pub schema_version: i32,
    pub generated_at: String,
    pub revision_id: i64,
    pub tasks: Vec<Task>,
    pub messages: Vec<Message>,
}

/// Revision information for change detection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevisionInfo {
    pub revision_id: i64,
    pub generated_at: String,
}

/// Headline counters shown on the landing page.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub task_count: usize,
    pub submission_count: usize,
    pub unread_messages: usize,
}

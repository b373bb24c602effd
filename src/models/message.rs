//! Direct messages from students to a task's mentor.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::task::required;
use crate::errors::AppError;

/// Bounds on the message body, in characters, after trimming.
pub const MIN_MESSAGE_LEN: usize = 10;
pub const MAX_MESSAGE_LEN: usize = 1000;

/// Delivery status of a message.
///
/// `Replied` is accepted when reading persisted data but nothing produces it.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MessageStatus {
    #[default]
    Unread,
    Read,
    Replied,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub task_id: String,
    /// Copied from the task when the message is sent.
    pub task_title: String,
    pub from: String,
    pub from_email: String,
    pub to: String,
    pub to_email: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub status: MessageStatus,
}

/// Validated student-side input for a message; task details are filled in on send.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageDraft {
    pub task_id: String,
    pub from: String,
    pub from_email: String,
    pub message: String,
}

/// Request body for messaging a task's mentor.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SendMessageRequest {
    pub task_id: String,
    pub from: String,
    pub from_email: String,
    pub message: String,
}

impl SendMessageRequest {
    pub fn validate(self) -> Result<MessageDraft, AppError> {
        let task_id = required(&self.task_id, "Task id")?;
        let from = required(&self.from, "Name")?;
        let from_email = required(&self.from_email, "Email")?;

        let body = self.message.trim();
        let len = body.chars().count();
        if !(MIN_MESSAGE_LEN..=MAX_MESSAGE_LEN).contains(&len) {
            return Err(AppError::Validation(format!(
                "Message must be between {} and {} characters (got {})",
                MIN_MESSAGE_LEN, MAX_MESSAGE_LEN, len
            )));
        }

        Ok(MessageDraft {
            task_id,
            from,
            from_email,
            message: body.to_string(),
        })
    }
}

/// Inbox view selector.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Unread,
    Read,
}

impl StatusFilter {
    pub fn matches(&self, status: MessageStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Unread => status == MessageStatus::Unread,
            StatusFilter::Read => status == MessageStatus::Read,
        }
    }
}

/// Per-status message totals.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MessageCounts {
    pub total: usize,
    pub unread: usize,
    pub read: usize,
    pub replied: usize,
}

impl MessageCounts {
    pub fn tally(messages: &[Message]) -> Self {
        messages.iter().fold(
            Self {
                total: messages.len(),
                ..Self::default()
            },
            |mut acc, m| {
                match m.status {
                    MessageStatus::Unread => acc.unread += 1,
                    MessageStatus::Read => acc.read += 1,
                    MessageStatus::Replied => acc.replied += 1,
                }
                acc
            },
        )
    }
}

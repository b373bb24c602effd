//! In-memory marketplace state and its mutations.
//!
//! `Marketplace` is a plain value: every write is a method that replaces part
//! of it in place, so it can be tested without a store. Persistence is layered
//! on top by `db::Repository`.

mod filter;
mod leaderboard;

pub use filter::*;
pub use leaderboard::*;

use chrono::Utc;

use crate::models::{
    Message, MessageDraft, MessageStatus, Stats, Submission, SubmissionDraft, Task, TaskDraft,
};

/// Where a collection receives new entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Front,
    Back,
}

impl Placement {
    fn insert<T>(self, items: &mut Vec<T>, item: T) {
        match self {
            Placement::Front => items.insert(0, item),
            Placement::Back => items.push(item),
        }
    }
}

/// Tasks are listed newest first.
pub const TASK_PLACEMENT: Placement = Placement::Front;
/// Submissions within a task are listed oldest first.
pub const SUBMISSION_PLACEMENT: Placement = Placement::Back;
/// Messages are listed newest first.
pub const MESSAGE_PLACEMENT: Placement = Placement::Front;

/// Fresh identifier for a new entity.
pub fn generate_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// The canonical task and message collections.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Marketplace {
    pub tasks: Vec<Task>,
    pub messages: Vec<Message>,
}

impl Marketplace {
    pub fn new(tasks: Vec<Task>, messages: Vec<Message>) -> Self {
        Self { tasks, messages }
    }

    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn post_task(&mut self, draft: TaskDraft) -> Task {
        let task = Task {
            id: generate_id(),
            title: draft.title,
            description: draft.description,
            skill_tags: draft.skill_tags,
            deadline: draft.deadline,
            difficulty: draft.difficulty,
            expected_outcome: draft.expected_outcome,
            mentor_name: draft.mentor_name,
            mentor_email: draft.mentor_email,
            created_at: Utc::now(),
            upvotes: 0,
            submissions: Vec::new(),
        };
        TASK_PLACEMENT.insert(&mut self.tasks, task.clone());
        task
    }

    /// Add one upvote. Returns the new count, or `None` if the task is unknown.
    pub fn upvote(&mut self, task_id: &str) -> Option<u64> {
        let task = self.tasks.iter_mut().find(|t| t.id == task_id)?;
        task.upvotes = task.upvotes.saturating_add(1);
        Some(task.upvotes)
    }

    /// Append a submission to its task. Returns `None` if the task is unknown.
    pub fn submit_solution(&mut self, draft: SubmissionDraft) -> Option<Submission> {
        let task = self.tasks.iter_mut().find(|t| t.id == draft.task_id)?;
        let submission = Submission {
            id: generate_id(),
            task_id: draft.task_id,
            student_name: draft.student_name,
            student_email: draft.student_email,
            github_link: draft.github_link,
            note: draft.note,
            submitted_at: Utc::now(),
        };
        SUBMISSION_PLACEMENT.insert(&mut task.submissions, submission.clone());
        Some(submission)
    }

    /// Record a message to the task's mentor. Returns `None` if the task is unknown.
    pub fn send_message(&mut self, draft: MessageDraft) -> Option<Message> {
        let task = self.task(&draft.task_id)?;
        let message = Message {
            id: generate_id(),
            task_title: task.title.clone(),
            to: task.mentor_name.clone(),
            to_email: task.mentor_email.clone(),
            task_id: draft.task_id,
            from: draft.from,
            from_email: draft.from_email,
            message: draft.message,
            timestamp: Utc::now(),
            status: MessageStatus::Unread,
        };
        MESSAGE_PLACEMENT.insert(&mut self.messages, message.clone());
        Some(message)
    }

    /// Mark an unread message as read. Returns whether anything changed.
    pub fn mark_read(&mut self, message_id: &str) -> bool {
        match self
            .messages
            .iter_mut()
            .find(|m| m.id == message_id && m.status == MessageStatus::Unread)
        {
            Some(message) => {
                message.status = MessageStatus::Read;
                true
            }
            None => false,
        }
    }

    pub fn stats(&self) -> Stats {
        Stats {
            task_count: self.tasks.len(),
            submission_count: self.tasks.iter().map(|t| t.submissions.len()).sum(),
            unread_messages: self
                .messages
                .iter()
                .filter(|m| m.status == MessageStatus::Unread)
                .count(),
        }
    }
}

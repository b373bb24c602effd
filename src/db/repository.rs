//! Repository: the single writer for marketplace state.
//!
//! Holds the in-memory collections behind locks. Every mutation runs against
//! a copy of the current state and saves the affected collection while the
//! lock is still held. The copy replaces the live state only once the save
//! succeeds, so a failed write leaves nothing behind.

use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use tokio::sync::{Mutex, RwLock};

use super::{Store, CHAT_KEY, MESSAGES_KEY, TASKS_KEY};
use crate::chat::{question_line, templates, Responder};
use crate::errors::AppError;
use crate::market::{
    available_skills, filter_tasks, generate_id, Leaderboard, Marketplace, TaskFilter,
};
use crate::models::{
    seed_tasks, AskRequest, ChatCategory, ChatExchange, ChatMessage, ChatRole, Datastore, Message,
    MessageCounts, MessageDraft, RevisionInfo, Stats, StatusFilter, Submission, SubmissionDraft,
    Task, TaskDraft,
};

/// Filtered task listing plus the skill list for the filter dropdown.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskListing {
    pub tasks: Vec<Task>,
    pub available_skills: Vec<String>,
    pub total: usize,
}

/// Messages matching an inbox view, with counts over the whole inbox.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageInbox {
    pub messages: Vec<Message>,
    pub counts: MessageCounts,
}

pub struct Repository {
    store: Store,
    market: RwLock<Marketplace>,
    transcript: Mutex<Vec<ChatMessage>>,
    responder: Responder,
}

impl Repository {
    /// Load every collection from the store, falling back to defaults.
    pub async fn open(store: Store, responder: Responder) -> Result<Self, AppError> {
        let tasks: Vec<Task> = store.load(TASKS_KEY, seed_tasks()).await?;
        let messages: Vec<Message> = store.load(MESSAGES_KEY, Vec::new()).await?;
        let transcript: Vec<ChatMessage> = store.load(CHAT_KEY, Vec::new()).await?;

        tracing::info!(
            "Loaded {} tasks, {} messages, {} chat entries",
            tasks.len(),
            messages.len(),
            transcript.len()
        );

        Ok(Self {
            store,
            market: RwLock::new(Marketplace::new(tasks, messages)),
            transcript: Mutex::new(transcript),
            responder,
        })
    }

    pub async fn get_revision_id(&self) -> Result<i64, AppError> {
        self.store.get_revision_id().await
    }

    pub async fn get_revision_info(&self) -> Result<RevisionInfo, AppError> {
        self.store.get_revision_info().await
    }

    /// Snapshot of tasks and messages.
    pub async fn get_datastore(&self) -> Result<Datastore, AppError> {
        let market = self.market.read().await;
        let info = self.store.get_revision_info().await?;
        Ok(Datastore {
            schema_version: self.store.get_schema_version().await?,
            generated_at: info.generated_at,
            revision_id: info.revision_id,
            tasks: market.tasks.clone(),
            messages: market.messages.clone(),
        })
    }

    // ==================== TASK OPERATIONS ====================

    pub async fn list_tasks(&self, filter: &TaskFilter) -> TaskListing {
        if !filter.is_empty() {
            tracing::debug!("Filtering tasks with {:?}", filter);
        }
        let market = self.market.read().await;
        let tasks: Vec<Task> = filter_tasks(&market.tasks, filter)
            .into_iter()
            .cloned()
            .collect();
        TaskListing {
            total: tasks.len(),
            tasks,
            available_skills: available_skills(&market.tasks),
        }
    }

    pub async fn get_task(&self, id: &str) -> Option<Task> {
        self.market.read().await.task(id).cloned()
    }

    pub async fn available_skills(&self) -> Vec<String> {
        available_skills(&self.market.read().await.tasks)
    }

    pub async fn leaderboard(&self) -> Leaderboard {
        Leaderboard::compute(&self.market.read().await.tasks)
    }

    pub async fn stats(&self) -> Stats {
        self.market.read().await.stats()
    }

    pub async fn post_task(&self, draft: TaskDraft) -> Result<Task, AppError> {
        let mut market = self.market.write().await;
        let mut next = market.clone();
        let task = next.post_task(draft);
        self.store.save(TASKS_KEY, &next.tasks).await?;
        *market = next;
        tracing::info!("Posted task {} by {}", task.id, task.mentor_name);
        Ok(task)
    }

    /// Add an upvote. Unknown ids are ignored and return `None`.
    pub async fn upvote(&self, task_id: &str) -> Result<Option<u64>, AppError> {
        let mut market = self.market.write().await;
        let mut next = market.clone();
        let Some(upvotes) = next.upvote(task_id) else {
            tracing::debug!("Upvote for unknown task {} ignored", task_id);
            return Ok(None);
        };
        self.store.save(TASKS_KEY, &next.tasks).await?;
        *market = next;
        Ok(Some(upvotes))
    }

    pub async fn submit_solution(&self, draft: SubmissionDraft) -> Result<Submission, AppError> {
        let task_id = draft.task_id.clone();
        let mut market = self.market.write().await;
        let mut next = market.clone();
        let submission = next
            .submit_solution(draft)
            .ok_or_else(|| AppError::NotFound(format!("Task {} not found", task_id)))?;
        self.store.save(TASKS_KEY, &next.tasks).await?;
        *market = next;
        tracing::info!(
            "Submission {} from {} on task {}",
            submission.id,
            submission.student_name,
            task_id
        );
        Ok(submission)
    }

    // ==================== MESSAGE OPERATIONS ====================

    pub async fn list_messages(&self, filter: StatusFilter) -> MessageInbox {
        let market = self.market.read().await;
        MessageInbox {
            messages: market
                .messages
                .iter()
                .filter(|m| filter.matches(m.status))
                .cloned()
                .collect(),
            counts: MessageCounts::tally(&market.messages),
        }
    }

    pub async fn send_message(&self, draft: MessageDraft) -> Result<Message, AppError> {
        let task_id = draft.task_id.clone();
        let mut market = self.market.write().await;
        let mut next = market.clone();
        let message = next
            .send_message(draft)
            .ok_or_else(|| AppError::NotFound(format!("Task {} not found", task_id)))?;
        self.store.save(MESSAGES_KEY, &next.messages).await?;
        *market = next;
        tracing::info!("Message {} sent to {}", message.id, message.to);
        Ok(message)
    }

    /// Mark a message read. Unknown or already-read ids are a no-op.
    pub async fn mark_read(&self, message_id: &str) -> Result<bool, AppError> {
        let mut market = self.market.write().await;
        let mut next = market.clone();
        if !next.mark_read(message_id) {
            tracing::debug!("mark_read on {} changed nothing", message_id);
            return Ok(false);
        }
        self.store.save(MESSAGES_KEY, &next.messages).await?;
        *market = next;
        Ok(true)
    }

    // ==================== CHAT OPERATIONS ====================

    pub async fn transcript(&self) -> Vec<ChatMessage> {
        self.transcript.lock().await.clone()
    }

    /// Record a question and the assistant's reply.
    ///
    /// The reply is produced on a spawned task, so it is still appended if
    /// the caller goes away during the delay.
    pub async fn ask(self: Arc<Self>, request: AskRequest) -> Result<ChatExchange, AppError> {
        let category = request.category;
        let question = self
            .append_chat(
                ChatRole::User,
                question_line(&request.message, category, request.task_title.as_deref()),
                category,
            )
            .await?;

        let repo = Arc::clone(&self);
        let pending = tokio::spawn(async move {
            let reply = repo.responder.reply(request.message, category).await;
            repo.append_chat(ChatRole::Ai, reply, category).await
        });

        let answer = match pending.await {
            Ok(result) => result?,
            Err(e) => {
                tracing::error!("Assistant reply task failed: {}", e);
                self.append_chat(ChatRole::Ai, templates::FAILURE.to_string(), category)
                    .await?
            }
        };

        Ok(ChatExchange { question, answer })
    }

    pub async fn clear_chat(&self) -> Result<(), AppError> {
        let mut transcript = self.transcript.lock().await;
        transcript.clear();
        self.store.remove(CHAT_KEY).await?;
        Ok(())
    }

    async fn append_chat(
        &self,
        role: ChatRole,
        content: String,
        category: ChatCategory,
    ) -> Result<ChatMessage, AppError> {
        let entry = ChatMessage {
            id: generate_id(),
            role,
            content,
            timestamp: Utc::now(),
            category: Some(category),
        };
        let mut transcript = self.transcript.lock().await;
        let mut next = transcript.clone();
        next.push(entry.clone());
        self.store.save(CHAT_KEY, &next).await?;
        *transcript = next;
        Ok(entry)
    }
}

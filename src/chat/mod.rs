//! Scripted career assistant.
//!
//! Replies come from a fixed table of templates chosen by category and
//! keyword. No model is consulted; the configured delay only paces replies.

pub mod templates;

use std::time::Duration;

use crate::models::ChatCategory;

/// Keyword groups checked in order against general prompts; first hit wins.
const KEYWORD_TABLE: &[(&[&str], &str)] = &[
    (&["career", "job"], templates::CAREER),
    (&["skill", "learn"], templates::SKILLS),
    (&["project", "portfolio"], templates::PORTFOLIO),
    (&["resume", "cv"], templates::RESUME_TIPS),
];

/// Pick the reply for a prompt.
pub fn respond(text: &str, category: ChatCategory) -> &'static str {
    match category {
        ChatCategory::Checklist => templates::CHECKLIST,
        ChatCategory::Resume => templates::RESUME,
        ChatCategory::General => {
            let lower = text.to_lowercase();
            KEYWORD_TABLE
                .iter()
                .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(k)))
                .map(|(_, reply)| *reply)
                .unwrap_or(templates::WELCOME)
        }
    }
}

/// Transcript line recorded for the user's side of an exchange.
pub fn question_line(text: &str, category: ChatCategory, task_title: Option<&str>) -> String {
    let title = task_title.map(str::trim).filter(|t| !t.is_empty());
    match category {
        ChatCategory::Checklist => {
            format!("Generate a smart checklist for: {}", title.unwrap_or("Task"))
        }
        ChatCategory::Resume => {
            format!("Generate resume bullet point for: {}", title.unwrap_or("Project"))
        }
        ChatCategory::General => text.to_string(),
    }
}

/// Paced access to [`respond`].
#[derive(Debug, Clone)]
pub struct Responder {
    delay: Duration,
}

impl Responder {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Wait out the configured delay, then reply.
    pub async fn reply(&self, text: String, category: ChatCategory) -> String {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        respond(&text, category).to_string()
    }
}

//! Task and submission models matching the frontend Task/Submission interfaces.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Difficulty level a mentor assigns to a task.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Beginner" => Ok(Difficulty::Beginner),
            "Intermediate" => Ok(Difficulty::Intermediate),
            "Advanced" => Ok(Difficulty::Advanced),
            other => Err(AppError::BadRequest(format!("Unknown difficulty '{}'", other))),
        }
    }
}

/// A project posted by a mentor that students can submit solutions against.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,
    pub skill_tags: Vec<String>,
    pub deadline: NaiveDate,
    pub difficulty: Difficulty,
    pub expected_outcome: String,
    pub mentor_name: String,
    pub mentor_email: String,
    pub created_at: DateTime<Utc>,
    pub upvotes: u64,
    /// Oldest first.
    #[serde(default)]
    pub submissions: Vec<Submission>,
}

/// A student's claimed solution to a task.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: String,
    pub task_id: String,
    pub student_name: String,
    pub student_email: String,
    pub github_link: String,
    #[serde(default)]
    pub note: String,
    pub submitted_at: DateTime<Utc>,
}

/// Validated input for posting a task.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub skill_tags: Vec<String>,
    pub deadline: NaiveDate,
    pub difficulty: Difficulty,
    pub expected_outcome: String,
    pub mentor_name: String,
    pub mentor_email: String,
}

/// Validated input for submitting a solution.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionDraft {
    pub task_id: String,
    pub student_name: String,
    pub student_email: String,
    pub github_link: String,
    pub note: String,
}

/// Request body for posting a new task.
///
/// Every field defaults so that absent keys reach `validate` and are
/// reported like blank ones.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateTaskRequest {
    pub title: String,
    pub description: String,
    pub skill_tags: Vec<String>,
    pub deadline: Option<NaiveDate>,
    pub difficulty: Difficulty,
    pub expected_outcome: String,
    pub mentor_name: String,
    pub mentor_email: String,
}

impl CreateTaskRequest {
    /// Check required fields and produce a trimmed draft.
    pub fn validate(self) -> Result<TaskDraft, AppError> {
        let title = required(&self.title, "Title")?;
        let description = required(&self.description, "Description")?;
        let expected_outcome = required(&self.expected_outcome, "Expected outcome")?;
        let deadline = self
            .deadline
            .ok_or_else(|| AppError::Validation("Deadline is required".to_string()))?;
        let mentor_name = required(&self.mentor_name, "Mentor name")?;
        let mentor_email = required(&self.mentor_email, "Mentor email")?;

        let skill_tags: Vec<String> = self
            .skill_tags
            .iter()
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();
        if skill_tags.is_empty() {
            return Err(AppError::Validation(
                "At least one skill tag is required".to_string(),
            ));
        }

        Ok(TaskDraft {
            title,
            description,
            skill_tags,
            deadline,
            difficulty: self.difficulty,
            expected_outcome,
            mentor_name,
            mentor_email,
        })
    }
}

/// Request body for submitting a solution to a task.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SubmitSolutionRequest {
    pub student_name: String,
    pub student_email: String,
    pub github_link: String,
    pub note: String,
}

impl SubmitSolutionRequest {
    pub fn validate(self, task_id: &str) -> Result<SubmissionDraft, AppError> {
        Ok(SubmissionDraft {
            task_id: task_id.to_string(),
            student_name: required(&self.student_name, "Student name")?,
            student_email: required(&self.student_email, "Student email")?,
            github_link: required(&self.github_link, "Repository link")?,
            note: self.note.trim().to_string(),
        })
    }
}

/// Trim a form field, rejecting blank input.
pub(crate) fn required(value: &str, field: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation(format!("{} is required", field)));
    }
    Ok(trimmed.to_string())
}

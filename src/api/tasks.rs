//! Task API endpoints.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Serialize;

use super::{error, success, ApiResult};
use crate::db::TaskListing;
use crate::errors::AppError;
use crate::market::{TaskFilter, TaskFilterQuery};
use crate::models::{CreateTaskRequest, Submission, SubmitSolutionRequest, Task};
use crate::AppState;

/// Outcome of an upvote; `upvotes` is absent when the task is unknown.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpvoteResponse {
    pub task_id: String,
    pub upvotes: Option<u64>,
}

/// GET /api/tasks - List tasks matching the search, skill and difficulty filters.
pub async fn list_tasks(
    State(state): State<AppState>,
    Query(query): Query<TaskFilterQuery>,
) -> ApiResult<TaskListing> {
    let revision_id = state.repo.get_revision_id().await.unwrap_or(0);

    match TaskFilter::try_from(query) {
        Ok(filter) => success(state.repo.list_tasks(&filter).await, revision_id),
        Err(e) => error(e, revision_id),
    }
}

/// GET /api/tasks/:id - Get a single task.
pub async fn get_task(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Task> {
    let revision_id = state.repo.get_revision_id().await.unwrap_or(0);

    match state.repo.get_task(&id).await {
        Some(task) => success(task, revision_id),
        None => error(
            AppError::NotFound(format!("Task {} not found", id)),
            revision_id,
        ),
    }
}

/// POST /api/tasks - Post a new task.
pub async fn create_task(
    State(state): State<AppState>,
    Json(request): Json<CreateTaskRequest>,
) -> ApiResult<Task> {
    let revision_id = state.repo.get_revision_id().await.unwrap_or(0);

    let draft = match request.validate() {
        Ok(draft) => draft,
        Err(e) => return error(e, revision_id),
    };

    match state.repo.post_task(draft).await {
        Ok(task) => {
            let new_revision = state.repo.get_revision_id().await.unwrap_or(revision_id);
            success(task, new_revision)
        }
        Err(e) => error(e, revision_id),
    }
}

/// POST /api/tasks/:id/upvote - Add one upvote.
pub async fn upvote_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<UpvoteResponse> {
    let revision_id = state.repo.get_revision_id().await.unwrap_or(0);

    match state.repo.upvote(&id).await {
        Ok(upvotes) => {
            let new_revision = state.repo.get_revision_id().await.unwrap_or(revision_id);
            success(UpvoteResponse { task_id: id, upvotes }, new_revision)
        }
        Err(e) => error(e, revision_id),
    }
}

/// POST /api/tasks/:id/submissions - Submit a solution.
pub async fn submit_solution(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<SubmitSolutionRequest>,
) -> ApiResult<Submission> {
    let revision_id = state.repo.get_revision_id().await.unwrap_or(0);

    let draft = match request.validate(&id) {
        Ok(draft) => draft,
        Err(e) => return error(e, revision_id),
    };

    match state.repo.submit_solution(draft).await {
        Ok(submission) => {
            let new_revision = state.repo.get_revision_id().await.unwrap_or(revision_id);
            success(submission, new_revision)
        }
        Err(e) => error(e, revision_id),
    }
}

/// GET /api/skills - Every skill tag in use, sorted.
pub async fn list_skills(State(state): State<AppState>) -> ApiResult<Vec<String>> {
    let revision_id = state.repo.get_revision_id().await.unwrap_or(0);
    success(state.repo.available_skills().await, revision_id)
}

//! Datastore and derived-view endpoints.

use axum::extract::State;

use super::{success, ApiResult};
use crate::market::Leaderboard;
use crate::models::{Datastore, RevisionInfo, Stats};
use crate::AppState;

/// GET /api/datastore - Get tasks and messages in one snapshot.
pub async fn get_datastore(State(state): State<AppState>) -> ApiResult<Datastore> {
    let datastore =
        state
            .repo
            .get_datastore()
            .await
            .map_err(|e| crate::errors::AppErrorWithRevision {
                error: e,
                revision_id: 0,
            })?;

    let revision_id = datastore.revision_id;
    success(datastore, revision_id)
}

/// GET /api/datastore/revision - Get the current revision info.
pub async fn get_revision(State(state): State<AppState>) -> ApiResult<RevisionInfo> {
    let revision_info =
        state
            .repo
            .get_revision_info()
            .await
            .map_err(|e| crate::errors::AppErrorWithRevision {
                error: e,
                revision_id: 0,
            })?;

    let revision_id = revision_info.revision_id;
    success(revision_info, revision_id)
}

/// GET /api/stats - Landing page counters.
pub async fn get_stats(State(state): State<AppState>) -> ApiResult<Stats> {
    let revision_id = state.repo.get_revision_id().await.unwrap_or(0);
    success(state.repo.stats().await, revision_id)
}

/// GET /api/leaderboard - Top mentors, top students and most popular tasks.
pub async fn get_leaderboard(State(state): State<AppState>) -> ApiResult<Leaderboard> {
    let revision_id = state.repo.get_revision_id().await.unwrap_or(0);
    success(state.repo.leaderboard().await, revision_id)
}

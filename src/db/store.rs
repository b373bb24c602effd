//! Key-value persistence for JSON-serialized collections.

use chrono::Utc;
use serde::{de::DeserializeOwned, Serialize};
use sqlx::{Row, SqlitePool};

use crate::errors::AppError;
use crate::models::RevisionInfo;

pub const TASKS_KEY: &str = "skillbridge-tasks";
pub const MESSAGES_KEY: &str = "skillbridge-messages";
pub const CHAT_KEY: &str = "skillbridge-ai-chat";

/// String-keyed blob store backed by the `kv` table.
///
/// Keys are independent: there is no transaction spanning two saves.
#[derive(Clone)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Get the current revision ID.
    pub async fn get_revision_id(&self) -> Result<i64, AppError> {
        let row = sqlx::query("SELECT revision_id FROM meta WHERE id = 1")
            .fetch_one(&self.pool)
            .await?;
        Ok(row.get("revision_id"))
    }

    /// Get revision info.
    pub async fn get_revision_info(&self) -> Result<RevisionInfo, AppError> {
        let row = sqlx::query("SELECT revision_id, generated_at FROM meta WHERE id = 1")
            .fetch_one(&self.pool)
            .await?;
        Ok(RevisionInfo {
            revision_id: row.get("revision_id"),
            generated_at: row.get("generated_at"),
        })
    }

    pub async fn get_schema_version(&self) -> Result<i32, AppError> {
        let row = sqlx::query("SELECT schema_version FROM meta WHERE id = 1")
            .fetch_one(&self.pool)
            .await?;
        Ok(row.get("schema_version"))
    }

    /// Read the value under `key`.
    ///
    /// Returns `default` when nothing is stored, and also when the stored
    /// value no longer parses; the bad value is logged and left to be
    /// overwritten by the next save.
    pub async fn load<T: DeserializeOwned>(&self, key: &str, default: T) -> Result<T, AppError> {
        let row = sqlx::query("SELECT value FROM kv WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;

        let Some(row) = row else {
            tracing::debug!("No stored value for {}, using default", key);
            return Ok(default);
        };

        let raw: String = row.get("value");
        match serde_json::from_str(&raw) {
            Ok(value) => Ok(value),
            Err(e) => {
                tracing::warn!("Discarding malformed value for {}: {}", key, e);
                Ok(default)
            }
        }
    }

    /// Replace the value under `key` and return the new revision.
    pub async fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<i64, AppError> {
        let json = serde_json::to_string(value)
            .map_err(|e| AppError::Internal(format!("Failed to serialize {}: {}", key, e)))?;
        let now = Utc::now().to_rfc3339();

        let mut tx = self.pool.begin().await?;
        sqlx::query(
            "INSERT INTO kv (key, value, updated_at) VALUES (?, ?, ?)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        )
        .bind(key)
        .bind(&json)
        .bind(&now)
        .execute(&mut *tx)
        .await?;
        bump_revision(&mut tx, &now).await?;
        tx.commit().await?;

        tracing::debug!("Saved {} ({} bytes)", key, json.len());
        self.get_revision_id().await
    }

    /// Delete the value under `key` and return the new revision.
    pub async fn remove(&self, key: &str) -> Result<i64, AppError> {
        let now = Utc::now().to_rfc3339();

        let mut tx = self.pool.begin().await?;
        sqlx::query("DELETE FROM kv WHERE key = ?")
            .bind(key)
            .execute(&mut *tx)
            .await?;
        bump_revision(&mut tx, &now).await?;
        tx.commit().await?;

        self.get_revision_id().await
    }
}

async fn bump_revision(
    tx: &mut sqlx::Transaction<'_, sqlx::Sqlite>,
    now: &str,
) -> Result<(), AppError> {
    sqlx::query("UPDATE meta SET revision_id = revision_id + 1, generated_at = ? WHERE id = 1")
        .bind(now)
        .execute(&mut **tx)
        .await?;
    Ok(())
}

//! Snapshot repository implementation.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use sqlx::{PgPool, Postgres, Transaction};

use codetrack_core::error::{AppError, ErrorKind};
use codetrack_core::result::AppResult;
use codetrack_entity::snapshot::{NewSnapshot, Snapshot};

use crate::store::{SnapshotStore, SnapshotTransaction};

const SNAPSHOT_COLUMNS: &str =
    r#"id, file_name, file_path, "key", content, "timestamp", created_at"#;

/// Repository for tracked file snapshots.
#[derive(Debug, Clone)]
pub struct SnapshotRepository {
    pool: PgPool,
}

impl SnapshotRepository {
    /// Create a new snapshot repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SnapshotStore for SnapshotRepository {
    async fn begin(&self) -> AppResult<Box<dyn SnapshotTransaction>> {
        let tx = self
            .pool
            .begin()
            .await
            .map_err(|e| db_error("Failed to begin transaction", e))?;
        Ok(Box::new(PgSnapshotTransaction { tx }))
    }

    async fn list_by_key(&self, key: &str) -> AppResult<Vec<Snapshot>> {
        sqlx::query_as::<_, Snapshot>(&format!(
            r#"SELECT {SNAPSHOT_COLUMNS} FROM tracked_files WHERE "key" = $1 ORDER BY created_at DESC, id DESC"#
        ))
        .bind(key)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("Failed to list snapshots", e))
    }

    async fn ping(&self) -> AppResult<()> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| ())
            .map_err(|e| db_error("Health check failed", e))
    }
}

/// A PostgreSQL transaction. Rolled back by sqlx when dropped uncommitted.
struct PgSnapshotTransaction {
    tx: Transaction<'static, Postgres>,
}

#[async_trait]
impl SnapshotTransaction for PgSnapshotTransaction {
    async fn find_latest_in_window(
        &mut self,
        file_name: &str,
        file_path: &str,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> AppResult<Option<Snapshot>> {
        sqlx::query_as::<_, Snapshot>(&format!(
            r#"SELECT {SNAPSHOT_COLUMNS} FROM tracked_files
               WHERE file_name = $1 AND file_path = $2 AND "timestamp" BETWEEN $3 AND $4
               ORDER BY "timestamp" DESC
               LIMIT 1"#
        ))
        .bind(file_name)
        .bind(file_path)
        .bind(start)
        .bind(end)
        .fetch_optional(&mut *self.tx)
        .await
        .map_err(|e| db_error("Failed to look up recent snapshot", e))
    }

    async fn insert(&mut self, snapshot: &NewSnapshot) -> AppResult<Snapshot> {
        sqlx::query_as::<_, Snapshot>(&format!(
            r#"INSERT INTO tracked_files (file_name, file_path, "key", content, "timestamp")
               VALUES ($1, $2, $3, $4, $5)
               RETURNING {SNAPSHOT_COLUMNS}"#
        ))
        .bind(&snapshot.file_name)
        .bind(&snapshot.file_path)
        .bind(&snapshot.key)
        .bind(&snapshot.content)
        .bind(snapshot.timestamp)
        .fetch_one(&mut *self.tx)
        .await
        .map_err(|e| db_error("Failed to insert snapshot", e))
    }

    async fn commit(self: Box<Self>) -> AppResult<()> {
        self.tx
            .commit()
            .await
            .map_err(|e| db_error("Failed to commit transaction", e))
    }
}

fn db_error(context: &str, e: sqlx::Error) -> AppError {
    AppError::with_source(ErrorKind::Database, format!("{context}: {e}"), e)
}

use crate::models::AnalysisRecord;
use service_core::error::AppError;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::path::Path;

#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    pub async fn connect(path: &str) -> Result<Self, AppError> {
        if let Some(parent) = Path::new(path).parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        tracing::info!(path = %path, "Opening SQLite database");

        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .map_err(|e| {
                tracing::error!("Failed to open SQLite database at {}: {}", path, e);
                AppError::from(e)
            })?;

        Ok(Self { pool })
    }

    pub async fn initialize_schema(&self) -> Result<(), AppError> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS analysis_history (
                id TEXT PRIMARY KEY,
                file_name TEXT,
                ocr_text TEXT NOT NULL,
                width_ft REAL,
                length_ft REAL,
                square_footage REAL,
                created_at TEXT NOT NULL
            )",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS analysis_history_recency
             ON analysis_history (created_at)",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn insert_analysis(&self, record: &AnalysisRecord) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO analysis_history
             (id, file_name, ocr_text, width_ft, length_ft, square_footage, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&record.id)
        .bind(&record.file_name)
        .bind(&record.ocr_text)
        .bind(record.width_ft)
        .bind(record.length_ft)
        .bind(record.square_footage)
        .bind(record.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn recent_analyses(&self, limit: i64) -> Result<Vec<AnalysisRecord>, AppError> {
        let rows = sqlx::query_as::<_, AnalysisRecord>(
            "SELECT id, file_name, ocr_text, width_ft, length_ft, square_footage, created_at
             FROM analysis_history
             ORDER BY created_at DESC
             LIMIT ?",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn health_check(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One row of the upload history.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct UploadRecord {
    pub id: String,
    pub file_name: String,
    pub mime_type: String,
    pub size_bytes: i64,
    pub storage_key: String,
    pub uploaded_at: DateTime<Utc>,
}

impl UploadRecord {
    pub fn new(
        file_name: String,
        mime_type: String,
        size_bytes: i64,
        storage_key: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            file_name,
            mime_type,
            size_bytes,
            storage_key,
            uploaded_at: Utc::now(),
        }
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// The backing table is named `brand` (singular), inherited with the data.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Brand {
    pub id: i64,
    pub name: String,
    pub row_version: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

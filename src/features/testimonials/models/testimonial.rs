use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// Testimonials only record when they arrived; there is no updated_at.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: i64,
    pub name: String,
    pub review: String,
    pub rating_number: i32,
    pub row_version: i64,
    pub created_at: DateTime<Utc>,
}

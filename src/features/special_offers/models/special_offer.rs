use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct SpecialOffer {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub expiry_date: NaiveDate,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub row_version: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

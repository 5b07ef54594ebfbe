use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Product row joined with its category, subcategory and brand names.
///
/// The whole catalog fits in memory, so the table view (search, modified
/// filter, sort, pagination) is derived from this joined set per request.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    /// External shop link; empty string means "no link yet"
    pub link: String,
    pub category_id: i64,
    pub category_name: String,
    pub subcategory_id: i64,
    pub subcategory_name: String,
    pub brand_id: Option<i64>,
    pub brand_name: Option<String>,
    pub image_url: Option<String>,
    pub isedited: bool,
    pub isdeleted: bool,
    pub row_version: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

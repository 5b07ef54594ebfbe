use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::subcategories::models::Subcategory;
use crate::shared::validation::validate_name_not_blank;

// Create request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateSubcategoryDto {
    #[validate(length(min = 1, max = 200), custom(function = validate_name_not_blank))]
    pub name: String,

    /// Category this subcategory belongs to
    #[validate(range(min = 1))]
    pub category_id: i64,
}

// Update request (full overwrite of the editable fields)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateSubcategoryDto {
    #[validate(length(min = 1, max = 200), custom(function = validate_name_not_blank))]
    pub name: String,

    #[validate(range(min = 1))]
    pub category_id: i64,

    /// Version of the row this update was based on
    #[validate(range(min = 1))]
    pub row_version: i64,
}

// Response DTO
#[derive(Debug, Serialize, ToSchema)]
pub struct SubcategoryResponseDto {
    pub id: i64,
    pub name: String,
    pub category_id: i64,
    pub category_name: String,
    pub row_version: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Subcategory> for SubcategoryResponseDto {
    fn from(s: Subcategory) -> Self {
        Self {
            id: s.id,
            name: s.name,
            category_id: s.category_id,
            category_name: s.category_name,
            row_version: s.row_version,
            created_at: s.created_at,
            updated_at: s.updated_at,
        }
    }
}

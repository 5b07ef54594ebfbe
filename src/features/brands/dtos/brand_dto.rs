use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::brands::models::Brand;
use crate::shared::validation::validate_name_not_blank;

// Create request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBrandDto {
    #[validate(length(min = 1, max = 200), custom(function = validate_name_not_blank))]
    pub name: String,
}

// Update request (full overwrite of the editable fields)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateBrandDto {
    #[validate(length(min = 1, max = 200), custom(function = validate_name_not_blank))]
    pub name: String,

    /// Version of the row this update was based on
    #[validate(range(min = 1))]
    pub row_version: i64,
}

// Response DTO
#[derive(Debug, Serialize, ToSchema)]
pub struct BrandResponseDto {
    pub id: i64,
    pub name: String,
    pub row_version: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Brand> for BrandResponseDto {
    fn from(b: Brand) -> Self {
        Self {
            id: b.id,
            name: b.name,
            row_version: b.row_version,
            created_at: b.created_at,
            updated_at: b.updated_at,
        }
    }
}

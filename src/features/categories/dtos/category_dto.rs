use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::categories::models::Category;
use crate::shared::validation::validate_name_not_blank;

// Create request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCategoryDto {
    #[validate(length(min = 1, max = 200), custom(function = validate_name_not_blank))]
    pub name: String,
}

// Update request (full overwrite of the editable fields)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateCategoryDto {
    #[validate(length(min = 1, max = 200), custom(function = validate_name_not_blank))]
    pub name: String,

    /// Version of the row this update was based on
    #[validate(range(min = 1))]
    pub row_version: i64,
}

// Response DTO
#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryResponseDto {
    pub id: i64,
    pub name: String,
    pub row_version: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Category> for CategoryResponseDto {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            name: c.name,
            row_version: c.row_version,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_name_fails_validation() {
        let dto = CreateCategoryDto {
            name: "   ".to_string(),
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn plain_name_passes_validation() {
        let dto = CreateCategoryDto {
            name: "Electrónica".to_string(),
        };
        assert!(dto.validate().is_ok());
    }
}

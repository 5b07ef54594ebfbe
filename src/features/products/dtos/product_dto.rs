use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::features::products::models::Product;
use crate::shared::constants::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use crate::shared::validation::{validate_link_or_empty, validate_name_not_blank, validate_price};

fn default_page() -> i64 {
    1
}

fn default_page_size() -> i64 {
    DEFAULT_PAGE_SIZE
}

// Query params for the product table view
#[derive(Debug, Clone, Deserialize, IntoParams, ToSchema)]
pub struct ProductQueryParams {
    /// Page number (1-indexed)
    #[serde(default = "default_page")]
    #[param(minimum = 1)]
    pub page: i64,

    /// Items per page
    #[serde(default = "default_page_size")]
    #[param(minimum = 1, maximum = 100)]
    pub page_size: i64,

    /// Free-text search across name, description, price, link and the
    /// category/subcategory names
    pub search: Option<String>,

    /// Narrow to rows needing attention: missing link, soft-deleted or
    /// marked edited
    pub modified: Option<bool>,
}

impl ProductQueryParams {
    pub fn limit(&self) -> i64 {
        self.page_size.clamp(1, MAX_PAGE_SIZE)
    }
}

// Create request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateProductDto {
    #[validate(length(min = 1, max = 200), custom(function = validate_name_not_blank))]
    pub name: String,

    #[validate(length(min = 1, max = 5000))]
    pub description: String,

    #[validate(custom(function = validate_price))]
    pub price: Decimal,

    /// External shop link; may be added later
    #[serde(default)]
    #[validate(custom(function = validate_link_or_empty))]
    pub link: String,

    #[validate(range(min = 1))]
    pub category_id: i64,

    #[validate(range(min = 1))]
    pub subcategory_id: i64,

    pub brand_id: Option<i64>,
}

// Update request (full overwrite of the editable fields)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateProductDto {
    #[validate(length(min = 1, max = 200), custom(function = validate_name_not_blank))]
    pub name: String,

    #[validate(length(min = 1, max = 5000))]
    pub description: String,

    #[validate(custom(function = validate_price))]
    pub price: Decimal,

    #[validate(custom(function = validate_link_or_empty))]
    pub link: String,

    #[validate(range(min = 1))]
    pub category_id: i64,

    #[validate(range(min = 1))]
    pub subcategory_id: i64,

    pub brand_id: Option<i64>,

    /// Whether the row still carries pending manual edits
    pub isedited: bool,

    /// Version of the row this update was based on
    #[validate(range(min = 1))]
    pub row_version: i64,
}

/// Body for the trash/restore toggles
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RowVersionDto {
    /// Version of the row this change was based on
    #[validate(range(min = 1))]
    pub row_version: i64,
}

/// Image upload form for OpenAPI documentation.
/// The handler reads the multipart body directly.
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct ProductImageUploadDto {
    /// The image to attach (JPEG, PNG, WebP or GIF)
    #[schema(format = Binary, content_media_type = "application/octet-stream")]
    pub file: String,
    /// Version of the row this upload was based on
    pub row_version: i64,
}

// Response DTO
#[derive(Debug, Serialize, ToSchema)]
pub struct ProductResponseDto {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: Decimal,
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

impl From<Product> for ProductResponseDto {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            name: p.name,
            description: p.description,
            price: p.price,
            link: p.link,
            category_id: p.category_id,
            category_name: p.category_name,
            subcategory_id: p.subcategory_id,
            subcategory_name: p.subcategory_name,
            brand_id: p.brand_id,
            brand_name: p.brand_name,
            image_url: p.image_url,
            isedited: p.isedited,
            isdeleted: p.isdeleted,
            row_version: p.row_version,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_link_fails_validation() {
        let dto = CreateProductDto {
            name: "Taladro".to_string(),
            description: "Taladro inalámbrico 12V".to_string(),
            price: Decimal::new(49999, 2),
            link: "not a url".to_string(),
            category_id: 1,
            subcategory_id: 1,
            brand_id: None,
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn empty_link_is_accepted() {
        let dto = CreateProductDto {
            name: "Taladro".to_string(),
            description: "Taladro inalámbrico 12V".to_string(),
            price: Decimal::new(49999, 2),
            link: String::new(),
            category_id: 1,
            subcategory_id: 1,
            brand_id: None,
        };
        assert!(dto.validate().is_ok());
    }
}

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::special_offers::models::SpecialOffer;
use crate::shared::validation::{validate_name_not_blank, validate_price};

fn default_active() -> bool {
    true
}

// Create request; a new offer is active unless the caller says otherwise
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateSpecialOfferDto {
    #[validate(length(min = 1, max = 200), custom(function = validate_name_not_blank))]
    pub name: String,

    #[validate(length(min = 1, max = 2000))]
    pub description: String,

    #[validate(custom(function = validate_price))]
    pub price: Decimal,

    pub expiry_date: NaiveDate,

    #[serde(default = "default_active")]
    pub is_active: bool,
}

// Update request (full overwrite of the editable fields)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateSpecialOfferDto {
    #[validate(length(min = 1, max = 200), custom(function = validate_name_not_blank))]
    pub name: String,

    #[validate(length(min = 1, max = 2000))]
    pub description: String,

    #[validate(custom(function = validate_price))]
    pub price: Decimal,

    pub expiry_date: NaiveDate,

    pub is_active: bool,

    /// Version of the row this update was based on
    #[validate(range(min = 1))]
    pub row_version: i64,
}

/// Image upload form for OpenAPI documentation.
/// The handler reads the multipart body directly.
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct OfferImageUploadDto {
    /// The image to attach (JPEG, PNG, WebP or GIF)
    #[schema(format = Binary, content_media_type = "application/octet-stream")]
    pub file: String,
    /// Version of the row this upload was based on
    pub row_version: i64,
}

// Response DTO
#[derive(Debug, Serialize, ToSchema)]
pub struct SpecialOfferResponseDto {
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

impl From<SpecialOffer> for SpecialOfferResponseDto {
    fn from(o: SpecialOffer) -> Self {
        Self {
            id: o.id,
            name: o.name,
            description: o.description,
            price: o.price,
            expiry_date: o.expiry_date,
            image_url: o.image_url,
            is_active: o.is_active,
            row_version: o.row_version,
            created_at: o.created_at,
            updated_at: o.updated_at,
        }
    }
}

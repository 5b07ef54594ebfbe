use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::testimonials::models::Testimonial;
use crate::shared::validation::validate_name_not_blank;

// Create request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateTestimonialDto {
    #[validate(length(min = 1, max = 200), custom(function = validate_name_not_blank))]
    pub name: String,

    #[validate(length(min = 1, max = 2000))]
    pub review: String,

    /// Star rating, 1 through 5
    #[validate(range(min = 1, max = 5))]
    pub rating_number: i32,
}

// Update request (full overwrite of the editable fields)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateTestimonialDto {
    #[validate(length(min = 1, max = 200), custom(function = validate_name_not_blank))]
    pub name: String,

    #[validate(length(min = 1, max = 2000))]
    pub review: String,

    #[validate(range(min = 1, max = 5))]
    pub rating_number: i32,

    /// Version of the row this update was based on
    #[validate(range(min = 1))]
    pub row_version: i64,
}

// Response DTO
#[derive(Debug, Serialize, ToSchema)]
pub struct TestimonialResponseDto {
    pub id: i64,
    pub name: String,
    pub review: String,
    pub rating_number: i32,
    pub row_version: i64,
    pub created_at: DateTime<Utc>,
}

impl From<Testimonial> for TestimonialResponseDto {
    fn from(t: Testimonial) -> Self {
        Self {
            id: t.id,
            name: t.name,
            review: t.review,
            rating_number: t.rating_number,
            row_version: t.row_version,
            created_at: t.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_outside_one_to_five_fails_validation() {
        let mut dto = CreateTestimonialDto {
            name: "Ana".to_string(),
            review: "Muy buen servicio".to_string(),
            rating_number: 0,
        };
        assert!(dto.validate().is_err());

        dto.rating_number = 6;
        assert!(dto.validate().is_err());

        dto.rating_number = 5;
        assert!(dto.validate().is_ok());
    }
}

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::testimonials::dtos::{
    CreateTestimonialDto, TestimonialResponseDto, UpdateTestimonialDto,
};
use crate::features::testimonials::services::TestimonialService;
use crate::shared::types::{ApiResponse, Meta, PaginationQuery};

/// List testimonials, newest first
#[utoipa::path(
    get,
    path = "/api/testimonials",
    params(PaginationQuery),
    responses(
        (status = 200, description = "Testimonials retrieved successfully", body = ApiResponse<Vec<TestimonialResponseDto>>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "testimonials",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_testimonials(
    State(service): State<Arc<TestimonialService>>,
    Query(params): Query<PaginationQuery>,
) -> Result<Json<ApiResponse<Vec<TestimonialResponseDto>>>> {
    let (testimonials, total) = service.list(&params).await?;
    Ok(Json(ApiResponse::success(
        Some(testimonials),
        None,
        Some(Meta { total }),
    )))
}

/// Create a new testimonial
#[utoipa::path(
    post,
    path = "/api/testimonials",
    request_body = CreateTestimonialDto,
    responses(
        (status = 201, description = "Testimonial created successfully", body = ApiResponse<TestimonialResponseDto>),
        (status = 400, description = "Validation error")
    ),
    tag = "testimonials",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_testimonial(
    State(service): State<Arc<TestimonialService>>,
    AppJson(dto): AppJson<CreateTestimonialDto>,
) -> Result<(StatusCode, Json<ApiResponse<TestimonialResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let testimonial = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(testimonial), None, None)),
    ))
}

/// Update a testimonial
#[utoipa::path(
    put,
    path = "/api/testimonials/{id}",
    params(
        ("id" = i64, Path, description = "Testimonial ID")
    ),
    request_body = UpdateTestimonialDto,
    responses(
        (status = 200, description = "Testimonial updated successfully", body = ApiResponse<TestimonialResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Testimonial not found"),
        (status = 409, description = "Testimonial was changed by another request")
    ),
    tag = "testimonials",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_testimonial(
    State(service): State<Arc<TestimonialService>>,
    Path(id): Path<i64>,
    AppJson(dto): AppJson<UpdateTestimonialDto>,
) -> Result<Json<ApiResponse<TestimonialResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let testimonial = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(testimonial), None, None)))
}

/// Delete a testimonial
#[utoipa::path(
    delete,
    path = "/api/testimonials/{id}",
    params(
        ("id" = i64, Path, description = "Testimonial ID")
    ),
    responses(
        (status = 200, description = "Testimonial deleted successfully"),
        (status = 404, description = "Testimonial not found")
    ),
    tag = "testimonials",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete_testimonial(
    State(service): State<Arc<TestimonialService>>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(None, None, None)))
}

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::subcategories::dtos::{
    CreateSubcategoryDto, SubcategoryResponseDto, UpdateSubcategoryDto,
};
use crate::features::subcategories::services::SubcategoryService;
use crate::shared::types::{ApiResponse, Meta, PaginationQuery};

/// List subcategories with their category names
#[utoipa::path(
    get,
    path = "/api/subcategories",
    params(PaginationQuery),
    responses(
        (status = 200, description = "Subcategories retrieved successfully", body = ApiResponse<Vec<SubcategoryResponseDto>>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "subcategories",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_subcategories(
    State(service): State<Arc<SubcategoryService>>,
    Query(params): Query<PaginationQuery>,
) -> Result<Json<ApiResponse<Vec<SubcategoryResponseDto>>>> {
    let (subcategories, total) = service.list(&params).await?;
    Ok(Json(ApiResponse::success(
        Some(subcategories),
        None,
        Some(Meta { total }),
    )))
}

/// Create a new subcategory
#[utoipa::path(
    post,
    path = "/api/subcategories",
    request_body = CreateSubcategoryDto,
    responses(
        (status = 201, description = "Subcategory created successfully", body = ApiResponse<SubcategoryResponseDto>),
        (status = 400, description = "Validation error or missing category"),
        (status = 409, description = "A subcategory with this name already exists")
    ),
    tag = "subcategories",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_subcategory(
    State(service): State<Arc<SubcategoryService>>,
    AppJson(dto): AppJson<CreateSubcategoryDto>,
) -> Result<(StatusCode, Json<ApiResponse<SubcategoryResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let subcategory = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(subcategory), None, None)),
    ))
}

/// Update a subcategory's name and/or category
#[utoipa::path(
    put,
    path = "/api/subcategories/{id}",
    params(
        ("id" = i64, Path, description = "Subcategory ID")
    ),
    request_body = UpdateSubcategoryDto,
    responses(
        (status = 200, description = "Subcategory updated successfully", body = ApiResponse<SubcategoryResponseDto>),
        (status = 400, description = "Validation error or missing category"),
        (status = 404, description = "Subcategory not found"),
        (status = 409, description = "Subcategory was changed by another request")
    ),
    tag = "subcategories",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_subcategory(
    State(service): State<Arc<SubcategoryService>>,
    Path(id): Path<i64>,
    AppJson(dto): AppJson<UpdateSubcategoryDto>,
) -> Result<Json<ApiResponse<SubcategoryResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let subcategory = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(subcategory), None, None)))
}

/// Delete a subcategory
#[utoipa::path(
    delete,
    path = "/api/subcategories/{id}",
    params(
        ("id" = i64, Path, description = "Subcategory ID")
    ),
    responses(
        (status = 200, description = "Subcategory deleted successfully"),
        (status = 400, description = "Subcategory is still referenced"),
        (status = 404, description = "Subcategory not found")
    ),
    tag = "subcategories",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete_subcategory(
    State(service): State<Arc<SubcategoryService>>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(None, None, None)))
}

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::brands::dtos::{BrandResponseDto, CreateBrandDto, UpdateBrandDto};
use crate::features::brands::services::BrandService;
use crate::shared::types::{ApiResponse, Meta, PaginationQuery};

/// List brands ordered by name
#[utoipa::path(
    get,
    path = "/api/brands",
    params(PaginationQuery),
    responses(
        (status = 200, description = "Brands retrieved successfully", body = ApiResponse<Vec<BrandResponseDto>>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "brands",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_brands(
    State(service): State<Arc<BrandService>>,
    Query(params): Query<PaginationQuery>,
) -> Result<Json<ApiResponse<Vec<BrandResponseDto>>>> {
    let (brands, total) = service.list(&params).await?;
    Ok(Json(ApiResponse::success(
        Some(brands),
        None,
        Some(Meta { total }),
    )))
}

/// Create a new brand
#[utoipa::path(
    post,
    path = "/api/brands",
    request_body = CreateBrandDto,
    responses(
        (status = 201, description = "Brand created successfully", body = ApiResponse<BrandResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 409, description = "A brand with this name already exists")
    ),
    tag = "brands",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_brand(
    State(service): State<Arc<BrandService>>,
    AppJson(dto): AppJson<CreateBrandDto>,
) -> Result<(StatusCode, Json<ApiResponse<BrandResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let brand = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(brand), None, None)),
    ))
}

/// Rename a brand
#[utoipa::path(
    put,
    path = "/api/brands/{id}",
    params(
        ("id" = i64, Path, description = "Brand ID")
    ),
    request_body = UpdateBrandDto,
    responses(
        (status = 200, description = "Brand updated successfully", body = ApiResponse<BrandResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Brand not found"),
        (status = 409, description = "Brand was changed by another request")
    ),
    tag = "brands",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_brand(
    State(service): State<Arc<BrandService>>,
    Path(id): Path<i64>,
    AppJson(dto): AppJson<UpdateBrandDto>,
) -> Result<Json<ApiResponse<BrandResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let brand = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(brand), None, None)))
}

/// Delete a brand
#[utoipa::path(
    delete,
    path = "/api/brands/{id}",
    params(
        ("id" = i64, Path, description = "Brand ID")
    ),
    responses(
        (status = 200, description = "Brand deleted successfully"),
        (status = 400, description = "Brand is still referenced"),
        (status = 404, description = "Brand not found")
    ),
    tag = "brands",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete_brand(
    State(service): State<Arc<BrandService>>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(None, None, None)))
}

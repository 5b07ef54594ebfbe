use std::sync::Arc;

use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::products::dtos::{
    CreateProductDto, ProductImageUploadDto, ProductQueryParams, ProductResponseDto,
    RowVersionDto, UpdateProductDto,
};
use crate::features::products::services::ProductService;
use crate::shared::multipart::read_image_upload;
use crate::shared::types::{ApiResponse, Meta};

/// List products as the admin table sees them
///
/// Without `modified=true` the view hides trashed rows; with it the view
/// holds only rows that still need attention (no link, trashed, or edited).
#[utoipa::path(
    get,
    path = "/api/products",
    params(ProductQueryParams),
    responses(
        (status = 200, description = "Products retrieved successfully", body = ApiResponse<Vec<ProductResponseDto>>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "products",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_products(
    State(service): State<Arc<ProductService>>,
    Query(params): Query<ProductQueryParams>,
) -> Result<Json<ApiResponse<Vec<ProductResponseDto>>>> {
    let (products, total) = service.list(&params).await?;
    Ok(Json(ApiResponse::success(
        Some(products),
        None,
        Some(Meta { total }),
    )))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "/api/products",
    request_body = CreateProductDto,
    responses(
        (status = 201, description = "Product created successfully", body = ApiResponse<ProductResponseDto>),
        (status = 400, description = "Validation error or subcategory outside the category"),
        (status = 409, description = "A product with this name already exists")
    ),
    tag = "products",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_product(
    State(service): State<Arc<ProductService>>,
    AppJson(dto): AppJson<CreateProductDto>,
) -> Result<(StatusCode, Json<ApiResponse<ProductResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let product = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(product), None, None)),
    ))
}

/// Update a product
#[utoipa::path(
    put,
    path = "/api/products/{id}",
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    request_body = UpdateProductDto,
    responses(
        (status = 200, description = "Product updated successfully", body = ApiResponse<ProductResponseDto>),
        (status = 400, description = "Validation error or subcategory outside the category"),
        (status = 404, description = "Product not found"),
        (status = 409, description = "Product was changed by another request")
    ),
    tag = "products",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_product(
    State(service): State<Arc<ProductService>>,
    Path(id): Path<i64>,
    AppJson(dto): AppJson<UpdateProductDto>,
) -> Result<Json<ApiResponse<ProductResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let product = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(product), None, None)))
}

/// Move a product to the trash
///
/// The row stays in the database with `isdeleted = true` and disappears
/// from the normal listing.
#[utoipa::path(
    patch,
    path = "/api/products/{id}/trash",
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    request_body = RowVersionDto,
    responses(
        (status = 200, description = "Product moved to the trash", body = ApiResponse<ProductResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Product not found"),
        (status = 409, description = "Product was changed by another request")
    ),
    tag = "products",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn trash_product(
    State(service): State<Arc<ProductService>>,
    Path(id): Path<i64>,
    AppJson(dto): AppJson<RowVersionDto>,
) -> Result<Json<ApiResponse<ProductResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let product = service.set_deleted(id, dto.row_version, true).await?;
    Ok(Json(ApiResponse::success(Some(product), None, None)))
}

/// Bring a trashed product back into the catalog
#[utoipa::path(
    patch,
    path = "/api/products/{id}/restore",
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    request_body = RowVersionDto,
    responses(
        (status = 200, description = "Product restored", body = ApiResponse<ProductResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Product not found"),
        (status = 409, description = "Product was changed by another request")
    ),
    tag = "products",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn restore_product(
    State(service): State<Arc<ProductService>>,
    Path(id): Path<i64>,
    AppJson(dto): AppJson<RowVersionDto>,
) -> Result<Json<ApiResponse<ProductResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let product = service.set_deleted(id, dto.row_version, false).await?;
    Ok(Json(ApiResponse::success(Some(product), None, None)))
}

/// Attach or replace the product image
///
/// Accepts multipart/form-data with:
/// - `file`: the image (required)
/// - `row_version`: version of the row this upload was based on (required)
#[utoipa::path(
    post,
    path = "/api/products/{id}/image",
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    request_body(
        content = ProductImageUploadDto,
        content_type = "multipart/form-data",
        description = "Image upload form",
    ),
    responses(
        (status = 200, description = "Image attached successfully", body = ApiResponse<ProductResponseDto>),
        (status = 400, description = "Invalid image or form"),
        (status = 404, description = "Product not found"),
        (status = 409, description = "Product was changed by another request"),
        (status = 502, description = "Storage failure")
    ),
    tag = "products",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn upload_product_image(
    State(service): State<Arc<ProductService>>,
    Path(id): Path<i64>,
    multipart: Multipart,
) -> Result<Json<ApiResponse<ProductResponseDto>>> {
    let upload = read_image_upload(multipart).await?;

    let product = service
        .attach_image(id, upload.row_version, upload.data, &upload.content_type)
        .await?;
    Ok(Json(ApiResponse::success(Some(product), None, None)))
}

/// Remove a product permanently, stored image included
#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product removed permanently"),
        (status = 404, description = "Product not found"),
        (status = 502, description = "Storage failure")
    ),
    tag = "products",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete_product(
    State(service): State<Arc<ProductService>>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>> {
    service.purge(id).await?;
    Ok(Json(ApiResponse::success(None, None, None)))
}

use std::sync::Arc;

use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::special_offers::dtos::{
    CreateSpecialOfferDto, OfferImageUploadDto, SpecialOfferResponseDto, UpdateSpecialOfferDto,
};
use crate::features::special_offers::services::SpecialOfferService;
use crate::shared::multipart::read_image_upload;
use crate::shared::types::{ApiResponse, Meta, PaginationQuery};

/// List special offers ordered by name
#[utoipa::path(
    get,
    path = "/api/special-offers",
    params(PaginationQuery),
    responses(
        (status = 200, description = "Special offers retrieved successfully", body = ApiResponse<Vec<SpecialOfferResponseDto>>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "special-offers",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_special_offers(
    State(service): State<Arc<SpecialOfferService>>,
    Query(params): Query<PaginationQuery>,
) -> Result<Json<ApiResponse<Vec<SpecialOfferResponseDto>>>> {
    let (offers, total) = service.list(&params).await?;
    Ok(Json(ApiResponse::success(
        Some(offers),
        None,
        Some(Meta { total }),
    )))
}

/// Create a new special offer
#[utoipa::path(
    post,
    path = "/api/special-offers",
    request_body = CreateSpecialOfferDto,
    responses(
        (status = 201, description = "Special offer created successfully", body = ApiResponse<SpecialOfferResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Another special offer is already active")
    ),
    tag = "special-offers",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_special_offer(
    State(service): State<Arc<SpecialOfferService>>,
    AppJson(dto): AppJson<CreateSpecialOfferDto>,
) -> Result<(StatusCode, Json<ApiResponse<SpecialOfferResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let offer = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(offer), None, None)),
    ))
}

/// Update a special offer
#[utoipa::path(
    put,
    path = "/api/special-offers/{id}",
    params(
        ("id" = i64, Path, description = "Special offer ID")
    ),
    request_body = UpdateSpecialOfferDto,
    responses(
        (status = 200, description = "Special offer updated successfully", body = ApiResponse<SpecialOfferResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Special offer not found"),
        (status = 409, description = "Version conflict or another offer is already active")
    ),
    tag = "special-offers",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_special_offer(
    State(service): State<Arc<SpecialOfferService>>,
    Path(id): Path<i64>,
    AppJson(dto): AppJson<UpdateSpecialOfferDto>,
) -> Result<Json<ApiResponse<SpecialOfferResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let offer = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(offer), None, None)))
}

/// Attach or replace the offer image
///
/// Accepts multipart/form-data with:
/// - `file`: the image (required)
/// - `row_version`: version of the row this upload was based on (required)
#[utoipa::path(
    post,
    path = "/api/special-offers/{id}/image",
    params(
        ("id" = i64, Path, description = "Special offer ID")
    ),
    request_body(
        content = OfferImageUploadDto,
        content_type = "multipart/form-data",
        description = "Image upload form",
    ),
    responses(
        (status = 200, description = "Image attached successfully", body = ApiResponse<SpecialOfferResponseDto>),
        (status = 400, description = "Invalid image or form"),
        (status = 404, description = "Special offer not found"),
        (status = 409, description = "Special offer was changed by another request"),
        (status = 502, description = "Storage failure")
    ),
    tag = "special-offers",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn upload_special_offer_image(
    State(service): State<Arc<SpecialOfferService>>,
    Path(id): Path<i64>,
    multipart: Multipart,
) -> Result<Json<ApiResponse<SpecialOfferResponseDto>>> {
    let upload = read_image_upload(multipart).await?;

    let offer = service
        .attach_image(id, upload.row_version, upload.data, &upload.content_type)
        .await?;
    Ok(Json(ApiResponse::success(Some(offer), None, None)))
}

/// Delete a special offer and its stored image
#[utoipa::path(
    delete,
    path = "/api/special-offers/{id}",
    params(
        ("id" = i64, Path, description = "Special offer ID")
    ),
    responses(
        (status = 200, description = "Special offer deleted successfully"),
        (status = 404, description = "Special offer not found"),
        (status = 502, description = "Storage failure")
    ),
    tag = "special-offers",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete_special_offer(
    State(service): State<Arc<SpecialOfferService>>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(None, None, None)))
}

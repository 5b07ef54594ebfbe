use std::sync::Arc;

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};

use crate::core::error::Result;
use crate::features::products::services::ExportService;
use crate::shared::constants::SPREADSHEET_EXPORT_FILENAME;

/// Download every live product link, one per line
#[utoipa::path(
    get,
    path = "/api/products/export/links",
    responses(
        (status = 200, description = "Links exported as plain text", body = String, content_type = "text/plain"),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "Some products still need a link or carry pending edits")
    ),
    tag = "products",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn export_links(State(service): State<Arc<ExportService>>) -> Result<Response> {
    let body = service.export_links().await?;
    Ok(([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], body).into_response())
}

/// Download the catalog as a CSV of product name and price
#[utoipa::path(
    get,
    path = "/api/products/export/spreadsheet",
    responses(
        (status = 200, description = "Spreadsheet exported as CSV", body = String, content_type = "text/csv"),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "Some products still need a link or carry pending edits")
    ),
    tag = "products",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn export_spreadsheet(State(service): State<Arc<ExportService>>) -> Result<Response> {
    let body = service.export_spreadsheet().await?;
    let disposition = format!("attachment; filename=\"{}\"", SPREADSHEET_EXPORT_FILENAME);
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    )
        .into_response())
}

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, patch, post, put},
    Router,
};

use crate::features::products::handlers;
use crate::features::products::services::{ExportService, ProductService};
use crate::shared::constants::MAX_IMAGE_SIZE;

/// Protected routes for product management and exports.
///
/// The export paths use static segments, so they never collide with the
/// `{id}` routes.
pub fn protected_routes(
    product_service: Arc<ProductService>,
    export_service: Arc<ExportService>,
) -> Router {
    let products = Router::new()
        .route(
            "/api/products",
            get(handlers::get_products).post(handlers::create_product),
        )
        .route(
            "/api/products/{id}",
            put(handlers::update_product).delete(handlers::delete_product),
        )
        .route("/api/products/{id}/trash", patch(handlers::trash_product))
        .route(
            "/api/products/{id}/restore",
            patch(handlers::restore_product),
        )
        .route(
            "/api/products/{id}/image",
            post(handlers::upload_product_image)
                .layer(DefaultBodyLimit::max(MAX_IMAGE_SIZE + 1024 * 1024)),
        )
        .with_state(product_service);

    let exports = Router::new()
        .route("/api/products/export/links", get(handlers::export_links))
        .route(
            "/api/products/export/spreadsheet",
            get(handlers::export_spreadsheet),
        )
        .with_state(export_service);

    products.merge(exports)
}

use std::sync::Arc;

use axum::{
    routing::{get, put},
    Router,
};

use crate::features::brands::handlers;
use crate::features::brands::services::BrandService;

/// Protected routes for brand management
pub fn protected_routes(service: Arc<BrandService>) -> Router {
    Router::new()
        .route(
            "/api/brands",
            get(handlers::list_brands).post(handlers::create_brand),
        )
        .route(
            "/api/brands/{id}",
            put(handlers::update_brand).delete(handlers::delete_brand),
        )
        .with_state(service)
}

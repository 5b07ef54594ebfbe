use std::sync::Arc;

use axum::{
    routing::{get, put},
    Router,
};

use crate::features::subcategories::handlers;
use crate::features::subcategories::services::SubcategoryService;

/// Protected routes for subcategory management
pub fn protected_routes(service: Arc<SubcategoryService>) -> Router {
    Router::new()
        .route(
            "/api/subcategories",
            get(handlers::list_subcategories).post(handlers::create_subcategory),
        )
        .route(
            "/api/subcategories/{id}",
            put(handlers::update_subcategory).delete(handlers::delete_subcategory),
        )
        .with_state(service)
}

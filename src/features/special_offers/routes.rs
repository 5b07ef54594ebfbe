use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post, put},
    Router,
};

use crate::features::special_offers::handlers;
use crate::features::special_offers::services::SpecialOfferService;
use crate::shared::constants::MAX_IMAGE_SIZE;

/// Protected routes for special offer management
pub fn protected_routes(service: Arc<SpecialOfferService>) -> Router {
    Router::new()
        .route(
            "/api/special-offers",
            get(handlers::list_special_offers).post(handlers::create_special_offer),
        )
        .route(
            "/api/special-offers/{id}",
            put(handlers::update_special_offer).delete(handlers::delete_special_offer),
        )
        .route(
            "/api/special-offers/{id}/image",
            post(handlers::upload_special_offer_image)
                .layer(DefaultBodyLimit::max(MAX_IMAGE_SIZE + 1024 * 1024)),
        )
        .with_state(service)
}

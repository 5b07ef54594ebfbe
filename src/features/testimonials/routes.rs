use std::sync::Arc;

use axum::{
    routing::{get, put},
    Router,
};

use crate::features::testimonials::handlers;
use crate::features::testimonials::services::TestimonialService;

/// Protected routes for testimonial management
pub fn protected_routes(service: Arc<TestimonialService>) -> Router {
    Router::new()
        .route(
            "/api/testimonials",
            get(handlers::list_testimonials).post(handlers::create_testimonial),
        )
        .route(
            "/api/testimonials/{id}",
            put(handlers::update_testimonial).delete(handlers::delete_testimonial),
        )
        .with_state(service)
}

//! Customer testimonials.
//!
//! Name, review text and a 1-5 star rating. The rating bound is checked
//! before the write; the schema does not constrain it. Lists come back
//! newest first.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/testimonials` | List testimonials (paginated, newest first) |
//! | POST | `/api/testimonials` | Create a testimonial |
//! | PUT | `/api/testimonials/{id}` | Update a testimonial |
//! | DELETE | `/api/testimonials/{id}` | Delete a testimonial |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::TestimonialService;

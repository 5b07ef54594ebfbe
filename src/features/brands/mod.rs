//! Product brands.
//!
//! Optional product attribute; the backing table is named `brand`
//! (singular), inherited with the data.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/brands` | List brands (paginated, by name) |
//! | POST | `/api/brands` | Create a brand |
//! | PUT | `/api/brands/{id}` | Rename a brand |
//! | DELETE | `/api/brands/{id}` | Delete a brand |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::BrandService;

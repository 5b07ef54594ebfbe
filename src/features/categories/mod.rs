//! Product categories.
//!
//! Top level of the catalog taxonomy. Subcategories and products reference
//! categories by id, so a category that is still referenced cannot be
//! deleted. Names are unique case-insensitively at creation time.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/categories` | List categories (paginated, by name) |
//! | POST | `/api/categories` | Create a category |
//! | PUT | `/api/categories/{id}` | Rename a category |
//! | DELETE | `/api/categories/{id}` | Delete a category |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::CategoryService;

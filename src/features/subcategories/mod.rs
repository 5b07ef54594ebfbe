//! Product subcategories.
//!
//! Second level of the catalog taxonomy; every subcategory belongs to a
//! category and lists carry the category name alongside each row.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/subcategories` | List subcategories (paginated, by name) |
//! | POST | `/api/subcategories` | Create a subcategory |
//! | PUT | `/api/subcategories/{id}` | Update name and/or category |
//! | DELETE | `/api/subcategories/{id}` | Delete a subcategory |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::SubcategoryService;

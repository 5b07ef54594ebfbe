//! Product catalog.
//!
//! The heart of the back office. Products join their category, subcategory
//! and optional brand; the table view (search across fields, "needs
//! attention" filter, name sort, pagination) is derived in memory from the
//! full joined set on every request. Day-to-day removal is a soft-delete
//! flag; the hard delete also removes the stored image. Two export
//! downloads exist, and both refuse to run while any live product is
//! missing its link or carries pending edits.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/products` | Table view (search, modified filter, paginated) |
//! | POST | `/api/products` | Create a product |
//! | PUT | `/api/products/{id}` | Update a product |
//! | PATCH | `/api/products/{id}/trash` | Move a product to the trash |
//! | PATCH | `/api/products/{id}/restore` | Bring a trashed product back |
//! | POST | `/api/products/{id}/image` | Attach or replace the image |
//! | DELETE | `/api/products/{id}` | Remove permanently, image included |
//! | GET | `/api/products/export/links` | Download the links as plain text |
//! | GET | `/api/products/export/spreadsheet` | Download the CSV spreadsheet |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::{ExportService, ProductService};

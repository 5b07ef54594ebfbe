//! Special offers.
//!
//! Promotional entries with a price, an expiry date and an optional stored
//! image. At most one offer is active at a time: activating an offer while
//! a different one is active is refused by a pre-write check (the offer
//! being edited may itself stay active). Deleting an offer removes its
//! stored image first.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/special-offers` | List offers (paginated, by name) |
//! | POST | `/api/special-offers` | Create an offer |
//! | PUT | `/api/special-offers/{id}` | Update an offer |
//! | POST | `/api/special-offers/{id}/image` | Attach or replace the image |
//! | DELETE | `/api/special-offers/{id}` | Delete an offer and its image |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::SpecialOfferService;

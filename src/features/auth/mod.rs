//! Operator authentication feature.
//!
//! The back office has a single operator account configured through the
//! environment; there is no user table. Login checks the submitted
//! credential and answers with a signed HS256 session token, which the
//! protected routes verify on every request.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/auth/login` | Login with the operator credential |
//! | GET | `/api/auth/me` | Describe the current session |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::{AuthService, TokenService};

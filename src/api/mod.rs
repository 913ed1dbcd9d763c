//! API Module
//!
//! HTTP handlers and routing that expose a cache engine over REST.
//!
//! # Endpoints
//! - `PUT /cache/:key` - Store a payload
//! - `GET /cache/:key` - Retrieve a payload
//! - `DELETE /cache/:key` - Delete a key
//! - `POST /invalidate/:tag` - Invalidate entries by tag
//! - `GET /stats` - Get cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;

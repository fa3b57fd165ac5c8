//! # HTTP Server Module
//!
//! Axum server combining the per-resource routers into the public API.
//!
//! # Endpoints
//!
//! - `/api` - Endpoint documentation
//! - `/api/topics` - Topics
//! - `/api/users` - Users
//! - `/api/articles` - Articles, their votes, and their comments
//! - `/api/comments` - Comment deletion

pub mod api_routes;
pub mod articles_routes;
pub mod comments_routes;
pub mod server;
pub mod topics_routes;
pub mod users_routes;

pub use server::{AppState, HttpServer};

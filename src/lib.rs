//! newswire - REST API backend for a community news site
//!
//! Readers browse articles by topic, vote on them, and attach comments.

pub mod cli;
pub mod config;
pub mod error;
pub mod http_server;
pub mod store;

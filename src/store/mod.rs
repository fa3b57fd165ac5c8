//! # Store
//!
//! SQLite-backed persistence for topics, users, articles, and comments.
//!
//! The store owns all request validation that touches data: sort/order
//! parsing for article listings, existence checks, and the failure values
//! handlers pass straight back to clients. HTTP handlers stay thin.

mod articles;
mod comments;
mod db;
mod query;
mod seed;
mod topics;
mod types;
mod users;

pub use db::Store;
pub use query::{ArticleSort, SortOrder};
pub use types::{Article, ArticleWithCommentCount, Comment, Topic, User};

//! Row types shared by the store and the HTTP layer.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// A topic articles are filed under
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Topic {
    pub slug: String,
    pub description: String,
}

/// A registered user
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub username: String,
    pub name: String,
    pub avatar_url: Option<String>,
}

/// An article row as stored
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Article {
    pub article_id: i64,
    pub title: String,
    pub topic: String,
    pub author: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub votes: i64,
}

/// An article annotated with its derived comment count.
///
/// `comment_count` is computed per query (COUNT over the comments join),
/// never stored.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ArticleWithCommentCount {
    pub article_id: i64,
    pub title: String,
    pub topic: String,
    pub author: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub votes: i64,
    pub comment_count: i64,
}

/// A comment on an article
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Comment {
    pub comment_id: i64,
    pub article_id: i64,
    pub author: String,
    pub body: String,
    pub votes: i64,
    pub created_at: DateTime<Utc>,
}

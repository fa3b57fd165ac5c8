//! Article HTTP Routes
//!
//! Listings, single-article lookup, vote mutation, and an article's
//! comments. Handlers stay thin: id parsing and body-shape checks here,
//! everything that touches data in the store.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, patch, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ApiError;
use crate::store::{Article, ArticleWithCommentCount, Comment};

use super::server::AppState;

// ==================
// Request/Response Types
// ==================

#[derive(Debug, Deserialize)]
pub struct ArticleListQuery {
    #[serde(default)]
    pub sort_by: Option<String>,
    #[serde(default)]
    pub order: Option<String>,
    #[serde(default)]
    pub topic: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ArticlesResponse {
    pub articles: Vec<ArticleWithCommentCount>,
}

#[derive(Debug, Serialize)]
pub struct ArticleResponse {
    pub article: ArticleWithCommentCount,
}

#[derive(Debug, Serialize)]
pub struct UpdatedArticleResponse {
    #[serde(rename = "updatedArticle")]
    pub updated_article: Article,
}

#[derive(Debug, Serialize)]
pub struct CommentsResponse {
    pub comments: Vec<Comment>,
}

#[derive(Debug, Serialize)]
pub struct CommentResponse {
    pub comment: Comment,
}

// ==================
// Routes
// ==================

/// Create article routes
pub fn articles_routes(state: AppState) -> Router {
    Router::new()
        .route("/articles", get(list_articles_handler))
        .route("/articles/:article_id", get(get_article_handler))
        .route("/articles/:article_id", patch(patch_article_votes_handler))
        .route(
            "/articles/:article_id/comments",
            get(list_article_comments_handler),
        )
        .route(
            "/articles/:article_id/comments",
            post(post_article_comment_handler),
        )
        .with_state(state)
}

// ==================
// Helper Functions
// ==================

/// Parse a numeric id path segment; anything non-numeric is a client error
pub(super) fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse::<i64>().map_err(|_| ApiError::InvalidIdFormat)
}

/// Pull a required string field out of a JSON body
fn required_str<'a>(payload: &'a Value, field: &'static str) -> Result<&'a str, ApiError> {
    match payload.get(field) {
        None => Err(ApiError::MissingField(field)),
        Some(value) if value.is_null() => Err(ApiError::MissingField(field)),
        Some(value) => value.as_str().ok_or(ApiError::InvalidFieldType),
    }
}

// ==================
// Handlers
// ==================

async fn list_articles_handler(
    State(state): State<AppState>,
    Query(params): Query<ArticleListQuery>,
) -> Result<Json<ArticlesResponse>, ApiError> {
    let articles = state
        .store
        .list_articles(
            params.sort_by.as_deref(),
            params.order.as_deref(),
            params.topic.as_deref(),
        )
        .await?;
    Ok(Json(ArticlesResponse { articles }))
}

async fn get_article_handler(
    State(state): State<AppState>,
    Path(article_id): Path<String>,
) -> Result<Json<ArticleResponse>, ApiError> {
    let article_id = parse_id(&article_id)?;
    let article = state.store.article_by_id(article_id).await?;
    Ok(Json(ArticleResponse { article }))
}

async fn patch_article_votes_handler(
    State(state): State<AppState>,
    Path(article_id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<UpdatedArticleResponse>, ApiError> {
    let article_id = parse_id(&article_id)?;
    let Json(payload) = body.map_err(|_| ApiError::InvalidFieldType)?;

    // only whole numbers pass; floats, strings, and absence all fail the same way
    let inc_votes = payload
        .get("inc_votes")
        .and_then(Value::as_i64)
        .ok_or(ApiError::InvalidFieldType)?;

    let updated_article = state
        .store
        .update_article_votes(article_id, inc_votes)
        .await?;
    Ok(Json(UpdatedArticleResponse { updated_article }))
}

async fn list_article_comments_handler(
    State(state): State<AppState>,
    Path(article_id): Path<String>,
) -> Result<Json<CommentsResponse>, ApiError> {
    let article_id = parse_id(&article_id)?;
    let comments = state.store.comments_for_article(article_id).await?;
    Ok(Json(CommentsResponse { comments }))
}

async fn post_article_comment_handler(
    State(state): State<AppState>,
    Path(article_id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<CommentResponse>), ApiError> {
    let article_id = parse_id(&article_id)?;
    let Json(payload) = body.map_err(|_| ApiError::InvalidFieldType)?;

    let username = required_str(&payload, "username")?;
    let comment_body = required_str(&payload, "body")?;

    let comment = state
        .store
        .insert_comment(article_id, username, comment_body)
        .await?;
    Ok((StatusCode::CREATED, Json(CommentResponse { comment })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert_eq!(parse_id("-1").unwrap(), -1);
        assert!(matches!(
            parse_id("banana").unwrap_err(),
            ApiError::InvalidIdFormat
        ));
        assert!(parse_id("9999999999999999999999").is_err());
    }

    #[test]
    fn test_required_str_check_order() {
        let payload = json!({ "body": "text only" });
        assert!(matches!(
            required_str(&payload, "username").unwrap_err(),
            ApiError::MissingField("username")
        ));

        let payload = json!({ "username": null });
        assert!(matches!(
            required_str(&payload, "username").unwrap_err(),
            ApiError::MissingField("username")
        ));

        let payload = json!({ "username": 42 });
        assert!(matches!(
            required_str(&payload, "username").unwrap_err(),
            ApiError::InvalidFieldType
        ));

        let payload = json!({ "username": "plange" });
        assert_eq!(required_str(&payload, "username").unwrap(), "plange");
    }
}

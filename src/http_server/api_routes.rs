//! API root: endpoint documentation and the unmatched-route fallback.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use crate::error::ErrorResponse;

/// Create the documentation route at the API root
pub fn api_routes() -> Router {
    Router::new().route("/", get(api_docs_handler))
}

/// Describe every endpoint the API serves
async fn api_docs_handler() -> Json<Value> {
    Json(json!({
        "endpoints": {
            "GET /api": {
                "description": "This documentation."
            },
            "GET /api/topics": {
                "description": "All topics."
            },
            "GET /api/users": {
                "description": "All registered users."
            },
            "GET /api/users/:username": {
                "description": "A single user."
            },
            "GET /api/articles": {
                "description": "All articles, each with its comment count.",
                "queries": ["sort_by", "order", "topic"]
            },
            "GET /api/articles/:article_id": {
                "description": "A single article with its comment count."
            },
            "PATCH /api/articles/:article_id": {
                "description": "Adjust an article's votes by a relative amount.",
                "body": { "inc_votes": 1 }
            },
            "GET /api/articles/:article_id/comments": {
                "description": "All comments on an article."
            },
            "POST /api/articles/:article_id/comments": {
                "description": "Post a comment to an article.",
                "body": { "username": "plange", "body": "Nice one." }
            },
            "DELETE /api/comments/:comment_id": {
                "description": "Delete a comment."
            }
        }
    }))
}

/// Fallback for paths no router claims
pub async fn invalid_path_handler() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            message: "404 Not Found (Invalid Path)".to_string(),
        }),
    )
}

/// Rewrite the framework's method-mismatch response so a known path hit with
/// an unrouted method answers the same as an unknown path
pub async fn method_fallback(response: Response) -> Response {
    if response.status() == StatusCode::METHOD_NOT_ALLOWED {
        return invalid_path_handler().await.into_response();
    }
    response
}

//! # API Errors
//!
//! Every failure a request can produce, each tagged with the HTTP status it
//! maps to. Handlers and the store return these directly; the `IntoResponse`
//! impl renders the `{ "message": ... }` body clients see.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Result type for request handling and store operations
pub type ApiResult<T> = Result<T, ApiError>;

/// API errors
#[derive(Debug, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Path id segment that is not numeric
    #[error("Invalid data type passed to endpoint.")]
    InvalidIdFormat,

    /// Body field absent or of the wrong type where a typed field is required
    #[error("Invalid data type passed to endpoint.")]
    InvalidFieldType,

    /// Required body field missing
    #[error("Required field missing: {0}.")]
    MissingField(&'static str),

    /// `sort_by` value outside the allowed column set
    #[error("Articles cannot be sorted by '{0}'.")]
    InvalidSort(String),

    /// `order` value other than asc/desc
    #[error("'{0}' is not a valid sort order.")]
    InvalidOrder(String),

    // ==================
    // Not Found (404)
    // ==================
    /// Topic filter names a topic that does not exist
    #[error("There are no articles with a topic of '{0}'.")]
    UnknownTopic(String),

    /// Comment author is not a registered user
    #[error("Username '{0}' is not a registered user.")]
    UnknownUser(String),

    /// No user with this username
    #[error("There are no users with a username of '{0}'.")]
    UserNotFound(String),

    /// No article with this id
    #[error("There are no articles with an ID of {0}.")]
    ArticleNotFound(i64),

    /// No comment with this id
    #[error("There are no comments with an ID of {0}.")]
    CommentNotFound(i64),

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Store failure; detail is logged, never sent to clients
    #[error("Server Error")]
    Database(#[from] sqlx::Error),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            // 400 Bad Request
            ApiError::InvalidIdFormat => StatusCode::BAD_REQUEST,
            ApiError::InvalidFieldType => StatusCode::BAD_REQUEST,
            ApiError::MissingField(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidSort(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidOrder(_) => StatusCode::BAD_REQUEST,

            // 404 Not Found
            ApiError::UnknownTopic(_) => StatusCode::NOT_FOUND,
            ApiError::UnknownUser(_) => StatusCode::NOT_FOUND,
            ApiError::UserNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::ArticleNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::CommentNotFound(_) => StatusCode::NOT_FOUND,

            // 500 Internal Server Error
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl From<ApiError> for ErrorResponse {
    fn from(err: ApiError) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Database(ref source) = self {
            tracing::error!(error = %source, "request failed on a store error");
        }
        let status = self.status_code();
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}

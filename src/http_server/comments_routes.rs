//! Comment HTTP Routes

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::delete;
use axum::Router;

use crate::error::ApiError;

use super::articles_routes::parse_id;
use super::server::AppState;

/// Create comment routes
pub fn comments_routes(state: AppState) -> Router {
    Router::new()
        .route("/comments/:comment_id", delete(delete_comment_handler))
        .with_state(state)
}

async fn delete_comment_handler(
    State(state): State<AppState>,
    Path(comment_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let comment_id = parse_id(&comment_id)?;
    state.store.delete_comment(comment_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

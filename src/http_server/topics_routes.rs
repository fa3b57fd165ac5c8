//! Topic HTTP Routes

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::error::ApiError;
use crate::store::Topic;

use super::server::AppState;

#[derive(Debug, Serialize)]
pub struct TopicsResponse {
    pub topics: Vec<Topic>,
}

/// Create topic routes
pub fn topics_routes(state: AppState) -> Router {
    Router::new()
        .route("/topics", get(list_topics_handler))
        .with_state(state)
}

async fn list_topics_handler(
    State(state): State<AppState>,
) -> Result<Json<TopicsResponse>, ApiError> {
    let topics = state.store.list_topics().await?;
    Ok(Json(TopicsResponse { topics }))
}

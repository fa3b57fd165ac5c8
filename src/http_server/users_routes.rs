//! User HTTP Routes

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::error::ApiError;
use crate::store::User;

use super::server::AppState;

#[derive(Debug, Serialize)]
pub struct UsersResponse {
    pub users: Vec<User>,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user: User,
}

/// Create user routes
pub fn users_routes(state: AppState) -> Router {
    Router::new()
        .route("/users", get(list_users_handler))
        .route("/users/:username", get(get_user_handler))
        .with_state(state)
}

async fn list_users_handler(
    State(state): State<AppState>,
) -> Result<Json<UsersResponse>, ApiError> {
    let users = state.store.list_users().await?;
    Ok(Json(UsersResponse { users }))
}

async fn get_user_handler(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state.store.user_by_username(&username).await?;
    Ok(Json(UserResponse { user }))
}

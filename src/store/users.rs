//! User queries.

use crate::error::{ApiError, ApiResult};

use super::db::Store;
use super::types::User;

impl Store {
    /// All registered users
    pub async fn list_users(&self) -> ApiResult<Vec<User>> {
        let users = sqlx::query_as::<_, User>("SELECT username, name, avatar_url FROM users")
            .fetch_all(&self.pool)
            .await?;
        Ok(users)
    }

    /// A single user by username
    pub async fn user_by_username(&self, username: &str) -> ApiResult<User> {
        let user = sqlx::query_as::<_, User>(
            "SELECT username, name, avatar_url FROM users WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        user.ok_or_else(|| ApiError::UserNotFound(username.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_store() -> Store {
        let store = Store::open_in_memory().await.expect("open in-memory store");
        store.seed_sample().await.expect("seed sample data");
        store
    }

    #[tokio::test]
    async fn test_list_users() {
        let store = test_store().await;
        let users = store.list_users().await.unwrap();

        assert_eq!(users.len(), 4);
        assert!(users.iter().any(|u| u.username == "plange"));
    }

    #[tokio::test]
    async fn test_user_by_username() {
        let store = test_store().await;
        let user = store.user_by_username("salix").await.unwrap();

        assert_eq!(user.name, "Sal Ix");
        assert!(user.avatar_url.is_some());
    }

    #[tokio::test]
    async fn test_user_by_username_missing() {
        let store = test_store().await;
        let err = store.user_by_username("ghost").await.unwrap_err();

        assert!(matches!(err, ApiError::UserNotFound(u) if u == "ghost"));
    }
}

//! Topic queries.

use crate::error::ApiResult;

use super::db::Store;
use super::types::Topic;

impl Store {
    /// All topics
    pub async fn list_topics(&self) -> ApiResult<Vec<Topic>> {
        let topics = sqlx::query_as::<_, Topic>("SELECT slug, description FROM topics")
            .fetch_all(&self.pool)
            .await?;
        Ok(topics)
    }

    /// Whether a topic with this slug exists
    pub(crate) async fn topic_exists(&self, slug: &str) -> ApiResult<bool> {
        let row: Option<(i64,)> = sqlx::query_as("SELECT 1 FROM topics WHERE slug = ?")
            .bind(slug)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.is_some())
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
    async fn test_list_topics() {
        let store = test_store().await;
        let topics = store.list_topics().await.unwrap();

        assert_eq!(topics.len(), 4);
        assert!(topics.iter().any(|t| t.slug == "coffee"));
        assert!(topics.iter().all(|t| !t.description.is_empty()));
    }

    #[tokio::test]
    async fn test_topic_exists() {
        let store = test_store().await;
        assert!(store.topic_exists("cycling").await.unwrap());
        assert!(!store.topic_exists("knitting").await.unwrap());
    }
}

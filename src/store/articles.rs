//! Article queries: dynamic listings, single lookup, vote mutation.

use sqlx::QueryBuilder;

use crate::error::{ApiError, ApiResult};

use super::db::Store;
use super::query::{ArticleSort, SortOrder};
use super::types::{Article, ArticleWithCommentCount};

const ARTICLES_WITH_COUNT: &str = "SELECT articles.article_id, articles.title, articles.topic, \
     articles.author, articles.body, articles.created_at, articles.votes, \
     COUNT(comments.comment_id) AS comment_count \
     FROM articles \
     LEFT JOIN comments ON comments.article_id = articles.article_id";

impl Store {
    /// List articles with optional sort column, direction, and topic filter.
    ///
    /// Validation order is fixed: sort column, then direction, then topic;
    /// the first failing rule wins. The validated enums are the only values
    /// ever spliced into ORDER BY; the topic filter is a bound parameter.
    pub async fn list_articles(
        &self,
        sort_by: Option<&str>,
        order: Option<&str>,
        topic: Option<&str>,
    ) -> ApiResult<Vec<ArticleWithCommentCount>> {
        let sort = ArticleSort::parse(sort_by)?;
        let direction = SortOrder::parse(order)?;

        if let Some(slug) = topic {
            if !self.topic_exists(slug).await? {
                return Err(ApiError::UnknownTopic(slug.to_string()));
            }
        }

        let mut query: QueryBuilder<sqlx::Sqlite> = QueryBuilder::new(ARTICLES_WITH_COUNT);
        if let Some(slug) = topic {
            query.push(" WHERE articles.topic = ");
            query.push_bind(slug);
        }
        query.push(" GROUP BY articles.article_id ORDER BY ");
        query.push(sort.as_sql());
        query.push(" ");
        query.push(direction.as_sql());

        tracing::debug!(
            sort = sort.as_sql(),
            direction = direction.as_sql(),
            topic,
            "listing articles"
        );

        let articles = query
            .build_query_as::<ArticleWithCommentCount>()
            .fetch_all(&self.pool)
            .await?;
        Ok(articles)
    }

    /// A single article, annotated with its comment count
    pub async fn article_by_id(&self, article_id: i64) -> ApiResult<ArticleWithCommentCount> {
        let sql = format!(
            "{ARTICLES_WITH_COUNT} WHERE articles.article_id = ? GROUP BY articles.article_id"
        );
        let article = sqlx::query_as::<_, ArticleWithCommentCount>(&sql)
            .bind(article_id)
            .fetch_optional(&self.pool)
            .await?;

        article.ok_or(ApiError::ArticleNotFound(article_id))
    }

    /// Apply a vote delta relative to the stored total, in one statement.
    /// The delta may be negative or zero; the total may go negative.
    pub async fn update_article_votes(
        &self,
        article_id: i64,
        inc_votes: i64,
    ) -> ApiResult<Article> {
        let updated = sqlx::query_as::<_, Article>(
            "UPDATE articles SET votes = votes + ? WHERE article_id = ? \
             RETURNING article_id, title, topic, author, body, created_at, votes",
        )
        .bind(inc_votes)
        .bind(article_id)
        .fetch_optional(&self.pool)
        .await?;

        updated.ok_or(ApiError::ArticleNotFound(article_id))
    }
}

//! Comment queries: listing, insertion, deletion.

use chrono::Utc;

use crate::error::{ApiError, ApiResult};

use super::db::Store;
use super::types::Comment;

const COMMENT_COLUMNS: &str = "comment_id, article_id, author, body, votes, created_at";

impl Store {
    /// All comments on an article.
    ///
    /// A missing article is a not-found error; an existing article with no
    /// comments is an empty list.
    pub async fn comments_for_article(&self, article_id: i64) -> ApiResult<Vec<Comment>> {
        let article: Option<(i64,)> =
            sqlx::query_as("SELECT 1 FROM articles WHERE article_id = ?")
                .bind(article_id)
                .fetch_optional(&self.pool)
                .await?;
        if article.is_none() {
            return Err(ApiError::ArticleNotFound(article_id));
        }

        let sql = format!("SELECT {COMMENT_COLUMNS} FROM comments WHERE article_id = ?");
        let comments = sqlx::query_as::<_, Comment>(&sql)
            .bind(article_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(comments)
    }

    /// Attach a comment to an article.
    ///
    /// The username must belong to a registered user and the article must
    /// exist; both checks and the insert run in one transaction so a
    /// concurrent delete cannot slip between them. Votes start at zero and
    /// the timestamp is server-assigned.
    pub async fn insert_comment(
        &self,
        article_id: i64,
        username: &str,
        body: &str,
    ) -> ApiResult<Comment> {
        let mut tx = self.pool.begin().await?;

        let user: Option<(i64,)> = sqlx::query_as("SELECT 1 FROM users WHERE username = ?")
            .bind(username)
            .fetch_optional(&mut *tx)
            .await?;
        if user.is_none() {
            return Err(ApiError::UnknownUser(username.to_string()));
        }

        let article: Option<(i64,)> =
            sqlx::query_as("SELECT 1 FROM articles WHERE article_id = ?")
                .bind(article_id)
                .fetch_optional(&mut *tx)
                .await?;
        if article.is_none() {
            return Err(ApiError::ArticleNotFound(article_id));
        }

        let sql = format!(
            "INSERT INTO comments (article_id, author, body, votes, created_at) \
             VALUES (?, ?, ?, 0, ?) RETURNING {COMMENT_COLUMNS}"
        );
        let comment = sqlx::query_as::<_, Comment>(&sql)
            .bind(article_id)
            .bind(username)
            .bind(body)
            .bind(Utc::now())
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::debug!(comment_id = comment.comment_id, article_id, "comment stored");
        Ok(comment)
    }

    /// Delete a comment by id.
    ///
    /// One DELETE statement; rows-affected doubles as the existence check,
    /// so there is no window between checking and deleting. A repeated
    /// delete therefore reports not-found.
    pub async fn delete_comment(&self, comment_id: i64) -> ApiResult<()> {
        let result = sqlx::query("DELETE FROM comments WHERE comment_id = ?")
            .bind(comment_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(ApiError::CommentNotFound(comment_id));
        }
        Ok(())
    }
}

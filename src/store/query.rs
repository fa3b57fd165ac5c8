//! Sort parameter validation for article listings.
//!
//! ORDER BY cannot take bound parameters, so the column and direction are
//! only ever spliced into SQL from these enums. Parsing is the allow-list:
//! anything that does not match a variant is rejected before any SQL is
//! composed.

use crate::error::{ApiError, ApiResult};

/// Columns an article listing may be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArticleSort {
    ArticleId,
    Title,
    Topic,
    Author,
    Body,
    CreatedAt,
    Votes,
    CommentCount,
}

impl ArticleSort {
    /// Parse a `sort_by` query value; absent means newest-first default
    pub fn parse(value: Option<&str>) -> ApiResult<Self> {
        match value {
            None => Ok(Self::CreatedAt),
            Some("article_id") => Ok(Self::ArticleId),
            Some("title") => Ok(Self::Title),
            Some("topic") => Ok(Self::Topic),
            Some("author") => Ok(Self::Author),
            Some("body") => Ok(Self::Body),
            Some("created_at") => Ok(Self::CreatedAt),
            Some("votes") => Ok(Self::Votes),
            Some("comment_count") => Ok(Self::CommentCount),
            Some(other) => Err(ApiError::InvalidSort(other.to_string())),
        }
    }

    /// The SQL expression this column sorts on
    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::ArticleId => "articles.article_id",
            Self::Title => "articles.title",
            Self::Topic => "articles.topic",
            Self::Author => "articles.author",
            Self::Body => "articles.body",
            Self::CreatedAt => "articles.created_at",
            Self::Votes => "articles.votes",
            Self::CommentCount => "comment_count",
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// Parse an `order` query value, case-insensitively; absent means descending
    pub fn parse(value: Option<&str>) -> ApiResult<Self> {
        match value {
            None => Ok(Self::Desc),
            Some(v) if v.eq_ignore_ascii_case("asc") => Ok(Self::Asc),
            Some(v) if v.eq_ignore_ascii_case("desc") => Ok(Self::Desc),
            Some(other) => Err(ApiError::InvalidOrder(other.to_string())),
        }
    }

    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_defaults_to_created_at() {
        assert_eq!(ArticleSort::parse(None).unwrap(), ArticleSort::CreatedAt);
    }

    #[test]
    fn test_sort_accepts_every_allowed_column() {
        let columns = [
            ("article_id", ArticleSort::ArticleId),
            ("title", ArticleSort::Title),
            ("topic", ArticleSort::Topic),
            ("author", ArticleSort::Author),
            ("body", ArticleSort::Body),
            ("created_at", ArticleSort::CreatedAt),
            ("votes", ArticleSort::Votes),
            ("comment_count", ArticleSort::CommentCount),
        ];
        for (name, expected) in columns {
            assert_eq!(ArticleSort::parse(Some(name)).unwrap(), expected);
        }
    }

    #[test]
    fn test_sort_rejects_unknown_columns() {
        let err = ArticleSort::parse(Some("banana")).unwrap_err();
        assert!(matches!(err, ApiError::InvalidSort(v) if v == "banana"));

        // column names are matched exactly, not case-folded
        assert!(ArticleSort::parse(Some("Votes")).is_err());
        // a would-be injection never reaches SQL composition
        assert!(ArticleSort::parse(Some("votes; DROP TABLE articles")).is_err());
    }

    #[test]
    fn test_order_defaults_to_descending() {
        assert_eq!(SortOrder::parse(None).unwrap(), SortOrder::Desc);
    }

    #[test]
    fn test_order_is_case_insensitive() {
        assert_eq!(SortOrder::parse(Some("ASC")).unwrap(), SortOrder::Asc);
        assert_eq!(SortOrder::parse(Some("Desc")).unwrap(), SortOrder::Desc);
        assert_eq!(SortOrder::parse(Some("asc")).unwrap(), SortOrder::Asc);
    }

    #[test]
    fn test_order_rejects_other_values() {
        let err = SortOrder::parse(Some("sideways")).unwrap_err();
        assert!(matches!(err, ApiError::InvalidOrder(v) if v == "sideways"));
    }

    #[test]
    fn test_sql_fragments() {
        assert_eq!(ArticleSort::Votes.as_sql(), "articles.votes");
        assert_eq!(ArticleSort::CommentCount.as_sql(), "comment_count");
        assert_eq!(SortOrder::Asc.as_sql(), "ASC");
        assert_eq!(SortOrder::Desc.as_sql(), "DESC");
    }
}

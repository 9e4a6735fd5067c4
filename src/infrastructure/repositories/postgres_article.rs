// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleBody, ArticleId, ArticleReadRepository, ArticleSlug, ArticleStatus,
    ArticleTitle,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

const SELECT_LATEST_PUBLISHED: &str = "SELECT id, title, slug, body, status, published_at, created_at, updated_at
     FROM articles
     WHERE status = $1
     ORDER BY published_at DESC NULLS LAST, id DESC
     LIMIT 1";

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    slug: String,
    body: String,
    status: String,
    published_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.id)?,
            title: ArticleTitle::new(row.title)?,
            slug: ArticleSlug::new(row.slug)?,
            body: ArticleBody::new(row.body),
            status: row.status.parse::<ArticleStatus>()?,
            published_at: row.published_at,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn find_latest_published(&self) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(SELECT_LATEST_PUBLISHED)
            .bind(ArticleStatus::Published.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(article_from_stored_row).transpose()
    }
}

/// Rows come from storage, not from a caller, so a row that fails domain
/// validation is a data integrity fault.
fn article_from_stored_row(row: ArticleRow) -> DomainResult<Article> {
    let id = row.id;
    Article::try_from(row).map_err(|err| {
        tracing::error!(article_id = id, error = %err, "stored article row is invalid");
        DomainError::Persistence(format!("article {id} failed validation: {err}"))
    })
}

use crate::domain::article::entity::Article;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    /// The published article with the greatest `published_at`, if any.
    async fn find_latest_published(&self) -> DomainResult<Option<Article>>;
}

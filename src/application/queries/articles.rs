use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::article::{ArticleReadRepository, PublishedArticleSpec},
};
use std::sync::Arc;

pub struct ArticleQueryService {
    read_repo: Arc<dyn ArticleReadRepository>,
}

impl ArticleQueryService {
    pub fn new(read_repo: Arc<dyn ArticleReadRepository>) -> Self {
        Self { read_repo }
    }

    /// Most recently published article, or `None` when nothing is published.
    pub async fn latest_published(&self) -> ApplicationResult<Option<ArticleDto>> {
        let Some(article) = self.read_repo.find_latest_published().await? else {
            return Ok(None);
        };

        if !PublishedArticleSpec::new(&article).is_satisfied() {
            tracing::warn!(
                article_id = i64::from(article.id),
                status = %article.status,
                "repository returned an unpublished article for the latest query; ignoring"
            );
            return Ok(None);
        }

        Ok(Some(article.into()))
    }
}

use crate::domain::article::entity::Article;

/// Satisfied by articles that may be shown to anonymous readers.
pub struct PublishedArticleSpec<'a> {
    article: &'a Article,
}

impl<'a> PublishedArticleSpec<'a> {
    pub fn new(article: &'a Article) -> Self {
        Self { article }
    }

    pub fn is_satisfied(&self) -> bool {
        self.article.is_published() && self.article.published_at.is_some()
    }
}

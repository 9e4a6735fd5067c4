// tests/support/builders.rs
use chrono::{DateTime, Duration, Utc};

use gazette::domain::article::*;

use super::mocks::fixed_now;

pub struct ArticleBuilder {
    id: i64,
    title: String,
    slug: String,
    body: String,
    status: ArticleStatus,
    published_at: Option<DateTime<Utc>>,
}

impl ArticleBuilder {
    pub fn new() -> Self {
        Self {
            id: 1,
            title: "Test Article".into(),
            slug: "test-article".into(),
            body: "Test body".into(),
            status: ArticleStatus::Draft,
            published_at: None,
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    /// Published `minutes_ago` minutes before the fixed test clock.
    pub fn published_minutes_ago(mut self, minutes_ago: i64) -> Self {
        self.status = ArticleStatus::Published;
        self.published_at = Some(fixed_now() - Duration::minutes(minutes_ago));
        self
    }

    pub fn status(mut self, status: ArticleStatus) -> Self {
        self.status = status;
        self
    }

    pub fn published_at(mut self, published_at: Option<DateTime<Utc>>) -> Self {
        self.published_at = published_at;
        self
    }

    pub fn build(self) -> Article {
        Article {
            id: ArticleId::new(self.id).unwrap(),
            title: ArticleTitle::new(self.title).unwrap(),
            slug: ArticleSlug::new(self.slug).unwrap(),
            body: ArticleBody::new(self.body),
            status: self.status,
            published_at: self.published_at,
            created_at: fixed_now() - Duration::days(1),
            updated_at: fixed_now() - Duration::days(1),
        }
    }
}

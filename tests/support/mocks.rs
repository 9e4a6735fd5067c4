// tests/support/mocks.rs
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use gazette::application::ports::time::Clock;
use gazette::domain::article::{Article, ArticleReadRepository};
use gazette::domain::errors::{DomainError, DomainResult};
use once_cell::sync::Lazy;
use std::sync::Mutex;

static FIXED_NOW: Lazy<DateTime<Utc>> = Lazy::new(|| {
    DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
        .expect("invalid RFC3339 in tests/support/mocks.rs")
        .with_timezone(&Utc)
});

pub fn fixed_now() -> DateTime<Utc> {
    *FIXED_NOW
}

/// Always reports [`fixed_now`].
#[derive(Clone)]
pub struct FixedClock;

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        fixed_now()
    }
}

/// Advances by `step` on every read, starting at [`fixed_now`].
pub struct SteppingClock {
    next: Mutex<DateTime<Utc>>,
    step: Duration,
}

impl SteppingClock {
    pub fn new(step: Duration) -> Self {
        Self {
            next: Mutex::new(fixed_now()),
            step,
        }
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        let mut next = self.next.lock().unwrap();
        let current = *next;
        *next = current + self.step;
        current
    }
}

/// Returns whatever record it was built with, without filtering.
pub struct StubArticleRead(pub Option<Article>);

#[async_trait]
impl ArticleReadRepository for StubArticleRead {
    async fn find_latest_published(&self) -> DomainResult<Option<Article>> {
        Ok(self.0.clone())
    }
}

pub struct FailingArticleRead;

#[async_trait]
impl ArticleReadRepository for FailingArticleRead {
    async fn find_latest_published(&self) -> DomainResult<Option<Article>> {
        Err(DomainError::Persistence("connection reset by peer".into()))
    }
}

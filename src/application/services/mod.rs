// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        ports::time::Clock,
        queries::{articles::ArticleQueryService, health::HealthService},
    },
    domain::article::ArticleReadRepository,
};

pub struct ApplicationServices {
    pub article_queries: Arc<ArticleQueryService>,
    pub health: Arc<HealthService>,
}

impl ApplicationServices {
    pub fn new(article_read_repo: Arc<dyn ArticleReadRepository>, clock: Arc<dyn Clock>) -> Self {
        let article_queries = Arc::new(ArticleQueryService::new(Arc::clone(&article_read_repo)));
        let health = Arc::new(HealthService::new(Arc::clone(&clock)));

        Self {
            article_queries,
            health,
        }
    }
}

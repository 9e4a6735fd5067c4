pub mod entity;
pub mod repository;
pub mod specifications;
pub mod value_objects;

pub use entity::Article;
pub use repository::ArticleReadRepository;
pub use specifications::PublishedArticleSpec;
pub use value_objects::{ArticleBody, ArticleId, ArticleSlug, ArticleStatus, ArticleTitle};

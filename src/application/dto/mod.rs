pub mod articles;
pub mod health;

pub use articles::ArticleDto;
pub use health::HealthDto;

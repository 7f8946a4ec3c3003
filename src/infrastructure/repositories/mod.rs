// src/infrastructure/repositories/mod.rs
mod error;
mod sqlite_article;
mod sqlite_subscriber;
mod sqlite_topic;

pub use error::map_sqlx;
pub use sqlite_article::{SqliteArticleReadRepository, SqliteArticleWriteRepository};
pub use sqlite_subscriber::SqliteSubscriberRepository;
pub use sqlite_topic::SqliteTopicRepository;

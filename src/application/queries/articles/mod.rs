// src/application/queries/articles/mod.rs
mod editable;
mod list;
mod read;
mod service;

pub use list::ListArticlesQuery;
pub use read::ReadArticleQuery;
pub use service::ArticleQueryService;

// src/application/commands/articles/mod.rs
mod create;
mod delete;
mod service;
mod update;
mod upload;

pub use create::{CreateArticleCommand, CreateArticleCommandBuilder, NewPageInput};
pub use delete::DeleteArticleCommand;
pub use service::{ArticleCommandService, ArticleCommandSettings};
pub use update::UpdateArticleCommand;
pub use upload::ImageRole;

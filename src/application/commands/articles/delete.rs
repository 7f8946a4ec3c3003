// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::{application::error::ApplicationResult, domain::article::ArticleSlug};

pub struct DeleteArticleCommand {
    pub slug: String,
}

impl ArticleCommandService {
    /// Stored images are left in place.
    pub async fn delete_article(&self, command: DeleteArticleCommand) -> ApplicationResult<()> {
        let slug = ArticleSlug::new(command.slug)?;
        self.write_repo.delete(&slug).await?;
        tracing::info!(article = %slug, "article deleted");
        Ok(())
    }
}

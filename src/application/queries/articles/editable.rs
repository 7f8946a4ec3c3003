use super::{ArticleQueryService, ListArticlesQuery};
use crate::{
    application::{
        dto::{ArticleSummaryDto, EditableArticleDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleEditor, ArticleSlug},
};

impl ArticleQueryService {
    /// Admin table: same rows as the public listing, searchable by title.
    /// Drafts are excluded; open one by slug with [`Self::editable_article`].
    pub async fn admin_list(&self, search: Option<String>) -> ApplicationResult<Vec<ArticleSummaryDto>> {
        self.list_published(ListArticlesQuery {
            topic: None,
            search,
        })
        .await
    }

    /// Editor state for an article of any status.
    pub async fn editable_article(&self, slug: String) -> ApplicationResult<EditableArticleDto> {
        let slug = ArticleSlug::new(slug)?;
        let article = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let topic = self
            .topic_repo
            .find_by_id(article.topic_id)
            .await?
            .map(|topic| topic.title.into_inner())
            .unwrap_or_default();

        let editor = ArticleEditor::hydrate(&article, topic);
        Ok(EditableArticleDto::new(&editor, article.status.as_str()))
    }
}

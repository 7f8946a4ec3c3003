use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleReadingDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleSlug, ArticleStatus, PageNavigator},
};

pub struct ReadArticleQuery {
    pub slug: String,
    /// Zero-based page to open; clamped to the last page.
    pub page: usize,
}

impl ArticleQueryService {
    /// Drafts are indistinguishable from missing articles here.
    pub async fn read_article(&self, query: ReadArticleQuery) -> ApplicationResult<ArticleReadingDto> {
        let slug = ArticleSlug::new(query.slug)
            .map_err(|_| ApplicationError::not_found("article not found"))?;
        let article = self
            .read_repo
            .find_by_slug_and_status(&slug, ArticleStatus::Published)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let topic = self
            .topic_repo
            .find_by_id(article.topic_id)
            .await?
            .map(|topic| topic.title.into_inner());

        let mut navigator = PageNavigator::new(article.pages.len());
        navigator.advance_to(query.page);

        Ok(ArticleReadingDto::new(article, topic, &navigator))
    }
}

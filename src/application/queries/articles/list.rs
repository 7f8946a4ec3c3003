use super::ArticleQueryService;
use crate::{
    application::{dto::ArticleSummaryDto, error::ApplicationResult},
    domain::{
        article::{ArticleListing, ArticleStatus},
        content::normalize_topic,
    },
};

#[derive(Debug, Clone, Default)]
pub struct ListArticlesQuery {
    /// Matched against topic titles after normalization, so `mind-curiosity`
    /// and `Mind Curiosity` select the same topic.
    pub topic: Option<String>,
    /// Case-insensitive substring of the title.
    pub search: Option<String>,
}

impl ListArticlesQuery {
    fn matches(&self, listing: &ArticleListing) -> bool {
        let topic_ok = match self.topic.as_deref().map(normalize_topic) {
            Some(wanted) if !wanted.is_empty() => listing
                .topic_title
                .as_deref()
                .is_some_and(|title| normalize_topic(title) == wanted),
            _ => true,
        };

        let search_ok = match self.search.as_deref().map(str::trim) {
            Some(needle) if !needle.is_empty() => listing
                .article
                .title
                .as_str()
                .to_lowercase()
                .contains(&needle.to_lowercase()),
            _ => true,
        };

        topic_ok && search_ok
    }
}

impl ArticleQueryService {
    /// Published articles, newest date first.
    pub async fn list_published(
        &self,
        query: ListArticlesQuery,
    ) -> ApplicationResult<Vec<ArticleSummaryDto>> {
        let listings = self.read_repo.list_by_status(ArticleStatus::Published).await?;
        Ok(listings
            .into_iter()
            .filter(|listing| query.matches(listing))
            .map(Into::into)
            .collect())
    }
}

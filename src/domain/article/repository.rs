use crate::domain::article::entity::{Article, ArticleListing, ArticleUpdate, NewArticle};
use crate::domain::article::value_objects::{ArticleSlug, ArticleStatus};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    /// Fails with `NotFound` when no article has the given slug.
    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article>;
    /// Fails with `NotFound` when no article has the given slug.
    async fn delete(&self, slug: &ArticleSlug) -> DomainResult<()>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>>;
    async fn find_by_slug_and_status(
        &self,
        slug: &ArticleSlug,
        status: ArticleStatus,
    ) -> DomainResult<Option<Article>>;
    /// Newest `date` first.
    async fn list_by_status(&self, status: ArticleStatus) -> DomainResult<Vec<ArticleListing>>;
}

use crate::domain::article::{
    Article, ArticleListing, ArticleReadRepository, ArticleSlug, ArticleStatus, ArticleTitle,
    ArticleUpdate, ArticleWriteRepository, NewArticle, StoredPage,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::topic::TopicId;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use super::map_sqlx;

const ARTICLE_COLUMNS: &str = "a.slug, a.title, a.excerpt, a.author, a.date, a.read_time, a.topic_id, a.hero_image_url, a.status, a.sections, a.image_urls, a.created_at, a.updated_at";

#[derive(Clone)]
pub struct SqliteArticleWriteRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteArticleWriteRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct SqliteArticleReadRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteArticleReadRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    slug: String,
    title: String,
    excerpt: Option<String>,
    author: String,
    date: NaiveDate,
    read_time: String,
    topic_id: i64,
    hero_image_url: Option<String>,
    status: String,
    sections: String,
    image_urls: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

#[derive(Debug, FromRow)]
struct ListingRow {
    #[sqlx(flatten)]
    article: ArticleRow,
    topic_title: Option<String>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        let sections: Vec<String> = serde_json::from_str(&row.sections)
            .map_err(|e| DomainError::Persistence(format!("malformed sections column: {e}")))?;
        let image_urls: Vec<Option<String>> = serde_json::from_str(&row.image_urls)
            .map_err(|e| DomainError::Persistence(format!("malformed image_urls column: {e}")))?;

        Ok(Article {
            slug: ArticleSlug::new(row.slug)?,
            title: ArticleTitle::new(row.title)?,
            excerpt: row.excerpt,
            author: row.author,
            date: row.date,
            read_time: row.read_time,
            topic_id: TopicId::new(row.topic_id)?,
            hero_image_url: row.hero_image_url,
            status: row.status.parse()?,
            pages: StoredPage::zip(sections, image_urls),
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

impl TryFrom<ListingRow> for ArticleListing {
    type Error = DomainError;

    fn try_from(row: ListingRow) -> Result<Self, Self::Error> {
        Ok(ArticleListing {
            article: Article::try_from(row.article)?,
            topic_title: row.topic_title,
        })
    }
}

/// Split pages into the two JSON array columns.
fn encode_pages(pages: &[StoredPage]) -> DomainResult<(String, String)> {
    let (sections, image_urls) = StoredPage::unzip(pages);
    let encode = |e: serde_json::Error| DomainError::Persistence(e.to_string());
    Ok((
        serde_json::to_string(&sections).map_err(encode)?,
        serde_json::to_string(&image_urls).map_err(encode)?,
    ))
}

#[async_trait]
impl ArticleWriteRepository for SqliteArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            slug,
            title,
            excerpt,
            author,
            date,
            read_time,
            topic_id,
            hero_image_url,
            status,
            pages,
            created_at,
        } = article;
        let (sections, image_urls) = encode_pages(&pages)?;

        let row = sqlx::query_as::<_, ArticleRow>(
            "INSERT INTO articles (slug, title, excerpt, author, date, read_time, topic_id, hero_image_url, status, sections, image_urls, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?) \
             RETURNING slug, title, excerpt, author, date, read_time, topic_id, hero_image_url, status, sections, image_urls, created_at, updated_at",
        )
        .bind(slug.as_str())
        .bind(title.as_str())
        .bind(excerpt)
        .bind(author)
        .bind(date)
        .bind(read_time)
        .bind(i64::from(topic_id))
        .bind(hero_image_url)
        .bind(status.as_str())
        .bind(sections)
        .bind(image_urls)
        .bind(created_at)
        .bind(created_at)
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let ArticleUpdate {
            slug,
            title,
            excerpt,
            date,
            read_time,
            topic_id,
            hero_image_url,
            pages,
            updated_at,
        } = update;
        let (sections, image_urls) = encode_pages(&pages)?;

        let row = sqlx::query_as::<_, ArticleRow>(
            "UPDATE articles SET title = ?, excerpt = ?, date = ?, read_time = ?, topic_id = ?, hero_image_url = ?, sections = ?, image_urls = ?, updated_at = ? \
             WHERE slug = ? \
             RETURNING slug, title, excerpt, author, date, read_time, topic_id, hero_image_url, status, sections, image_urls, created_at, updated_at",
        )
        .bind(title.as_str())
        .bind(excerpt)
        .bind(date)
        .bind(read_time)
        .bind(i64::from(topic_id))
        .bind(hero_image_url)
        .bind(sections)
        .bind(image_urls)
        .bind(updated_at)
        .bind(slug.as_str())
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("article not found".into()))?;

        Article::try_from(row)
    }

    async fn delete(&self, slug: &ArticleSlug) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM articles WHERE slug = ?")
            .bind(slug.as_str())
            .execute(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for SqliteArticleReadRepository {
    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles a WHERE a.slug = ?"
        ))
        .bind(slug.as_str())
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn find_by_slug_and_status(
        &self,
        slug: &ArticleSlug,
        status: ArticleStatus,
    ) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles a WHERE a.slug = ? AND a.status = ?"
        ))
        .bind(slug.as_str())
        .bind(status.as_str())
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn list_by_status(&self, status: ArticleStatus) -> DomainResult<Vec<ArticleListing>> {
        let rows = sqlx::query_as::<_, ListingRow>(&format!(
            "SELECT {ARTICLE_COLUMNS}, t.title AS topic_title \
             FROM articles a LEFT JOIN topics t ON t.id = a.topic_id \
             WHERE a.status = ? \
             ORDER BY a.date DESC, a.created_at DESC"
        ))
        .bind(status.as_str())
        .fetch_all(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(ArticleListing::try_from).collect()
    }
}

// src/domain/article/entity.rs
use crate::domain::article::pages::StoredPage;
use crate::domain::article::value_objects::{ArticleSlug, ArticleStatus, ArticleTitle};
use crate::domain::topic::TopicId;
use chrono::{DateTime, NaiveDate, Utc};

/// Hero image used when an article is created without one.
pub const PLACEHOLDER_HERO_IMAGE: &str = "/images/placeholder-article.jpg";

#[derive(Debug, Clone)]
pub struct Article {
    pub slug: ArticleSlug,
    pub title: ArticleTitle,
    pub excerpt: Option<String>,
    pub author: String,
    pub date: NaiveDate,
    pub read_time: String,
    pub topic_id: TopicId,
    pub hero_image_url: Option<String>,
    pub status: ArticleStatus,
    pub pages: Vec<StoredPage>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    pub fn is_published(&self) -> bool {
        self.status == ArticleStatus::Published
    }
}

/// An article row together with the title of its topic, as listed on the
/// public index and in the admin table.
#[derive(Debug, Clone)]
pub struct ArticleListing {
    pub article: Article,
    pub topic_title: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub slug: ArticleSlug,
    pub title: ArticleTitle,
    pub excerpt: Option<String>,
    pub author: String,
    pub date: NaiveDate,
    pub read_time: String,
    pub topic_id: TopicId,
    pub hero_image_url: Option<String>,
    pub status: ArticleStatus,
    pub pages: Vec<StoredPage>,
    pub created_at: DateTime<Utc>,
}

/// Full replacement of the editable columns of one article, keyed by its
/// immutable slug. Author and status are left untouched.
#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub slug: ArticleSlug,
    pub title: ArticleTitle,
    pub excerpt: Option<String>,
    pub date: NaiveDate,
    pub read_time: String,
    pub topic_id: TopicId,
    pub hero_image_url: Option<String>,
    pub pages: Vec<StoredPage>,
    pub updated_at: DateTime<Utc>,
}

use crate::domain::article::{
    Article, ArticleEditor, ArticleListing, EditorPage, ImagePreview, PageNavigator, StoredPage,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

/// Full persisted shape of an article, including the two page columns.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    pub author: String,
    pub date: NaiveDate,
    pub read_time: String,
    pub topic_id: i64,
    #[serde(default)]
    pub hero_image_url: Option<String>,
    pub status: String,
    pub sections: Vec<String>,
    pub image_urls: Vec<Option<String>>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        let (sections, image_urls) = StoredPage::unzip(&article.pages);
        Self {
            slug: article.slug.into_inner(),
            title: article.title.into_inner(),
            excerpt: article.excerpt,
            author: article.author,
            date: article.date,
            read_time: article.read_time,
            topic_id: article.topic_id.into(),
            hero_image_url: article.hero_image_url,
            status: article.status.as_str().to_string(),
            sections,
            image_urls,
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleSummaryDto {
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    pub author: String,
    pub date: NaiveDate,
    pub read_time: String,
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub hero_image_url: Option<String>,
    pub status: String,
    pub page_count: usize,
}

impl From<ArticleListing> for ArticleSummaryDto {
    fn from(listing: ArticleListing) -> Self {
        let ArticleListing {
            article,
            topic_title,
        } = listing;
        Self {
            page_count: article.pages.len(),
            slug: article.slug.into_inner(),
            title: article.title.into_inner(),
            excerpt: article.excerpt,
            author: article.author,
            date: article.date,
            read_time: article.read_time,
            topic: topic_title,
            hero_image_url: article.hero_image_url,
            status: article.status.as_str().to_string(),
        }
    }
}

/// The page a reader is currently looking at.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PageViewDto {
    /// Zero-based.
    pub index: usize,
    pub total_pages: usize,
    #[serde(default)]
    pub section_html: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    /// Set when the page has neither markup nor image.
    #[serde(default)]
    pub placeholder: Option<String>,
    pub has_previous: bool,
    pub has_next: bool,
}

impl PageViewDto {
    pub fn render(navigator: &PageNavigator, pages: &[StoredPage]) -> Self {
        let rendered = navigator.render(pages);
        Self {
            index: rendered.index,
            total_pages: navigator.total_pages(),
            section_html: rendered.section_html.map(str::to_string),
            image_url: rendered.image_url.map(str::to_string),
            placeholder: rendered.placeholder.map(str::to_string),
            has_previous: navigator.has_previous(),
            has_next: navigator.has_next(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleReadingDto {
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    pub author: String,
    pub date: NaiveDate,
    pub read_time: String,
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub hero_image_url: Option<String>,
    pub page: PageViewDto,
}

impl ArticleReadingDto {
    pub fn new(article: Article, topic: Option<String>, navigator: &PageNavigator) -> Self {
        let page = PageViewDto::render(navigator, &article.pages);
        Self {
            slug: article.slug.into_inner(),
            title: article.title.into_inner(),
            excerpt: article.excerpt,
            author: article.author,
            date: article.date,
            read_time: article.read_time,
            topic,
            hero_image_url: article.hero_image_url,
            page,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EditablePageDto {
    pub text: String,
    #[serde(default)]
    pub image_url: Option<String>,
    /// Filename of an image selected but not uploaded yet.
    #[serde(default)]
    pub pending_image: Option<String>,
}

impl From<&EditorPage> for EditablePageDto {
    fn from(page: &EditorPage) -> Self {
        let (image_url, pending_image) = match page.preview() {
            ImagePreview::Pending(name) => (
                page.stored_image_url().map(str::to_string),
                Some(name.to_string()),
            ),
            ImagePreview::Stored(url) => (Some(url.to_string()), None),
            ImagePreview::None => (None, None),
        };
        Self {
            text: page.text().to_string(),
            image_url,
            pending_image,
        }
    }
}

/// Editor form state as loaded for an existing article.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EditableArticleDto {
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    pub read_time: String,
    pub topic: String,
    #[serde(default)]
    pub hero_image_url: Option<String>,
    pub status: String,
    pub pages: Vec<EditablePageDto>,
}

impl EditableArticleDto {
    pub fn new(editor: &ArticleEditor, status: &str) -> Self {
        Self {
            title: editor.title.clone(),
            slug: editor.slug.clone(),
            excerpt: editor.excerpt.clone(),
            date: editor.date,
            read_time: editor.read_time.clone(),
            topic: editor.topic.clone(),
            hero_image_url: editor.hero().stored_url().map(str::to_string),
            status: status.to_string(),
            pages: editor.pages().iter().map(EditablePageDto::from).collect(),
        }
    }
}

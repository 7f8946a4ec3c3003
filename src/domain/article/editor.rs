// src/domain/article/editor.rs
//! In-memory editing state for one article: form fields, the hero image
//! and an ordered list of pages. Nothing here touches the network; the
//! command services resolve an editor into repository writes.

use crate::domain::article::entity::Article;
use crate::domain::content::text_to_html;
use crate::domain::errors::{DomainError, DomainResult};
use bytes::Bytes;
use chrono::NaiveDate;
use std::fmt;

pub const MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;
pub const DEFAULT_READ_TIME: &str = "5 min read";

/// A locally selected image that has not been uploaded yet.
#[derive(Clone)]
pub struct ImageFile {
    filename: String,
    content_type: String,
    bytes: Bytes,
}

impl ImageFile {
    pub fn new(
        filename: impl Into<String>,
        content_type: impl Into<String>,
        bytes: impl Into<Bytes>,
    ) -> Self {
        Self {
            filename: filename.into(),
            content_type: content_type.into(),
            bytes: bytes.into(),
        }
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn bytes(&self) -> &Bytes {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Lowercased extension taken from the filename, `jpg` when absent.
    pub fn extension(&self) -> String {
        self.filename
            .rsplit_once('.')
            .map(|(_, ext)| ext.trim().to_ascii_lowercase())
            .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
            .unwrap_or_else(|| "jpg".to_string())
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.bytes.len() > MAX_IMAGE_BYTES {
            return Err(DomainError::Validation(format!(
                "image {} is too large (max 10MB)",
                self.filename
            )));
        }
        if !self.content_type.starts_with("image/") {
            return Err(DomainError::Validation(format!(
                "{} is not an image file",
                self.filename
            )));
        }
        Ok(())
    }
}

impl fmt::Debug for ImageFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageFile")
            .field("filename", &self.filename)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImagePreview<'a> {
    /// Selected in this session, shown by filename until uploaded.
    Pending(&'a str),
    Stored(&'a str),
    None,
}

#[derive(Debug, Clone, Default)]
pub struct EditorPage {
    text: String,
    text_edited: bool,
    /// Loaded from a stored article rather than added in this session.
    hydrated: bool,
    stored_section: Option<String>,
    stored_image_url: Option<String>,
    pending_image: Option<ImageFile>,
}

impl EditorPage {
    pub fn empty() -> Self {
        Self::default()
    }

    fn hydrated(section: Option<&str>, image_url: Option<&str>) -> Self {
        Self {
            text: section.unwrap_or_default().to_string(),
            text_edited: false,
            hydrated: true,
            stored_section: section.map(str::to_string),
            stored_image_url: image_url.map(str::to_string),
            pending_image: None,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn pending_image(&self) -> Option<&ImageFile> {
        self.pending_image.as_ref()
    }

    pub fn stored_image_url(&self) -> Option<&str> {
        self.stored_image_url.as_deref()
    }

    pub fn preview(&self) -> ImagePreview<'_> {
        match (&self.pending_image, &self.stored_image_url) {
            (Some(image), _) => ImagePreview::Pending(image.filename()),
            (None, Some(url)) => ImagePreview::Stored(url),
            (None, None) => ImagePreview::None,
        }
    }

    /// Markup to persist. A stored page whose text was not edited in this
    /// session keeps its stored section, including a missing one.
    pub fn resolve_section(&self) -> Option<String> {
        if self.hydrated && !self.text_edited {
            self.stored_section.clone()
        } else {
            Some(text_to_html(&self.text))
        }
    }

    /// Image URL to persist, preferring a fresh upload over the stored one.
    pub fn resolve_image_url(&self, uploaded: Option<String>) -> Option<String> {
        uploaded.or_else(|| self.stored_image_url.clone())
    }
}

#[derive(Debug, Clone, Default)]
pub struct HeroImage {
    stored_url: Option<String>,
    pending: Option<ImageFile>,
}

impl HeroImage {
    pub fn stored_url(&self) -> Option<&str> {
        self.stored_url.as_deref()
    }

    pub fn pending(&self) -> Option<&ImageFile> {
        self.pending.as_ref()
    }
}

#[derive(Debug, Clone)]
pub enum PageEdit {
    AddPage,
    RemovePage { index: usize },
    UpdateText { index: usize, text: String },
    SelectImage { index: usize, image: ImageFile },
}

#[derive(Debug, Clone)]
pub struct ArticleEditor {
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub date: Option<NaiveDate>,
    pub read_time: String,
    pub topic: String,
    hero: HeroImage,
    pages: Vec<EditorPage>,
}

impl Default for ArticleEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl ArticleEditor {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            slug: String::new(),
            excerpt: String::new(),
            date: None,
            read_time: DEFAULT_READ_TIME.to_string(),
            topic: String::new(),
            hero: HeroImage::default(),
            pages: Vec::new(),
        }
    }

    /// Load an existing article for editing. An article without any
    /// stored page opens with one empty page.
    pub fn hydrate(article: &Article, topic_title: impl Into<String>) -> Self {
        let mut pages: Vec<EditorPage> = article
            .pages
            .iter()
            .map(|page| EditorPage::hydrated(page.section.as_deref(), page.image_url.as_deref()))
            .collect();
        if pages.is_empty() {
            pages.push(EditorPage::empty());
        }

        Self {
            title: article.title.to_string(),
            slug: article.slug.to_string(),
            excerpt: article.excerpt.clone().unwrap_or_default(),
            date: Some(article.date),
            read_time: article.read_time.clone(),
            topic: topic_title.into(),
            hero: HeroImage {
                stored_url: article.hero_image_url.clone(),
                pending: None,
            },
            pages,
        }
    }

    pub fn pages(&self) -> &[EditorPage] {
        &self.pages
    }

    pub fn hero(&self) -> &HeroImage {
        &self.hero
    }

    /// Appends an empty page and returns its index.
    pub fn add_page(&mut self) -> usize {
        self.pages.push(EditorPage::empty());
        self.pages.len() - 1
    }

    pub fn remove_page(&mut self, index: usize) -> DomainResult<()> {
        self.ensure_page(index)?;
        self.pages.remove(index);
        Ok(())
    }

    pub fn update_page_text(&mut self, index: usize, text: impl Into<String>) -> DomainResult<()> {
        let page = self.page_mut(index)?;
        page.text = text.into();
        page.text_edited = true;
        Ok(())
    }

    /// On a rejected image the page keeps whatever it had before.
    pub fn select_page_image(&mut self, index: usize, image: ImageFile) -> DomainResult<()> {
        self.ensure_page(index)?;
        image.validate()?;
        self.page_mut(index)?.pending_image = Some(image);
        Ok(())
    }

    pub fn select_hero_image(&mut self, image: ImageFile) -> DomainResult<()> {
        image.validate()?;
        self.hero.pending = Some(image);
        Ok(())
    }

    pub fn apply(&mut self, edit: PageEdit) -> DomainResult<()> {
        match edit {
            PageEdit::AddPage => {
                self.add_page();
                Ok(())
            }
            PageEdit::RemovePage { index } => self.remove_page(index),
            PageEdit::UpdateText { index, text } => self.update_page_text(index, text),
            PageEdit::SelectImage { index, image } => self.select_page_image(index, image),
        }
    }

    pub fn excerpt(&self) -> Option<String> {
        let trimmed = self.excerpt.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }

    pub fn topic_title(&self) -> &str {
        self.topic.trim()
    }

    /// Required before any network call: title, slug, topic, and at least
    /// one page.
    pub fn ensure_submittable(&self) -> DomainResult<()> {
        if self.title.trim().is_empty() {
            return Err(DomainError::validation("title is required"));
        }
        if self.slug.trim().is_empty() {
            return Err(DomainError::validation("slug is required"));
        }
        if self.topic_title().is_empty() {
            return Err(DomainError::validation("topic is required"));
        }
        if self.pages.is_empty() {
            return Err(DomainError::validation("at least one page is required"));
        }
        Ok(())
    }

    fn ensure_page(&self, index: usize) -> DomainResult<()> {
        if index < self.pages.len() {
            Ok(())
        } else {
            Err(DomainError::Validation(format!(
                "page {} does not exist",
                index + 1
            )))
        }
    }

    fn page_mut(&mut self, index: usize) -> DomainResult<&mut EditorPage> {
        let len = self.pages.len();
        self.pages.get_mut(index).ok_or_else(|| {
            DomainError::Validation(format!("page {} does not exist ({len} pages)", index + 1))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::article::pages::StoredPage;
    use crate::domain::article::value_objects::{ArticleSlug, ArticleStatus, ArticleTitle};
    use crate::domain::topic::TopicId;
    use chrono::Utc;

    fn png(name: &str) -> ImageFile {
        ImageFile::new(name, "image/png", vec![0u8; 16])
    }

    fn stored_article(pages: Vec<StoredPage>) -> Article {
        Article {
            slug: ArticleSlug::new("odd-facts").unwrap(),
            title: ArticleTitle::new("Odd Facts").unwrap(),
            excerpt: None,
            author: "Keyy".into(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            read_time: "3 min read".into(),
            topic_id: TopicId::new(1).unwrap(),
            hero_image_url: Some("/media/hero.jpg".into()),
            status: ArticleStatus::Published,
            pages,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn add_update_and_remove_pages() {
        let mut editor = ArticleEditor::new();
        assert_eq!(editor.add_page(), 0);
        assert_eq!(editor.add_page(), 1);
        editor.update_page_text(1, "second").unwrap();
        editor.update_page_text(0, "first").unwrap();
        editor.remove_page(0).unwrap();

        assert_eq!(editor.pages().len(), 1);
        assert_eq!(editor.pages()[0].text(), "second");
    }

    #[test]
    fn out_of_range_page_is_rejected() {
        let mut editor = ArticleEditor::new();
        assert!(editor.remove_page(0).is_err());
        assert!(editor.update_page_text(3, "x").is_err());
        assert!(editor.select_page_image(0, png("a.png")).is_err());
    }

    #[test]
    fn oversized_image_keeps_previous_selection() {
        let mut editor = ArticleEditor::new();
        editor.add_page();
        editor.select_page_image(0, png("first.png")).unwrap();

        let too_big = ImageFile::new("big.png", "image/png", vec![0u8; MAX_IMAGE_BYTES + 1]);
        assert!(editor.select_page_image(0, too_big).is_err());
        assert_eq!(editor.pages()[0].preview(), ImagePreview::Pending("first.png"));
    }

    #[test]
    fn non_image_hero_is_rejected() {
        let mut editor = ArticleEditor::new();
        let pdf = ImageFile::new("doc.pdf", "application/pdf", vec![1u8; 4]);
        assert!(editor.select_hero_image(pdf).is_err());
        assert!(editor.hero().pending().is_none());

        editor.select_hero_image(png("hero.png")).unwrap();
        assert_eq!(editor.hero().pending().unwrap().filename(), "hero.png");
    }

    #[test]
    fn image_at_exact_limit_is_accepted() {
        let image = ImageFile::new("edge.webp", "image/webp", vec![0u8; MAX_IMAGE_BYTES]);
        assert!(image.validate().is_ok());
    }

    #[test]
    fn extension_defaults_to_jpg() {
        assert_eq!(png("Photo.PNG").extension(), "png");
        assert_eq!(png("noext").extension(), "jpg");
        assert_eq!(png("trailing.").extension(), "jpg");
    }

    #[test]
    fn submittable_requires_fields_and_a_page() {
        let mut editor = ArticleEditor::new();
        editor.title = "Odd Facts".into();
        editor.slug = "odd-facts".into();
        editor.topic = "  ".into();
        assert!(editor.ensure_submittable().is_err());

        editor.topic = "Mind & Curiosity".into();
        assert!(editor.ensure_submittable().is_err());

        editor.add_page();
        assert!(editor.ensure_submittable().is_ok());
    }

    #[test]
    fn hydrate_keeps_stored_markup_and_images() {
        let article = stored_article(StoredPage::zip(
            vec!["<p>one</p>".into(), "<p>two</p>".into()],
            vec![Some("/media/1.jpg".into())],
        ));
        let mut editor = ArticleEditor::hydrate(&article, "Mind & Curiosity");

        assert_eq!(editor.pages().len(), 2);
        assert_eq!(editor.hero().stored_url(), Some("/media/hero.jpg"));
        assert_eq!(editor.pages()[0].resolve_section().as_deref(), Some("<p>one</p>"));
        assert_eq!(
            editor.pages()[0].resolve_image_url(None).as_deref(),
            Some("/media/1.jpg")
        );

        editor.update_page_text(1, "fresh\n\ntext").unwrap();
        assert_eq!(
            editor.pages()[1].resolve_section().as_deref(),
            Some("<p>fresh</p><p>text</p>")
        );
        assert_eq!(editor.pages()[1].resolve_image_url(None), None);
    }

    #[test]
    fn untouched_image_only_page_keeps_missing_section() {
        let article = stored_article(StoredPage::zip(
            vec!["<p>one</p>".into()],
            vec![None, Some("/media/2.jpg".into())],
        ));
        let mut editor = ArticleEditor::hydrate(&article, "Topic");
        assert_eq!(editor.pages()[1].resolve_section(), None);

        editor.update_page_text(1, "").unwrap();
        assert_eq!(
            editor.pages()[1].resolve_section().as_deref(),
            Some(crate::domain::content::EMPTY_PAGE_MARKUP)
        );
    }

    #[test]
    fn new_page_is_always_converted() {
        let mut editor = ArticleEditor::new();
        editor.add_page();
        assert_eq!(
            editor.pages()[0].resolve_section().as_deref(),
            Some(crate::domain::content::EMPTY_PAGE_MARKUP)
        );
    }

    #[test]
    fn hydrate_empty_article_opens_one_page() {
        let editor = ArticleEditor::hydrate(&stored_article(Vec::new()), "Topic");
        assert_eq!(editor.pages().len(), 1);
        assert_eq!(editor.pages()[0].text(), "");
    }
}

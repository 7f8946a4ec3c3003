// tests/support/builders.rs
use chrono::NaiveDate;

use neuralpulse_core::domain::article::*;
use neuralpulse_core::domain::topic::{Topic, TopicId, TopicTitle};

use super::mocks::fixed_now;

pub struct ArticleBuilder {
    slug: String,
    title: String,
    status: ArticleStatus,
    topic_id: i64,
    date: NaiveDate,
    hero_image_url: Option<String>,
    pages: Vec<StoredPage>,
}

impl ArticleBuilder {
    pub fn new() -> Self {
        Self {
            slug: "test-article".into(),
            title: "Test Article".into(),
            status: ArticleStatus::Published,
            topic_id: 1,
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            hero_image_url: Some("https://cdn.test/articles/hero.jpg".into()),
            pages: vec![StoredPage::new("<p>Only page</p>", None)],
        }
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn draft(mut self) -> Self {
        self.status = ArticleStatus::Draft;
        self
    }

    pub fn topic(mut self, topic_id: i64) -> Self {
        self.topic_id = topic_id;
        self
    }

    pub fn date(mut self, year: i32, month: u32, day: u32) -> Self {
        self.date = NaiveDate::from_ymd_opt(year, month, day).unwrap();
        self
    }

    /// Pages from the two stored columns, the way the repository sees them.
    pub fn columns(mut self, sections: &[&str], image_urls: &[Option<&str>]) -> Self {
        self.pages = StoredPage::zip(
            sections.iter().map(|s| s.to_string()).collect(),
            image_urls.iter().map(|u| u.map(str::to_string)).collect(),
        );
        self
    }

    pub fn build(self) -> Article {
        Article {
            slug: ArticleSlug::new(self.slug).unwrap(),
            title: ArticleTitle::new(self.title).unwrap(),
            excerpt: None,
            author: "Keyy".into(),
            date: self.date,
            read_time: "5 min read".into(),
            topic_id: TopicId::new(self.topic_id).unwrap(),
            hero_image_url: self.hero_image_url,
            status: self.status,
            pages: self.pages,
            created_at: fixed_now(),
            updated_at: fixed_now(),
        }
    }
}

pub fn topic(id: i64, title: &str) -> Topic {
    Topic {
        id: TopicId::new(id).unwrap(),
        title: TopicTitle::new(title).unwrap(),
        slug: None,
        description: None,
        icon: None,
        created_at: fixed_now(),
    }
}

pub fn png(name: &str) -> ImageFile {
    ImageFile::new(name, "image/png", vec![0x89u8, b'P', b'N', b'G'])
}

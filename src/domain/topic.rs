use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TopicId(pub i64);

impl TopicId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("topic id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<TopicId> for i64 {
    fn from(value: TopicId) -> Self {
        value.0
    }
}

/// Display name of a topic; also its lookup key, so it is stored trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TopicTitle(String);

impl TopicTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::Validation("topic cannot be empty".into()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for TopicTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone)]
pub struct Topic {
    pub id: TopicId,
    pub title: TopicTitle,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewTopic {
    pub title: TopicTitle,
    pub slug: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct TopicSummary {
    pub topic: Topic,
    pub published_articles: u64,
}

#[async_trait]
pub trait TopicRepository: Send + Sync {
    /// Ordered by title, with the number of published articles per topic.
    async fn list_with_counts(&self) -> DomainResult<Vec<TopicSummary>>;
    async fn find_by_title(&self, title: &TopicTitle) -> DomainResult<Option<Topic>>;
    async fn find_by_id(&self, id: TopicId) -> DomainResult<Option<Topic>>;
    async fn insert(&self, topic: NewTopic) -> DomainResult<Topic>;
}

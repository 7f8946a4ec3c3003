use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::topic::{NewTopic, Topic, TopicId, TopicRepository, TopicSummary, TopicTitle};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use super::map_sqlx;

#[derive(Clone)]
pub struct SqliteTopicRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteTopicRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct TopicRow {
    id: i64,
    title: String,
    slug: Option<String>,
    description: Option<String>,
    icon: Option<String>,
    created_at: DateTime<Utc>,
}

#[derive(Debug, FromRow)]
struct TopicCountRow {
    #[sqlx(flatten)]
    topic: TopicRow,
    published_articles: i64,
}

impl TryFrom<TopicRow> for Topic {
    type Error = DomainError;

    fn try_from(row: TopicRow) -> Result<Self, Self::Error> {
        Ok(Topic {
            id: TopicId::new(row.id)?,
            title: TopicTitle::new(row.title)?,
            slug: row.slug,
            description: row.description,
            icon: row.icon,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl TopicRepository for SqliteTopicRepository {
    async fn list_with_counts(&self) -> DomainResult<Vec<TopicSummary>> {
        let rows = sqlx::query_as::<_, TopicCountRow>(
            "SELECT t.id, t.title, t.slug, t.description, t.icon, t.created_at, \
                    COUNT(a.slug) AS published_articles \
             FROM topics t LEFT JOIN articles a ON a.topic_id = t.id AND a.status = 'published' \
             GROUP BY t.id \
             ORDER BY t.title",
        )
        .fetch_all(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter()
            .map(|row| {
                Ok(TopicSummary {
                    published_articles: u64::try_from(row.published_articles).unwrap_or_default(),
                    topic: Topic::try_from(row.topic)?,
                })
            })
            .collect()
    }

    async fn find_by_title(&self, title: &TopicTitle) -> DomainResult<Option<Topic>> {
        let row = sqlx::query_as::<_, TopicRow>(
            "SELECT id, title, slug, description, icon, created_at FROM topics WHERE title = ?",
        )
        .bind(title.as_str())
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Topic::try_from).transpose()
    }

    async fn find_by_id(&self, id: TopicId) -> DomainResult<Option<Topic>> {
        let row = sqlx::query_as::<_, TopicRow>(
            "SELECT id, title, slug, description, icon, created_at FROM topics WHERE id = ?",
        )
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Topic::try_from).transpose()
    }

    async fn insert(&self, topic: NewTopic) -> DomainResult<Topic> {
        let row = sqlx::query_as::<_, TopicRow>(
            "INSERT INTO topics (title, slug, created_at) VALUES (?, ?, ?) \
             RETURNING id, title, slug, description, icon, created_at",
        )
        .bind(topic.title.as_str())
        .bind(topic.slug)
        .bind(topic.created_at)
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        Topic::try_from(row)
    }
}

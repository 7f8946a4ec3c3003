// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::{storage::ImageStore, time::Clock, util::SlugGenerator},
    },
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository},
        topic::{NewTopic, Topic, TopicRepository, TopicTitle},
    },
};

#[derive(Debug, Clone)]
pub struct ArticleCommandSettings {
    /// First path segment of every uploaded image.
    pub image_namespace: String,
    pub default_author: String,
}

impl Default for ArticleCommandSettings {
    fn default() -> Self {
        Self {
            image_namespace: "articles".into(),
            default_author: "Keyy".into(),
        }
    }
}

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) topic_repo: Arc<dyn TopicRepository>,
    pub(super) image_store: Arc<dyn ImageStore>,
    pub(super) slugger: Arc<dyn SlugGenerator>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) settings: ArticleCommandSettings,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        read_repo: Arc<dyn ArticleReadRepository>,
        topic_repo: Arc<dyn TopicRepository>,
        image_store: Arc<dyn ImageStore>,
        slugger: Arc<dyn SlugGenerator>,
        clock: Arc<dyn Clock>,
        settings: ArticleCommandSettings,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            topic_repo,
            image_store,
            slugger,
            clock,
            settings,
        }
    }

    /// Look the topic up by title and insert it when missing. Two
    /// concurrent submissions may both miss; the unique index on the title
    /// turns the loser into a conflict.
    pub(super) async fn get_or_create_topic(&self, title: TopicTitle) -> ApplicationResult<Topic> {
        if let Some(topic) = self.topic_repo.find_by_title(&title).await? {
            return Ok(topic);
        }

        let slug = self.slugger.slugify(title.as_str());
        let topic = self
            .topic_repo
            .insert(NewTopic {
                slug: (!slug.is_empty()).then_some(slug),
                title,
                created_at: self.clock.now(),
            })
            .await?;
        tracing::info!(topic = %topic.title, topic_id = topic.id.0, "created topic");
        Ok(topic)
    }

    pub(super) async fn existing_topic(&self, title: TopicTitle) -> ApplicationResult<Topic> {
        self.topic_repo
            .find_by_title(&title)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("topic '{title}' not found")))
    }
}

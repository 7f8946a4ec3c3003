// src/application/queries/topics.rs
use std::sync::Arc;

use crate::{
    application::{dto::TopicDto, error::ApplicationResult},
    domain::topic::TopicRepository,
};

pub struct TopicQueryService {
    repo: Arc<dyn TopicRepository>,
}

impl TopicQueryService {
    pub fn new(repo: Arc<dyn TopicRepository>) -> Self {
        Self { repo }
    }

    /// Ordered by title.
    pub async fn list_topics(&self) -> ApplicationResult<Vec<TopicDto>> {
        let topics = self.repo.list_with_counts().await?;
        Ok(topics.into_iter().map(Into::into).collect())
    }
}

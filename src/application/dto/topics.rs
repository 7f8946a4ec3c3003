use crate::domain::topic::{Topic, TopicSummary};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TopicDto {
    pub id: i64,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Published articles filed under this topic.
    pub article_count: u64,
}

impl From<TopicSummary> for TopicDto {
    fn from(summary: TopicSummary) -> Self {
        let Topic {
            id,
            title,
            slug,
            description,
            icon,
            ..
        } = summary.topic;
        Self {
            id: id.into(),
            title: title.into_inner(),
            slug,
            description,
            icon,
            article_count: summary.published_articles,
        }
    }
}

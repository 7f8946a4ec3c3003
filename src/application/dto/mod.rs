pub mod articles;
pub mod auth;
pub mod newsletter;
pub mod serde_time;
pub mod topics;

pub use articles::{
    ArticleDto, ArticleReadingDto, ArticleSummaryDto, EditableArticleDto, EditablePageDto,
    PageViewDto,
};
pub use auth::{AuthenticatedAdmin, SessionDto};
pub use newsletter::SubscriberDto;
pub use topics::TopicDto;

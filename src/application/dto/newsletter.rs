use crate::domain::subscriber::Subscriber;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SubscriberDto {
    pub email: String,
    #[serde(with = "serde_time")]
    pub subscribed_at: DateTime<Utc>,
}

impl From<Subscriber> for SubscriberDto {
    fn from(subscriber: Subscriber) -> Self {
        Self {
            email: subscriber.email.as_str().to_string(),
            subscribed_at: subscriber.subscribed_at,
        }
    }
}

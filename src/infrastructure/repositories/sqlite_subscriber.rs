use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::subscriber::{EmailAddress, NewSubscriber, Subscriber, SubscriberRepository};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use super::map_sqlx;

#[derive(Clone)]
pub struct SqliteSubscriberRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteSubscriberRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct SubscriberRow {
    id: i64,
    email: String,
    subscribed_at: DateTime<Utc>,
}

impl TryFrom<SubscriberRow> for Subscriber {
    type Error = DomainError;

    fn try_from(row: SubscriberRow) -> Result<Self, Self::Error> {
        Ok(Subscriber {
            id: row.id,
            email: EmailAddress::new(row.email)?,
            subscribed_at: row.subscribed_at,
        })
    }
}

#[async_trait]
impl SubscriberRepository for SqliteSubscriberRepository {
    async fn insert(&self, subscriber: NewSubscriber) -> DomainResult<Subscriber> {
        let row = sqlx::query_as::<_, SubscriberRow>(
            "INSERT INTO subscribers (email, subscribed_at) VALUES (?, ?) \
             RETURNING id, email, subscribed_at",
        )
        .bind(subscriber.email.as_str())
        .bind(subscriber.subscribed_at)
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        Subscriber::try_from(row)
    }
}

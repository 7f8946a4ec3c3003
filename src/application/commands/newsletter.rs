// src/application/commands/newsletter.rs
use std::sync::Arc;

use crate::{
    application::{dto::SubscriberDto, error::ApplicationResult, ports::time::Clock},
    domain::subscriber::{EmailAddress, NewSubscriber, SubscriberRepository},
};

pub struct SubscribeCommand {
    pub email: String,
}

pub struct NewsletterCommandService {
    repo: Arc<dyn SubscriberRepository>,
    clock: Arc<dyn Clock>,
}

impl NewsletterCommandService {
    pub fn new(repo: Arc<dyn SubscriberRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }

    pub async fn subscribe(&self, command: SubscribeCommand) -> ApplicationResult<SubscriberDto> {
        let email = EmailAddress::new(command.email)?;
        let subscriber = self
            .repo
            .insert(NewSubscriber {
                email,
                subscribed_at: self.clock.now(),
            })
            .await?;
        tracing::info!(subscriber_id = subscriber.id, "newsletter subscription");
        Ok(subscriber.into())
    }
}

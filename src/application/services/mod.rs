// src/application/services/mod.rs
use std::sync::Arc;

use chrono::Duration;

use crate::{
    application::{
        commands::{
            articles::{ArticleCommandService, ArticleCommandSettings},
            auth::{AdminCredentials, AuthCommandService},
            newsletter::NewsletterCommandService,
        },
        dto::AuthenticatedAdmin,
        ports::{
            progress::{SubmissionProgress, TracingProgress},
            security::{PasswordHasher, SessionStore},
            storage::ImageStore,
            time::Clock,
            util::SlugGenerator,
        },
        queries::{articles::ArticleQueryService, topics::TopicQueryService},
    },
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository},
        subscriber::SubscriberRepository,
        topic::TopicRepository,
    },
};

/// Settings that shape the services but are not collaborators.
#[derive(Debug, Clone)]
pub struct ServiceSettings {
    pub articles: ArticleCommandSettings,
    pub admin: AdminCredentials,
    pub session_ttl: Duration,
}

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub topic_queries: Arc<TopicQueryService>,
    pub newsletter_commands: Arc<NewsletterCommandService>,
    pub auth_commands: Arc<AuthCommandService>,
    progress: Arc<dyn SubmissionProgress>,
}

impl ApplicationServices {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        article_write_repo: Arc<dyn ArticleWriteRepository>,
        article_read_repo: Arc<dyn ArticleReadRepository>,
        topic_repo: Arc<dyn TopicRepository>,
        subscriber_repo: Arc<dyn SubscriberRepository>,
        image_store: Arc<dyn ImageStore>,
        password_hasher: Arc<dyn PasswordHasher>,
        session_store: Arc<dyn SessionStore>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
        settings: ServiceSettings,
    ) -> Self {
        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&article_write_repo),
            Arc::clone(&article_read_repo),
            Arc::clone(&topic_repo),
            image_store,
            slugger,
            Arc::clone(&clock),
            settings.articles,
        ));

        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&article_read_repo),
            Arc::clone(&topic_repo),
        ));
        let topic_queries = Arc::new(TopicQueryService::new(topic_repo));

        let newsletter_commands = Arc::new(NewsletterCommandService::new(
            subscriber_repo,
            Arc::clone(&clock),
        ));

        let auth_commands = Arc::new(AuthCommandService::new(
            settings.admin,
            password_hasher,
            session_store,
            clock,
            settings.session_ttl,
        ));

        Self {
            article_commands,
            article_queries,
            topic_queries,
            newsletter_commands,
            auth_commands,
            progress: Arc::new(TracingProgress),
        }
    }

    /// Replace the default progress sink, which only logs.
    pub fn with_progress(mut self, progress: Arc<dyn SubmissionProgress>) -> Self {
        self.progress = progress;
        self
    }

    pub fn progress(&self) -> Arc<dyn SubmissionProgress> {
        Arc::clone(&self.progress)
    }

    /// Resolve a raw session token for the admin gate.
    pub async fn authenticate_admin(
        &self,
        token: &str,
    ) -> crate::application::ApplicationResult<AuthenticatedAdmin> {
        self.auth_commands.authenticate(token).await
    }
}

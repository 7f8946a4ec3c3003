// tests/support/mocks/repos.rs
use async_trait::async_trait;
use neuralpulse_core::domain::{
    article::{
        Article, ArticleListing, ArticleReadRepository, ArticleSlug, ArticleStatus,
        ArticleUpdate, ArticleWriteRepository, NewArticle,
    },
    errors::{DomainError, DomainResult},
    subscriber::{NewSubscriber, Subscriber, SubscriberRepository},
    topic::{NewTopic, Topic, TopicId, TopicRepository, TopicSummary, TopicTitle},
};
use std::sync::Mutex;

/// 記事・トピック・購読者をまとめて保持するインメモリリポジトリ
#[derive(Default)]
pub struct InMemoryRepos {
    articles: Mutex<Vec<Article>>,
    topics: Mutex<Vec<Topic>>,
    subscribers: Mutex<Vec<Subscriber>>,
    topic_inserts: Mutex<usize>,
}

impl InMemoryRepos {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed_article(&self, article: Article) {
        self.articles.lock().unwrap().push(article);
    }

    pub fn seed_topic(&self, topic: Topic) {
        self.topics.lock().unwrap().push(topic);
    }

    pub fn article(&self, slug: &str) -> Option<Article> {
        self.articles
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.slug.as_str() == slug)
            .cloned()
    }

    pub fn article_count(&self) -> usize {
        self.articles.lock().unwrap().len()
    }

    pub fn topics(&self) -> Vec<Topic> {
        self.topics.lock().unwrap().clone()
    }

    pub fn topic_inserts(&self) -> usize {
        *self.topic_inserts.lock().unwrap()
    }

    fn topic_title(&self, id: TopicId) -> Option<String> {
        self.topics
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.id == id)
            .map(|t| t.title.as_str().to_string())
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryRepos {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut articles = self.articles.lock().unwrap();
        if articles.iter().any(|a| a.slug == article.slug) {
            return Err(DomainError::Conflict("slug already exists".into()));
        }
        let stored = Article {
            slug: article.slug,
            title: article.title,
            excerpt: article.excerpt,
            author: article.author,
            date: article.date,
            read_time: article.read_time,
            topic_id: article.topic_id,
            hero_image_url: article.hero_image_url,
            status: article.status,
            pages: article.pages,
            created_at: article.created_at,
            updated_at: article.created_at,
        };
        articles.push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let mut articles = self.articles.lock().unwrap();
        let article = articles
            .iter_mut()
            .find(|a| a.slug == update.slug)
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        article.title = update.title;
        article.excerpt = update.excerpt;
        article.date = update.date;
        article.read_time = update.read_time;
        article.topic_id = update.topic_id;
        article.hero_image_url = update.hero_image_url;
        article.pages = update.pages;
        article.updated_at = update.updated_at;
        Ok(article.clone())
    }

    async fn delete(&self, slug: &ArticleSlug) -> DomainResult<()> {
        let mut articles = self.articles.lock().unwrap();
        let before = articles.len();
        articles.retain(|a| &a.slug != slug);
        if articles.len() == before {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryRepos {
    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        Ok(self.article(slug.as_str()))
    }

    async fn find_by_slug_and_status(
        &self,
        slug: &ArticleSlug,
        status: ArticleStatus,
    ) -> DomainResult<Option<Article>> {
        Ok(self.article(slug.as_str()).filter(|a| a.status == status))
    }

    async fn list_by_status(&self, status: ArticleStatus) -> DomainResult<Vec<ArticleListing>> {
        let mut matching: Vec<Article> = self
            .articles
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.status == status)
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));
        Ok(matching
            .into_iter()
            .map(|article| ArticleListing {
                topic_title: self.topic_title(article.topic_id),
                article,
            })
            .collect())
    }
}

#[async_trait]
impl TopicRepository for InMemoryRepos {
    async fn list_with_counts(&self) -> DomainResult<Vec<TopicSummary>> {
        let articles = self.articles.lock().unwrap().clone();
        let mut topics = self.topics();
        topics.sort_by(|a, b| a.title.as_str().cmp(b.title.as_str()));
        Ok(topics
            .into_iter()
            .map(|topic| TopicSummary {
                published_articles: articles
                    .iter()
                    .filter(|a| a.topic_id == topic.id && a.is_published())
                    .count() as u64,
                topic,
            })
            .collect())
    }

    async fn find_by_title(&self, title: &TopicTitle) -> DomainResult<Option<Topic>> {
        Ok(self
            .topics
            .lock()
            .unwrap()
            .iter()
            .find(|t| &t.title == title)
            .cloned())
    }

    async fn find_by_id(&self, id: TopicId) -> DomainResult<Option<Topic>> {
        Ok(self
            .topics
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.id == id)
            .cloned())
    }

    async fn insert(&self, topic: NewTopic) -> DomainResult<Topic> {
        let mut topics = self.topics.lock().unwrap();
        if topics.iter().any(|t| t.title == topic.title) {
            return Err(DomainError::Conflict("topic already exists".into()));
        }
        let stored = Topic {
            id: TopicId(topics.len() as i64 + 1),
            title: topic.title,
            slug: topic.slug,
            description: None,
            icon: None,
            created_at: topic.created_at,
        };
        topics.push(stored.clone());
        *self.topic_inserts.lock().unwrap() += 1;
        Ok(stored)
    }
}

#[async_trait]
impl SubscriberRepository for InMemoryRepos {
    async fn insert(&self, subscriber: NewSubscriber) -> DomainResult<Subscriber> {
        let mut subscribers = self.subscribers.lock().unwrap();
        if subscribers.iter().any(|s| s.email == subscriber.email) {
            return Err(DomainError::Conflict("email already subscribed".into()));
        }
        let stored = Subscriber {
            id: subscribers.len() as i64 + 1,
            email: subscriber.email,
            subscribed_at: subscriber.subscribed_at,
        };
        subscribers.push(stored.clone());
        Ok(stored)
    }
}

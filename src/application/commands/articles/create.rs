// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
        ports::progress::{SubmissionProgress, SubmissionStage},
    },
    domain::{
        article::{
            ArticleEditor, ArticleSlug, ArticleStatus, ArticleTitle, ImageFile, NewArticle,
            PLACEHOLDER_HERO_IMAGE, editor::DEFAULT_READ_TIME,
        },
        topic::TopicTitle,
    },
};
use chrono::NaiveDate;

#[derive(Debug, Clone, Default)]
pub struct NewPageInput {
    pub text: String,
    pub image: Option<ImageFile>,
}

#[derive(Debug, Clone)]
pub struct CreateArticleCommand {
    pub title: String,
    /// Derived from the title when blank.
    pub slug: Option<String>,
    pub excerpt: Option<String>,
    pub date: Option<NaiveDate>,
    pub read_time: Option<String>,
    pub topic: String,
    pub hero_image: Option<ImageFile>,
    pub pages: Vec<NewPageInput>,
}

impl CreateArticleCommand {
    pub fn builder() -> CreateArticleCommandBuilder {
        CreateArticleCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateArticleCommandBuilder {
    title: Option<String>,
    slug: Option<String>,
    excerpt: Option<String>,
    date: Option<NaiveDate>,
    read_time: Option<String>,
    topic: Option<String>,
    hero_image: Option<ImageFile>,
    pages: Vec<NewPageInput>,
}

impl CreateArticleCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = Some(excerpt.into());
        self
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn read_time(mut self, read_time: impl Into<String>) -> Self {
        self.read_time = Some(read_time.into());
        self
    }

    pub fn topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = Some(topic.into());
        self
    }

    pub fn hero_image(mut self, image: ImageFile) -> Self {
        self.hero_image = Some(image);
        self
    }

    pub fn page(mut self, text: impl Into<String>, image: Option<ImageFile>) -> Self {
        self.pages.push(NewPageInput {
            text: text.into(),
            image,
        });
        self
    }

    pub fn build(self) -> Result<CreateArticleCommand, &'static str> {
        Ok(CreateArticleCommand {
            title: self.title.ok_or("title is required")?,
            slug: self.slug,
            excerpt: self.excerpt,
            date: self.date,
            read_time: self.read_time,
            topic: self.topic.ok_or("topic is required")?,
            hero_image: self.hero_image,
            pages: self.pages,
        })
    }
}

impl ArticleCommandService {
    /// Fill a fresh editor from the command. Image checks happen here, so
    /// an invalid image fails before any network call.
    fn editor_for(&self, command: CreateArticleCommand) -> ApplicationResult<ArticleEditor> {
        let mut editor = ArticleEditor::new();
        // A supplied slug is normalized the same way as one derived from
        // the title.
        editor.slug = match command.slug.as_deref().map(str::trim) {
            Some(slug) if !slug.is_empty() => {
                let normalized = self.slugger.slugify(slug);
                if normalized.is_empty() {
                    return Err(ApplicationError::validation(format!(
                        "slug '{slug}' has no letters or digits"
                    )));
                }
                normalized
            }
            _ => self.slugger.slugify(&command.title),
        };
        editor.title = command.title;
        editor.excerpt = command.excerpt.unwrap_or_default();
        editor.date = command.date;
        if let Some(read_time) = command.read_time.filter(|r| !r.trim().is_empty()) {
            editor.read_time = read_time;
        }
        editor.topic = command.topic;

        if let Some(hero) = command.hero_image {
            editor.select_hero_image(hero)?;
        }
        for page in command.pages {
            let index = editor.add_page();
            editor.update_page_text(index, page.text)?;
            if let Some(image) = page.image {
                editor.select_page_image(index, image)?;
            }
        }

        Ok(editor)
    }

    pub async fn create_article(
        &self,
        command: CreateArticleCommand,
        progress: &dyn SubmissionProgress,
    ) -> ApplicationResult<ArticleDto> {
        let editor = self.editor_for(command)?;
        self.submit_new(&editor, progress).await
    }

    /// Publish the editor's contents as a new article: topic, hero image,
    /// page images in order, then a single insert.
    pub async fn submit_new(
        &self,
        editor: &ArticleEditor,
        progress: &dyn SubmissionProgress,
    ) -> ApplicationResult<ArticleDto> {
        editor.ensure_submittable()?;
        let slug = ArticleSlug::new(editor.slug.trim())?;
        let title = ArticleTitle::new(editor.title.trim())?;
        let topic_title = TopicTitle::new(editor.topic_title())?;

        progress.report(slug.as_str(), SubmissionStage::ResolvingTopic);
        let topic = self.get_or_create_topic(topic_title).await?;

        let hero_image_url = self
            .upload_hero(&slug, editor, false, progress)
            .await?
            .unwrap_or_else(|| PLACEHOLDER_HERO_IMAGE.to_string());
        let pages = self.resolve_pages(&slug, editor, false, progress).await?;

        let now = self.clock.now();
        let read_time = match editor.read_time.trim() {
            "" => DEFAULT_READ_TIME.to_string(),
            value => value.to_string(),
        };

        progress.report(slug.as_str(), SubmissionStage::Saving);
        let created = self
            .write_repo
            .insert(NewArticle {
                slug,
                title,
                excerpt: editor.excerpt(),
                author: self.settings.default_author.clone(),
                date: editor.date.unwrap_or_else(|| now.date_naive()),
                read_time,
                topic_id: topic.id,
                hero_image_url: Some(hero_image_url),
                status: ArticleStatus::Published,
                pages,
                created_at: now,
            })
            .await?;

        tracing::info!(article = %created.slug, pages = created.pages.len(), "article created");
        Ok(created.into())
    }
}

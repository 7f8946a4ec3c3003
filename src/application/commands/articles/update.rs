// src/application/commands/articles/update.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
        ports::progress::{SubmissionProgress, SubmissionStage},
    },
    domain::{
        article::{ArticleEditor, ArticleSlug, ArticleTitle, ArticleUpdate, ImageFile, PageEdit},
        topic::TopicTitle,
    },
};
use chrono::NaiveDate;

/// Changes to an existing article. Fields left `None` keep their stored
/// value; `edits` are applied to the hydrated page list in order.
#[derive(Debug, Clone, Default)]
pub struct UpdateArticleCommand {
    pub slug: String,
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub date: Option<NaiveDate>,
    pub read_time: Option<String>,
    pub topic: Option<String>,
    pub hero_image: Option<ImageFile>,
    pub edits: Vec<PageEdit>,
}

impl ArticleCommandService {
    pub async fn update_article(
        &self,
        command: UpdateArticleCommand,
        progress: &dyn SubmissionProgress,
    ) -> ApplicationResult<ArticleDto> {
        let slug = ArticleSlug::new(command.slug)?;
        let article = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let topic_title = self
            .topic_repo
            .find_by_id(article.topic_id)
            .await?
            .map(|topic| topic.title.into_inner())
            .unwrap_or_default();

        let mut editor = ArticleEditor::hydrate(&article, topic_title);
        if let Some(title) = command.title {
            editor.title = title;
        }
        if let Some(excerpt) = command.excerpt {
            editor.excerpt = excerpt;
        }
        if let Some(date) = command.date {
            editor.date = Some(date);
        }
        if let Some(read_time) = command.read_time {
            editor.read_time = read_time;
        }
        if let Some(topic) = command.topic {
            editor.topic = topic;
        }
        if let Some(hero) = command.hero_image {
            editor.select_hero_image(hero)?;
        }
        for edit in command.edits {
            editor.apply(edit)?;
        }

        self.submit_existing(&slug, &editor, progress).await
    }

    /// Save an edited article under its original slug. Only images picked in
    /// this session are uploaded; everything else keeps its stored URL.
    pub async fn submit_existing(
        &self,
        slug: &ArticleSlug,
        editor: &ArticleEditor,
        progress: &dyn SubmissionProgress,
    ) -> ApplicationResult<ArticleDto> {
        editor.ensure_submittable()?;
        let title = ArticleTitle::new(editor.title.trim())?;
        let topic_title = TopicTitle::new(editor.topic_title())?;

        progress.report(slug.as_str(), SubmissionStage::ResolvingTopic);
        let topic = self.existing_topic(topic_title).await?;

        let hero_image_url = match self.upload_hero(slug, editor, true, progress).await? {
            Some(url) => Some(url),
            None => editor.hero().stored_url().map(str::to_string),
        };
        let pages = self.resolve_pages(slug, editor, true, progress).await?;

        let now = self.clock.now();
        progress.report(slug.as_str(), SubmissionStage::Saving);
        let updated = self
            .write_repo
            .update(ArticleUpdate {
                slug: slug.clone(),
                title,
                excerpt: editor.excerpt(),
                date: editor.date.unwrap_or_else(|| now.date_naive()),
                read_time: editor.read_time.clone(),
                topic_id: topic.id,
                hero_image_url,
                pages,
                updated_at: now,
            })
            .await?;

        tracing::info!(article = %updated.slug, pages = updated.pages.len(), "article updated");
        Ok(updated.into())
    }
}

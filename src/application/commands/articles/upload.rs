// src/application/commands/articles/upload.rs
use std::fmt;

use super::ArticleCommandService;
use crate::{
    application::{
        error::ApplicationResult,
        ports::progress::{SubmissionProgress, SubmissionStage},
    },
    domain::article::{ArticleEditor, ArticleSlug, StoredPage},
};

/// Which slot of an article an image fills; part of its storage path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageRole {
    Hero,
    /// 1-based page number.
    Page(usize),
}

impl fmt::Display for ImageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hero => f.write_str("hero"),
            Self::Page(n) => write!(f, "page-{n}"),
        }
    }
}

impl ArticleCommandService {
    /// `{namespace}/{slug}-{role}-{timestamp}.{ext}`
    pub(super) fn image_path(&self, slug: &ArticleSlug, role: ImageRole, extension: &str) -> String {
        format!(
            "{}/{}-{}-{}.{}",
            self.settings.image_namespace.trim_end_matches('/'),
            slug,
            role,
            self.clock.now().timestamp_millis(),
            extension
        )
    }

    /// Upload the hero image when one was selected in this session.
    pub(super) async fn upload_hero(
        &self,
        slug: &ArticleSlug,
        editor: &ArticleEditor,
        upsert: bool,
        progress: &dyn SubmissionProgress,
    ) -> ApplicationResult<Option<String>> {
        let Some(image) = editor.hero().pending() else {
            return Ok(None);
        };

        progress.report(slug.as_str(), SubmissionStage::UploadingHero);
        let path = self.image_path(slug, ImageRole::Hero, &image.extension());
        self.image_store.upload(&path, image, upsert).await?;
        Ok(Some(self.image_store.public_url(&path)))
    }

    /// Resolve every editor page into its persisted form, uploading fresh
    /// images strictly one after another in page order. The first failure
    /// aborts the remaining uploads; nothing already stored is removed.
    pub(super) async fn resolve_pages(
        &self,
        slug: &ArticleSlug,
        editor: &ArticleEditor,
        upsert: bool,
        progress: &dyn SubmissionProgress,
    ) -> ApplicationResult<Vec<StoredPage>> {
        let mut pages = Vec::with_capacity(editor.pages().len());

        for (index, page) in editor.pages().iter().enumerate() {
            let uploaded = match page.pending_image() {
                Some(image) => {
                    let number = index + 1;
                    progress.report(slug.as_str(), SubmissionStage::UploadingPage(number));
                    let path = self.image_path(slug, ImageRole::Page(number), &image.extension());
                    self.image_store.upload(&path, image, upsert).await?;
                    Some(self.image_store.public_url(&path))
                }
                None => None,
            };

            pages.push(StoredPage {
                section: page.resolve_section(),
                image_url: page.resolve_image_url(uploaded),
            });
        }

        Ok(pages)
    }
}

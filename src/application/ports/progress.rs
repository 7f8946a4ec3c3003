// src/application/ports/progress.rs
use std::fmt;

/// Step an article submission is about to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionStage {
    ResolvingTopic,
    UploadingHero,
    /// 1-based page number.
    UploadingPage(usize),
    Saving,
}

impl fmt::Display for SubmissionStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ResolvingTopic => f.write_str("Resolving topic..."),
            Self::UploadingHero => f.write_str("Uploading hero image..."),
            Self::UploadingPage(n) => write!(f, "Uploading image for page {n}..."),
            Self::Saving => f.write_str("Saving changes..."),
        }
    }
}

/// Receives status updates before each network call of a submission.
pub trait SubmissionProgress: Send + Sync {
    fn report(&self, slug: &str, stage: SubmissionStage);
}

/// Default sink: one structured log line per stage.
#[derive(Debug, Default, Clone)]
pub struct TracingProgress;

impl SubmissionProgress for TracingProgress {
    fn report(&self, slug: &str, stage: SubmissionStage) {
        tracing::info!(article = slug, status = %stage, "article submission progress");
    }
}

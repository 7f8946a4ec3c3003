// tests/support/mocks/storage.rs
use async_trait::async_trait;
use neuralpulse_core::application::{
    ApplicationResult, error::ApplicationError, ports::storage::ImageStore,
};
use neuralpulse_core::domain::article::ImageFile;
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedUpload {
    pub path: String,
    pub content_type: String,
    pub len: usize,
    pub upsert: bool,
}

/// Records uploads in call order. With `fail_at(n)`, the n-th upload
/// (1-based) fails and later ones are still attempted if called.
#[derive(Default)]
pub struct RecordingImageStore {
    uploads: Mutex<Vec<RecordedUpload>>,
    fail_at: Option<usize>,
    attempts: Mutex<usize>,
}

impl RecordingImageStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_at(n: usize) -> Self {
        Self {
            fail_at: Some(n),
            ..Self::default()
        }
    }

    pub fn uploads(&self) -> Vec<RecordedUpload> {
        self.uploads.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageStore for RecordingImageStore {
    async fn upload(&self, path: &str, image: &ImageFile, upsert: bool) -> ApplicationResult<()> {
        let attempt = {
            let mut attempts = self.attempts.lock().unwrap();
            *attempts += 1;
            *attempts
        };
        if self.fail_at == Some(attempt) {
            return Err(ApplicationError::upload(format!("bucket unavailable for {path}")));
        }

        self.uploads.lock().unwrap().push(RecordedUpload {
            path: path.to_string(),
            content_type: image.content_type().to_string(),
            len: image.len(),
            upsert,
        });
        Ok(())
    }

    fn public_url(&self, path: &str) -> String {
        format!("https://cdn.test/{path}")
    }
}

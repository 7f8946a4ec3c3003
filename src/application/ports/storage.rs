// src/application/ports/storage.rs
use crate::application::ApplicationResult;
use crate::domain::article::ImageFile;
use async_trait::async_trait;

/// Binary store for article images.
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Store `image` at `path`. Without `upsert`, an existing object at the
    /// same path is an upload error.
    async fn upload(&self, path: &str, image: &ImageFile, upsert: bool) -> ApplicationResult<()>;

    fn public_url(&self, path: &str) -> String;
}

use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::storage::ImageStore,
};
use crate::domain::article::ImageFile;
use async_trait::async_trait;
use std::path::{Component, Path, PathBuf};
use tokio::io::AsyncWriteExt;

/// Writes images under a directory that the HTTP layer serves statically.
#[derive(Debug, Clone)]
pub struct LocalImageStore {
    root: PathBuf,
    public_base: String,
}

impl LocalImageStore {
    pub fn new(root: impl Into<PathBuf>, public_base: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            public_base: public_base.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Object paths are relative and may not climb out of the root.
    fn resolve(&self, path: &str) -> ApplicationResult<PathBuf> {
        let relative = Path::new(path);
        let safe = !path.is_empty()
            && relative
                .components()
                .all(|component| matches!(component, Component::Normal(_)));
        if !safe {
            return Err(ApplicationError::upload(format!("invalid storage path: {path}")));
        }
        Ok(self.root.join(relative))
    }
}

#[async_trait]
impl ImageStore for LocalImageStore {
    async fn upload(&self, path: &str, image: &ImageFile, upsert: bool) -> ApplicationResult<()> {
        let target = self.resolve(path)?;
        if let Some(parent) = target.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|err| ApplicationError::upload(err.to_string()))?;
        }

        let mut options = tokio::fs::OpenOptions::new();
        options.write(true);
        if upsert {
            options.create(true).truncate(true);
        } else {
            options.create_new(true);
        }

        let mut file = options.open(&target).await.map_err(|err| {
            if err.kind() == std::io::ErrorKind::AlreadyExists {
                ApplicationError::upload(format!("{path} already exists"))
            } else {
                ApplicationError::upload(err.to_string())
            }
        })?;
        file.write_all(image.bytes())
            .await
            .map_err(|err| ApplicationError::upload(err.to_string()))?;
        file.flush()
            .await
            .map_err(|err| ApplicationError::upload(err.to_string()))?;

        tracing::debug!(path, bytes = image.len(), content_type = image.content_type(), "stored image");
        Ok(())
    }

    fn public_url(&self, path: &str) -> String {
        format!("{}/{}", self.public_base, path.trim_start_matches('/'))
    }
}

// src/presentation/http/state.rs
use crate::application::services::ApplicationServices;
use std::{path::PathBuf, sync::Arc};

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    /// Served read-only under `/media`.
    pub media_root: PathBuf,
    /// Empty means any origin.
    pub allowed_origins: Vec<String>,
}

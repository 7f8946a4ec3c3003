// tests/support/mocks/mod.rs
//! テスト用モックの再エクスポート
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod progress;
pub mod repos;
pub mod security;
pub mod storage;
pub mod time;
pub mod util;

pub use progress::RecordingProgress;
pub use repos::InMemoryRepos;
pub use security::{PlainPasswordHasher, ADMIN_PASSWORD, ADMIN_USERNAME};
pub use storage::{RecordedUpload, RecordingImageStore};
pub use time::fixed_now;
pub use util::{DummyClock, DummySlug};

// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Source of "now" for article timestamps, default publication dates,
/// session expiry and image path suffixes.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

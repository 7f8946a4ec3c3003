// tests/support/mocks/util.rs
use chrono::{DateTime, Utc};

#[derive(Clone)]
pub struct DummyClock;

impl neuralpulse_core::application::ports::time::Clock for DummyClock {
    fn now(&self) -> DateTime<Utc> {
        super::time::fixed_now()
    }
}

/// Same rules as production; slugs show up in asserted paths.
#[derive(Clone)]
pub struct DummySlug;

impl neuralpulse_core::application::ports::util::SlugGenerator for DummySlug {
    fn slugify(&self, s: &str) -> String {
        neuralpulse_core::domain::content::slugify(s)
    }
}

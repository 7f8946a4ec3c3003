// src/application/ports/util.rs

/// Derives an article slug from its title when none is given.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}

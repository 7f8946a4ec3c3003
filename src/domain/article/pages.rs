// src/domain/article/pages.rs
//! Page projection for articles.
//!
//! Articles are stored as two index-aligned columns, `sections` (markup)
//! and `image_urls` (nullable). Everything above the repository works on
//! a single ordered list of [`StoredPage`] values instead.

use crate::domain::content::EMPTY_PAGE_MESSAGE;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoredPage {
    pub section: Option<String>,
    pub image_url: Option<String>,
}

impl StoredPage {
    pub fn new(section: impl Into<String>, image_url: Option<String>) -> Self {
        Self {
            section: Some(section.into()),
            image_url,
        }
    }

    /// Join the persisted columns into pages, padding the shorter column
    /// with empty entries. Empty strings count as missing.
    pub fn zip(sections: Vec<String>, image_urls: Vec<Option<String>>) -> Vec<Self> {
        let len = sections.len().max(image_urls.len());
        let mut sections = sections.into_iter();
        let mut image_urls = image_urls.into_iter();

        (0..len)
            .map(|_| Self {
                section: sections.next().filter(|s| !s.is_empty()),
                image_url: image_urls.next().flatten().filter(|u| !u.is_empty()),
            })
            .collect()
    }

    /// Split pages back into the persisted columns. Both columns always
    /// come out with the same length.
    pub fn unzip(pages: &[Self]) -> (Vec<String>, Vec<Option<String>>) {
        pages
            .iter()
            .map(|page| (page.section.clone().unwrap_or_default(), page.image_url.clone()))
            .unzip()
    }
}

/// What the reader shows for one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage<'a> {
    pub index: usize,
    pub section_html: Option<&'a str>,
    pub image_url: Option<&'a str>,
    pub placeholder: Option<&'static str>,
}

/// Cursor over an article's pages. The only transitions are `next` and
/// `previous`; both are clamped to `[0, total_pages - 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageNavigator {
    current: usize,
    total_pages: usize,
}

impl PageNavigator {
    /// Start at the first page. An article without pages still has one
    /// (placeholder) page.
    pub fn new(page_count: usize) -> Self {
        Self {
            current: 0,
            total_pages: page_count.max(1),
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub fn has_next(&self) -> bool {
        self.current + 1 < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.current > 0
    }

    /// Returns `false` and stays put at the last page.
    pub fn next(&mut self) -> bool {
        if self.has_next() {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// Returns `false` and stays put at the first page.
    pub fn previous(&mut self) -> bool {
        if self.has_previous() {
            self.current -= 1;
            true
        } else {
            false
        }
    }

    /// Step forward until `target` or the last page, whichever comes first.
    pub fn advance_to(&mut self, target: usize) {
        while self.current < target && self.next() {}
    }

    pub fn render<'a>(&self, pages: &'a [StoredPage]) -> RenderedPage<'a> {
        let page = pages.get(self.current);
        let section_html = page.and_then(|p| p.section.as_deref());
        let image_url = page.and_then(|p| p.image_url.as_deref());
        let placeholder = if section_html.is_none() && image_url.is_none() {
            Some(EMPTY_PAGE_MESSAGE)
        } else {
            None
        };

        RenderedPage {
            index: self.current,
            section_html,
            image_url,
            placeholder,
        }
    }
}

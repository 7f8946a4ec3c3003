// src/domain/content.rs
//! Pure text transformations shared by the editor and the reader.

/// Markup emitted for a page whose text is empty or whitespace-only.
pub const EMPTY_PAGE_MARKUP: &str = "<p>No content available for this page.</p>";

/// Message shown by the reader when a page has neither markup nor an image.
pub const EMPTY_PAGE_MESSAGE: &str = "No content available for this page.";

/// Derive a URL-safe identifier from a title.
///
/// The title is lowercased and trimmed, every character outside
/// `[a-z0-9]`, whitespace, `-` is dropped, runs of whitespace, `_` and `-`
/// collapse into a single hyphen, and hyphens at either end are removed.
/// A title without any usable character yields an empty string.
pub fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase();
    let mut slug = String::with_capacity(lowered.len());
    let mut pending_separator = false;

    for ch in lowered.trim().chars() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(ch);
        } else if ch.is_whitespace() || ch == '-' {
            pending_separator = true;
        }
        // `_` and anything else is stripped before separators collapse, so it
        // neither separates nor joins words.
    }

    slug
}

/// Normalize a topic title or `?topic=` filter value for comparison.
pub fn normalize_topic(value: &str) -> String {
    let lowered = value.trim().to_lowercase();
    let mut normalized = String::with_capacity(lowered.len());
    let mut in_separator = false;

    for ch in lowered.chars() {
        if ch.is_whitespace() || ch == '-' {
            if !in_separator {
                normalized.push('-');
                in_separator = true;
            }
        } else {
            // Dropped characters still end a separator run.
            if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
                normalized.push(ch);
            }
            in_separator = false;
        }
    }

    normalized
}

/// Convert author-entered plain text into paragraph markup.
///
/// Paragraphs are separated by a blank line; single newlines inside a
/// paragraph become `<br>`. Author text is trusted and is not escaped.
pub fn text_to_html(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return EMPTY_PAGE_MARKUP.to_string();
    }

    trimmed
        .split("\n\n")
        .map(str::trim)
        .filter(|paragraph| !paragraph.is_empty())
        .map(|paragraph| format!("<p>{}</p>", paragraph.replace('\n', "<br>")))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_basic_title() {
        assert_eq!(slugify("Odd Facts"), "odd-facts");
        assert_eq!(slugify("  Mind & Curiosity  "), "mind-curiosity");
    }

    #[test]
    fn slugify_collapses_separators_and_trims_hyphens() {
        assert_eq!(slugify("--Hello   -- World--"), "hello-world");
        assert_eq!(slugify("a - b"), "a-b");
    }

    #[test]
    fn slugify_strips_underscores_before_collapsing() {
        assert_eq!(slugify("snake_case title"), "snakecase-title");
    }

    #[test]
    fn slugify_without_valid_characters_is_empty() {
        assert_eq!(slugify("   "), "");
        assert_eq!(slugify("\t\n"), "");
        assert_eq!(slugify("!!! ???"), "");
    }

    #[test]
    fn slugify_output_is_lowercase_alnum_with_single_interior_hyphens() {
        let samples = [
            "Talking to Strangers: Fear, Awkwardness, and Unexpected Wisdom",
            "Café -- déjà vu",
            "  _Leading and trailing_  ",
            "2AM thoughts",
            "ÅÄÖ",
        ];
        for sample in samples {
            let slug = slugify(sample);
            assert!(!slug.starts_with('-'), "{slug}");
            assert!(!slug.ends_with('-'), "{slug}");
            assert!(!slug.contains("--"), "{slug}");
            assert!(
                slug.chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
                "{slug}"
            );
        }
    }

    #[test]
    fn normalize_topic_matches_titles_and_filters() {
        assert_eq!(normalize_topic("Mind & Curiosity"), "mind--curiosity");
        assert_eq!(normalize_topic("Life  Experiments"), "life-experiments");
        assert_eq!(
            normalize_topic("Life Experiments"),
            normalize_topic("life-experiments")
        );
    }

    #[test]
    fn text_to_html_splits_paragraphs() {
        assert_eq!(text_to_html("A\n\nB"), "<p>A</p><p>B</p>");
    }

    #[test]
    fn text_to_html_single_newline_becomes_line_break() {
        assert_eq!(text_to_html("A\nB"), "<p>A<br>B</p>");
    }

    #[test]
    fn text_to_html_drops_empty_paragraphs() {
        assert_eq!(text_to_html("A\n\n   \n\nB"), "<p>A</p><p>B</p>");
    }

    #[test]
    fn text_to_html_placeholder_for_blank_input() {
        assert_eq!(text_to_html(""), EMPTY_PAGE_MARKUP);
        assert_eq!(text_to_html("  \n\n \t "), EMPTY_PAGE_MARKUP);
    }

    #[test]
    fn text_to_html_keeps_author_markup_verbatim() {
        assert_eq!(
            text_to_html("<em>odd</em> & true"),
            "<p><em>odd</em> & true</p>"
        );
    }
}

//! Version text extraction from vendor page markup.

use scraper::{ElementRef, Html, Selector};

/// Separator after which vendor pages append unrelated text.
const TRAILER_SEPARATOR: char = '|';

/// Text of the first `<tag>` element carrying `class`.
///
/// The class must match one of the element's class tokens exactly;
/// `class="btn-text-large"` does not match `btn-text`. Returns `None`
/// when no element matches.
pub fn find_element_text(html: &str, tag: &str, class: &str) -> Option<String> {
    let selector = match Selector::parse(tag) {
        Ok(selector) => selector,
        Err(e) => {
            tracing::warn!(tag, error = %e, "Unusable element name");
            return None;
        }
    };

    let document = Html::parse_document(html);
    document
        .select(&selector)
        .find(|el| el.value().classes().any(|c| c == class))
        .map(stripped_text)
}

/// Concatenate every descendant text node, each trimmed, skipping blanks.
fn stripped_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect()
}

/// Keep only the part before the first `|`.
pub fn strip_trailer(text: &str) -> &str {
    text.split(TRAILER_SEPARATOR).next().unwrap_or(text)
}

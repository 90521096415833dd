//! Literary text extraction
//!
//! Work pages on the archive use several layouts, so content is taken from the
//! first strategy that yields text:
//!
//! 1. The configured poem containers, in priority order
//! 2. The main content region
//! 3. The whole page

use crate::crawler::parser::SiteSelectors;
use scraper::{ElementRef, Html, Selector};

/// Elements whose text is never literary content
const SKIPPED_ELEMENTS: &[&str] = &["script", "style", "noscript"];

/// Extracts the literary text of a page
///
/// Always returns a string; an empty string means no strategy found text.
pub fn extract_content(document: &Html, selectors: &SiteSelectors) -> String {
    for selector in &selectors.poems {
        if let Some(text) = first_text(document, selector) {
            return text;
        }
    }

    if let Some(text) = first_text(document, &selectors.content) {
        return text;
    }

    element_text(document.root_element())
}

/// Text of the first element matching `selector`, if it has any
fn first_text(document: &Html, selector: &Selector) -> Option<String> {
    document
        .select(selector)
        .next()
        .map(element_text)
        .filter(|text| !text.is_empty())
}

/// Joins the element's text nodes one per line
///
/// Each text node is trimmed and blank ones are dropped, so paragraphs and
/// `<br>`-separated verses each end up on their own line.
pub fn element_text(element: ElementRef<'_>) -> String {
    element
        .descendants()
        .filter_map(|node| {
            let text = node.value().as_text()?;
            let skipped = node.ancestors().any(|ancestor| {
                ancestor
                    .value()
                    .as_element()
                    .is_some_and(|el| SKIPPED_ELEMENTS.contains(&el.name()))
            });
            (!skipped).then(|| text.trim())
        })
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

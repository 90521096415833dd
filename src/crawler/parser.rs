//! HTML parsing for link discovery
//!
//! This module handles:
//! - Compiling the configured CSS selectors once per run
//! - Collecting anchors from the main content region
//! - Resolving hrefs against the site base URL
//! - Turning filtered anchors into author and work entries

use crate::classify::{matches_work, LinkClassifier};
use crate::config::SiteConfig;
use crate::record::{AuthorEntry, WorkEntry};
use crate::ConfigError;
use scraper::{Html, Selector};
use url::Url;

/// An anchor found inside the content region
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    /// Trimmed anchor text
    pub text: String,
    /// Raw href attribute, empty when missing
    pub href: String,
}

/// Compiled selectors for the archive layout
#[derive(Debug, Clone)]
pub struct SiteSelectors {
    /// Main content region
    pub content: Selector,
    /// Poem containers, highest priority first
    pub poems: Vec<Selector>,
    anchor: Selector,
}

impl SiteSelectors {
    /// Compiles the selectors named in the `[site]` section
    pub fn from_config(site: &SiteConfig) -> Result<Self, ConfigError> {
        let poems = site
            .poem_selectors
            .iter()
            .map(|s| compile(s))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            content: compile(&site.content_selector)?,
            poems,
            anchor: compile("a")?,
        })
    }
}

fn compile(selector: &str) -> Result<Selector, ConfigError> {
    Selector::parse(selector)
        .map_err(|e| ConfigError::InvalidSelector(format!("'{}': {:?}", selector, e)))
}

/// Collects every anchor inside the content region, in document order
///
/// Anchors without an href are kept with an empty href so the classifier
/// can reject them.
pub fn extract_anchors(document: &Html, selectors: &SiteSelectors) -> Vec<Anchor> {
    document
        .select(&selectors.content)
        .flat_map(|region| region.select(&selectors.anchor))
        .map(|element| Anchor {
            text: element.text().collect::<String>().trim().to_string(),
            href: element.value().attr("href").unwrap_or("").to_string(),
        })
        .collect()
}

/// Resolves a link href to an absolute URL
///
/// Returns None for empty hrefs, fragment-only links and anything that does
/// not resolve to an HTTP(S) URL.
pub fn resolve_link(href: &str, base_url: &Url) -> Option<String> {
    let href = href.trim();

    if href.is_empty() || href.starts_with('#') {
        return None;
    }

    match base_url.join(href) {
        Ok(absolute_url) if matches!(absolute_url.scheme(), "http" | "https") => {
            Some(absolute_url.to_string())
        }
        _ => None,
    }
}

/// Collects author entries from the index page
///
/// Only `Candidate` links are kept; collection stops once `limit` entries
/// have been found.
pub fn discover_authors(
    document: &Html,
    selectors: &SiteSelectors,
    classifier: &LinkClassifier,
    base_url: &Url,
    limit: usize,
) -> Vec<AuthorEntry> {
    extract_anchors(document, selectors)
        .into_iter()
        .filter(|anchor| classifier.classify(&anchor.text, &anchor.href).is_candidate())
        .filter_map(|anchor| {
            resolve_link(&anchor.href, base_url).map(|index_url| AuthorEntry {
                name: anchor.text,
                index_url,
            })
        })
        .take(limit)
        .collect()
}

/// Collects links that look like works of `owner_name`
///
/// Used both for an author's list of works and for the parts listed on a
/// work's own page. Duplicates are kept in the order they appear.
pub fn discover_works(
    document: &Html,
    selectors: &SiteSelectors,
    classifier: &LinkClassifier,
    base_url: &Url,
    owner_name: &str,
) -> Vec<WorkEntry> {
    extract_anchors(document, selectors)
        .into_iter()
        .filter(|anchor| classifier.classify(&anchor.text, &anchor.href).is_candidate())
        .filter(|anchor| matches_work(&anchor.text, owner_name))
        .filter_map(|anchor| {
            tracing::trace!("Work link: {} -> {}", anchor.text, anchor.href);
            resolve_link(&anchor.href, base_url).map(|url| WorkEntry {
                title: anchor.text,
                url,
            })
        })
        .collect()
}

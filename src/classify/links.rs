use crate::config::Config;
use std::borrow::Cow;
use std::collections::HashSet;

/// Markers that show up in disambiguation and meta links, never in work titles
const META_MARKERS: &[&str] = &["...", "…", "|"];

/// Classification of a single anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkClass {
    /// Navigation or UI link
    Chrome,
    /// Link to a language section of the archive
    LanguageLabel,
    /// Passes the navigation filter; eligible for work matching
    Candidate,
    /// Points outside the article namespace
    Irrelevant,
}

impl LinkClass {
    /// Returns true if the link may be an author, work, or part
    pub fn is_candidate(&self) -> bool {
        matches!(self, Self::Candidate)
    }

    /// Returns true for links that belong to site navigation
    pub fn is_navigation(&self) -> bool {
        matches!(self, Self::Chrome | Self::LanguageLabel)
    }
}

/// Closed-world link filter
///
/// Both label lists are exact-match denylists loaded from configuration. Any
/// label not listed is treated as a candidate, so new site chrome shows up as
/// false positives until it is added to the config.
#[derive(Debug, Clone)]
pub struct LinkClassifier {
    navigation_labels: HashSet<String>,
    language_labels: HashSet<String>,
    article_prefix: String,
    namespace_prefixes: Vec<String>,
}

impl LinkClassifier {
    pub fn new<N, L, P>(
        navigation_labels: N,
        language_labels: L,
        article_prefix: impl Into<String>,
        namespace_prefixes: P,
    ) -> Self
    where
        N: IntoIterator,
        N::Item: Into<String>,
        L: IntoIterator,
        L::Item: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
    {
        Self {
            navigation_labels: navigation_labels.into_iter().map(Into::into).collect(),
            language_labels: language_labels.into_iter().map(Into::into).collect(),
            article_prefix: article_prefix.into(),
            namespace_prefixes: namespace_prefixes.into_iter().map(Into::into).collect(),
        }
    }

    /// Builds a classifier from the `[filters]` and `[site]` sections
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.filters.navigation_labels.iter().cloned(),
            config.filters.language_labels.iter().cloned(),
            config.site.article_prefix.clone(),
            config.site.namespace_prefixes.iter().cloned(),
        )
    }

    /// Classifies an anchor by its text and raw href
    ///
    /// # Rules
    ///
    /// | Condition | Result |
    /// |-----------|--------|
    /// | empty text | `Chrome` |
    /// | text is a navigation label | `Chrome` |
    /// | text is a language label | `LanguageLabel` |
    /// | text contains a meta marker (ellipsis, pipe) | `Chrome` |
    /// | href in a category/talk namespace | `Chrome` |
    /// | href outside the article prefix | `Irrelevant` |
    /// | otherwise | `Candidate` |
    ///
    /// Hrefs are percent-decoded before prefix checks, since the wiki may
    /// emit either encoded or raw Devanagari paths.
    pub fn classify(&self, text: &str, href: &str) -> LinkClass {
        let text = text.trim();

        if text.is_empty() || self.navigation_labels.contains(text) {
            return LinkClass::Chrome;
        }

        if self.language_labels.contains(text) {
            return LinkClass::LanguageLabel;
        }

        if META_MARKERS.iter().any(|marker| text.contains(marker)) {
            return LinkClass::Chrome;
        }

        let href = decode_href(href.trim());

        if self
            .namespace_prefixes
            .iter()
            .any(|prefix| href.starts_with(prefix.as_str()))
        {
            return LinkClass::Chrome;
        }

        if !href.starts_with(self.article_prefix.as_str()) {
            return LinkClass::Irrelevant;
        }

        LinkClass::Candidate
    }
}

fn decode_href(href: &str) -> Cow<'_, str> {
    urlencoding::decode(href).unwrap_or(Cow::Borrowed(href))
}

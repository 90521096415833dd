//! Per-run harvesting context shared by the resolvers

use crate::classify::LinkClassifier;
use crate::config::Config;
use crate::crawler::fetcher::Fetcher;
use crate::crawler::parser::SiteSelectors;
use crate::crawler::politeness::Politeness;
use crate::HarvestError;
use url::Url;

/// Everything a resolver needs to fetch, filter and extract pages
///
/// Built once per run from the configuration; holds no per-author state.
#[derive(Debug, Clone)]
pub struct Session {
    pub(crate) fetcher: Fetcher,
    pub(crate) politeness: Politeness,
    pub(crate) selectors: SiteSelectors,
    pub(crate) classifier: LinkClassifier,
    pub(crate) base_url: Url,
}

impl Session {
    pub fn from_config(config: &Config) -> Result<Self, HarvestError> {
        Ok(Self {
            fetcher: Fetcher::from_config(config)?,
            politeness: Politeness::from_config(&config.crawler),
            selectors: SiteSelectors::from_config(&config.site)?,
            classifier: LinkClassifier::from_config(config),
            base_url: Url::parse(&config.site.base_url)?,
        })
    }

    /// Fetches the markup of a page
    pub async fn fetch(&self, url: &str) -> Result<String, HarvestError> {
        self.fetcher.fetch(url).await
    }

    /// Waits out one politeness delay
    pub async fn pause(&self) {
        self.politeness.pause().await
    }
}

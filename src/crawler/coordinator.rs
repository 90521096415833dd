//! Harvest coordinator - top-level crawl orchestration
//!
//! This module contains the main loop that:
//! - Fetches the author index and enumerates authors
//! - Runs the author resolver for each author in order
//! - Persists each completed author record
//! - Skips authors whose pages cannot be retrieved

use crate::config::Config;
use crate::crawler::parser::discover_authors;
use crate::crawler::resolver::AuthorResolver;
use crate::crawler::session::Session;
use crate::output::{JsonDirStore, RecordStore};
use crate::record::AuthorEntry;
use crate::HarvestError;
use scraper::Html;
use std::time::Instant;
use url::Url;

/// Outcome counters for one harvest run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrawlReport {
    /// Authors taken from the index (after the cap)
    pub authors_found: usize,
    /// Authors whose record was written
    pub authors_saved: usize,
    /// Authors skipped because a page or the write failed
    pub authors_failed: usize,
    /// Works across all saved records
    pub works_saved: usize,
}

/// Main harvest coordinator
pub struct Coordinator {
    session: Session,
    store: Box<dyn RecordStore>,
    index_url: Url,
    max_authors: usize,
}

impl Coordinator {
    /// Creates a coordinator writing JSON records to the configured output directory
    pub fn new(config: &Config) -> Result<Self, HarvestError> {
        let store = JsonDirStore::new(&config.output.output_dir);
        Self::with_store(config, Box::new(store))
    }

    /// Creates a coordinator with a custom record store
    pub fn with_store(config: &Config, store: Box<dyn RecordStore>) -> Result<Self, HarvestError> {
        Ok(Self {
            session: Session::from_config(config)?,
            store,
            index_url: config.site.index_url()?,
            max_authors: config.crawler.max_authors,
        })
    }

    /// Fetches the index page and lists up to `max-authors` authors
    ///
    /// A failure here is fatal for the run: without the index there is
    /// nothing to harvest.
    pub async fn discover_authors(&self) -> Result<Vec<AuthorEntry>, HarvestError> {
        tracing::info!("Scraping author index: {}", self.index_url);
        let body = self.session.fetch(self.index_url.as_str()).await?;
        let document = Html::parse_document(&body);

        Ok(discover_authors(
            &document,
            &self.session.selectors,
            &self.session.classifier,
            &self.session.base_url,
            self.max_authors,
        ))
    }

    /// Runs the full harvest
    ///
    /// 1. Enumerate authors from the index
    /// 2. For each author, in order:
    ///    a. Resolve all works
    ///    b. Write the record (only when every page was retrieved)
    ///    c. Pause
    /// 3. Report totals
    pub async fn run(&self) -> Result<CrawlReport, HarvestError> {
        let start_time = Instant::now();
        let authors = self.discover_authors().await?;
        tracing::info!("Found {} authors", authors.len());

        let mut report = CrawlReport {
            authors_found: authors.len(),
            ..CrawlReport::default()
        };
        let resolver = AuthorResolver::new(&self.session);

        for (position, author) in authors.iter().enumerate() {
            tracing::debug!(
                "Author {}/{}: {}",
                position + 1,
                authors.len(),
                author.name
            );

            match resolver.resolve(author).await {
                Ok(record) => match self.store.store(&author.name, &record) {
                    Ok(location) => {
                        report.authors_saved += 1;
                        report.works_saved += record.works.len();
                        tracing::info!(
                            "Completed: {} ({} works), saved to {}",
                            author.name,
                            record.works.len(),
                            location.display()
                        );
                    }
                    Err(e) => {
                        report.authors_failed += 1;
                        tracing::error!("Failed to save {}: {}", author.name, e);
                    }
                },
                Err(e) => {
                    report.authors_failed += 1;
                    tracing::error!("Skipping author {}: {}", author.name, e);
                }
            }

            self.session.pause().await;
        }

        tracing::info!(
            "Harvest finished in {:?}: {} saved, {} failed, {} works",
            start_time.elapsed(),
            report.authors_saved,
            report.authors_failed,
            report.works_saved
        );

        Ok(report)
    }
}

//! Work and author resolution
//!
//! The archive has no flag marking a work as multi-part. A work is treated as
//! multi-part when its own page links to further "Title / Author" pages of the
//! same author; each of those links becomes one part. This is a heuristic and
//! lives entirely inside [`WorkResolver`].
//!
//! Parsed documents are never held across an `.await`; each page is parsed,
//! reduced to owned data, and dropped before the next request.

use crate::crawler::extract::extract_content;
use crate::crawler::parser::discover_works;
use crate::crawler::session::Session;
use crate::record::{AuthorEntry, AuthorRecord, PartRecord, WorkEntry, WorkRecord};
use crate::HarvestError;
use scraper::Html;

/// Resolves one work into a single or multipart record
pub struct WorkResolver<'a> {
    session: &'a Session,
}

impl<'a> WorkResolver<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Fetches a work page and decides between `Single` and `Multipart`
    ///
    /// # Algorithm
    ///
    /// 1. Fetch and parse the work page
    /// 2. Collect same-author work links on it as part candidates
    /// 3. Fetch each part in order, pausing after every part
    /// 4. No parts: the work is `Single` with the page's own text
    ///
    /// Any retrieval failure is returned to the caller.
    pub async fn resolve(
        &self,
        owner_name: &str,
        work: &WorkEntry,
    ) -> Result<WorkRecord, HarvestError> {
        tracing::info!("Fetching work: {}", work.title);
        let body = self.session.fetch(&work.url).await?;

        let (parts, page_content) = {
            let document = Html::parse_document(&body);
            let parts = discover_works(
                &document,
                &self.session.selectors,
                &self.session.classifier,
                &self.session.base_url,
                owner_name,
            );
            (parts, extract_content(&document, &self.session.selectors))
        };

        if !parts.is_empty() {
            tracing::info!("Multipart work: {} ({} parts)", work.title, parts.len());
        }

        let mut records = Vec::with_capacity(parts.len());
        for part in parts {
            tracing::debug!("Part: {}", part.title);
            let content = self.extract_page(&part.url).await?;
            records.push(PartRecord {
                title: part.title,
                content,
            });
            self.session.pause().await;
        }

        Ok(
            WorkRecord::multipart(work.title.clone(), records).unwrap_or_else(|| {
                tracing::debug!("Single work: {}", work.title);
                WorkRecord::Single {
                    title: work.title.clone(),
                    content: page_content,
                }
            }),
        )
    }

    async fn extract_page(&self, url: &str) -> Result<String, HarvestError> {
        let body = self.session.fetch(url).await?;
        let document = Html::parse_document(&body);
        Ok(extract_content(&document, &self.session.selectors))
    }
}

/// Resolves one author into a complete record
pub struct AuthorResolver<'a> {
    session: &'a Session,
    works: WorkResolver<'a>,
}

impl<'a> AuthorResolver<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self {
            session,
            works: WorkResolver::new(session),
        }
    }

    /// Lists an author's works from their page, in document order
    pub async fn discover(&self, author: &AuthorEntry) -> Result<Vec<WorkEntry>, HarvestError> {
        let body = self.session.fetch(&author.index_url).await?;
        let document = Html::parse_document(&body);

        Ok(discover_works(
            &document,
            &self.session.selectors,
            &self.session.classifier,
            &self.session.base_url,
            &author.name,
        ))
    }

    /// Harvests every work of `author`
    ///
    /// Fails as a whole if any page cannot be retrieved, so a record is
    /// either complete or not produced at all.
    pub async fn resolve(&self, author: &AuthorEntry) -> Result<AuthorRecord, HarvestError> {
        tracing::info!("Harvesting author: {}", author.name);
        let entries = self.discover(author).await?;
        tracing::info!("Found {} works for {}", entries.len(), author.name);

        let mut works = Vec::with_capacity(entries.len());
        for entry in &entries {
            works.push(self.works.resolve(&author.name, entry).await?);
            self.session.pause().await;
        }

        Ok(AuthorRecord {
            author: author.name.clone(),
            works,
        })
    }
}

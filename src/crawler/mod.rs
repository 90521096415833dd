//! Crawler module for fetching and harvesting archive pages
//!
//! This module contains the core harvesting logic, including:
//! - HTTP fetching with bounded retries
//! - Anchor collection and link discovery
//! - Literary text extraction
//! - Work and author resolution
//! - Overall harvest coordination with politeness delays
//!
//! Everything runs sequentially: one request at a time, authors, works and
//! parts in discovery order.

mod coordinator;
mod extract;
mod fetcher;
mod parser;
mod politeness;
mod resolver;
mod session;

pub use coordinator::{Coordinator, CrawlReport};
pub use extract::{element_text, extract_content};
pub use fetcher::{build_http_client, Fetcher};
pub use parser::{
    discover_authors, discover_works, extract_anchors, resolve_link, Anchor, SiteSelectors,
};
pub use politeness::Politeness;
pub use resolver::{AuthorResolver, WorkResolver};
pub use session::Session;

//! Link classification for Kosh-Harvester
//!
//! The archive has no semantic markup telling navigation apart from content,
//! so links are sorted using only their text and href:
//!
//! - [`LinkClassifier`] drops site chrome, language labels and namespace links.
//! - [`matches_work`] keeps links following the "Title / Author" convention.

mod links;
mod pattern;

pub use links::{LinkClass, LinkClassifier};
pub use pattern::{matches_work, normalize_owner_name};

//! Harvested record types
//!
//! `AuthorRecord` is the unit written to disk; everything below it is owned by
//! its parent and assembled once, in discovery order.

use serde::{Deserialize, Serialize};

/// An author link found on the top-level index page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorEntry {
    pub name: String,
    pub index_url: String,
}

/// A candidate work link found on an author's page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkEntry {
    pub title: String,
    pub url: String,
}

/// One part of a multi-part work
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartRecord {
    pub title: String,
    pub content: String,
}

/// A harvested work, either a standalone page or a sequence of parts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum WorkRecord {
    Single { title: String, content: String },
    Multipart { title: String, parts: Vec<PartRecord> },
}

impl WorkRecord {
    /// Builds a multipart record; `None` when `parts` is empty
    pub fn multipart(title: impl Into<String>, parts: Vec<PartRecord>) -> Option<Self> {
        if parts.is_empty() {
            return None;
        }
        Some(Self::Multipart {
            title: title.into(),
            parts,
        })
    }

    pub fn title(&self) -> &str {
        match self {
            Self::Single { title, .. } | Self::Multipart { title, .. } => title,
        }
    }

    pub fn is_multipart(&self) -> bool {
        matches!(self, Self::Multipart { .. })
    }
}

/// Everything harvested for one author
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorRecord {
    pub author: String,
    pub works: Vec<WorkRecord>,
}

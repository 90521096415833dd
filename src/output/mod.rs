//! Output module for persisting harvested records
//!
//! Each author is written once, as a whole, after all of their works have
//! been harvested.

mod json;
mod traits;

pub use json::{sanitize_key, JsonDirStore};
pub use traits::{OutputError, OutputResult, RecordStore};

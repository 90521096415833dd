//! One JSON document per author

use crate::output::traits::{OutputResult, RecordStore};
use crate::record::AuthorRecord;
use std::fs;
use std::path::PathBuf;

/// Writes each author record to `<dir>/<author>.json`
///
/// Documents are pretty-printed UTF-8 with non-Latin text kept as is. Each
/// write goes to a temporary file that is renamed into place, so a reader
/// never sees a half-written record.
#[derive(Debug, Clone)]
pub struct JsonDirStore {
    dir: PathBuf,
}

impl JsonDirStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path the record for `key` is written to
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", sanitize_key(key)))
    }
}

impl RecordStore for JsonDirStore {
    fn store(&self, key: &str, record: &AuthorRecord) -> OutputResult<PathBuf> {
        fs::create_dir_all(&self.dir)?;

        let mut json = serde_json::to_string_pretty(record)?;
        json.push('\n');

        let path = self.path_for(key);
        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, json)?;
        if let Err(e) = fs::rename(&tmp_path, &path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e.into());
        }

        Ok(path)
    }
}

/// Longest key in bytes, leaving room for the `.json.tmp` suffix under the
/// usual 255-byte file name limit
const MAX_KEY_BYTES: usize = 200;

/// Makes an author name safe to use as a file name
///
/// Path separators and control characters become `_`; a name that would
/// still be empty or a relative path component becomes `_`. Long names are
/// cut at a character boundary.
pub fn sanitize_key(key: &str) -> String {
    let mut cleaned = String::new();
    for c in key.trim().chars() {
        let c = match c {
            '/' | '\\' => '_',
            c if c.is_control() => '_',
            c => c,
        };
        if cleaned.len() + c.len_utf8() > MAX_KEY_BYTES {
            break;
        }
        cleaned.push(c);
    }

    match cleaned.as_str() {
        "" | "." | ".." => "_".to_string(),
        _ => cleaned,
    }
}

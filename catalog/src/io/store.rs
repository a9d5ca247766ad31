//! Whole-list JSON codec.
//!
//! Each record list lives entirely in one file as a JSON array. Loads read
//! and decode the full file; saves serialize the full list and overwrite the
//! file — no append, no partial write, no backup. A missing file decodes to
//! an empty list rather than an error, so a fresh install needs no setup.

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::StoreError;

/// Load the full ordered record list from `path`.
///
/// Missing file ⇒ `Ok(vec![])`. Content that is not a valid JSON array of
/// the expected record shape ⇒ [`StoreError::Decode`].
pub fn load_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, StoreError> {
    if !path.exists() {
        debug!(path = %path.display(), "data file missing, treating as empty list");
        return Ok(Vec::new());
    }
    let contents = fs::read_to_string(path).map_err(|source| StoreError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let records: Vec<T> = serde_json::from_str(&contents).map_err(|source| StoreError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), count = records.len(), "records loaded");
    Ok(records)
}

/// Serialize the full ordered list and overwrite the file at `path`.
///
/// Parent directories are created as needed so the default `data/` layout
/// works on first run.
pub fn save_records<T: Serialize>(path: &Path, records: &[T]) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| StoreError::Write {
                path: path.to_path_buf(),
                source,
            })?;
        }
    }
    let mut buf = serde_json::to_string_pretty(records).map_err(StoreError::Encode)?;
    buf.push('\n');
    debug!(path = %path.display(), count = records.len(), "writing records");
    fs::write(path, buf).map_err(|source| StoreError::Write {
        path: path.to_path_buf(),
        source,
    })
}

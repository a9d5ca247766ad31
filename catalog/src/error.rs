//! Error taxonomy for the storage codec and the repositories.
//!
//! Uses `thiserror` for structured, matchable variants. Domain outcomes
//! (duplicate id, not found, missing program reference) are non-fatal: the
//! shell prints them and redisplays the menu. Storage errors — in particular
//! a file whose content fails to decode — have no recovery path and
//! terminate the process.

use std::path::PathBuf;

use thiserror::Error;

/// Failures of the whole-list JSON codec.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing file exists but could not be read.
    #[error("read {path}: {source}", path = path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The rewritten list could not be written back.
    #[error("write {path}: {source}", path = path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file content is not a valid JSON array of the expected shape.
    #[error("decode {path}: {source}", path = path.display())]
    Decode {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// A record list could not be serialized.
    #[error("encode records: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Outcomes reported by the program and course repositories.
#[derive(Debug, Error)]
pub enum RepoError {
    /// Create was given an identifier that already exists in the list.
    #[error("a record with id {id} already exists")]
    DuplicateId { id: u32 },

    /// Update targeted an identifier absent from the list.
    #[error("no record with id {id}")]
    NotFound { id: u32 },

    /// Course creation referenced a program that does not exist.
    #[error("no program with id {id}")]
    ProgramNotFound { id: u32 },

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl RepoError {
    /// True for outcomes the shell reports and survives; false for storage
    /// failures, which propagate and end the process.
    pub fn is_domain_outcome(&self) -> bool {
        !matches!(self, RepoError::Store(_))
    }
}

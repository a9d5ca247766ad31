//! Console CRUD manager for academic programs and their courses.
//!
//! Two record lists (programs and courses) are persisted as flat JSON arrays
//! in two local files. Every operation loads the relevant list fresh from
//! disk, applies the change in memory, and rewrites the file in full — the
//! files are the sole source of truth, there is no caching across operations.
//!
//! - **[`io`]**: Side-effecting layer — the whole-list JSON codec and the
//!   TOML configuration holding the two data-file paths.
//! - **[`programs`] / [`courses`]**: Repositories, one per record type. All
//!   domain outcomes (duplicate id, not found, missing program reference)
//!   are reported as [`error::RepoError`] values, never panics.
//! - **[`menu`]**: The interactive console shell driving the repositories.

pub mod courses;
pub mod error;
pub mod io;
pub mod logging;
pub mod menu;
pub mod model;
pub mod programs;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

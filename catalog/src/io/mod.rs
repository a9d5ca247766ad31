//! I/O layer: the whole-list JSON codec and the data-file configuration.

pub mod config;
pub mod store;

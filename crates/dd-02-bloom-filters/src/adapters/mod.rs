//! Adapters Layer
//!
//! File-system access for filter artifacts.

pub mod file_store;

pub use file_store::{load_filter, read_header, write_filter};

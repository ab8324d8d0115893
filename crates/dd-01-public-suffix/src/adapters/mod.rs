//! Adapters Layer
//!
//! Reading suffix lists and blocklists from disk.

pub mod source_file;

pub use source_file::{load_table, read_source_file};

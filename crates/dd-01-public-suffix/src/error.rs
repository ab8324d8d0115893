//! Error types for the Public Suffix subsystem
//!
//! Rule parsing never fails; only reading a source from disk can.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading a suffix or blocklist source
#[derive(Debug, Error)]
pub enum SuffixError {
    #[error("Failed to read source {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

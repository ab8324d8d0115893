//! Error types for the Domain Filter subsystem
//!
//! Query-time problems are never errors: an unparseable host is a
//! `BlockDecision::InvalidHost`. Errors only arise while opening a filter or
//! running the build pipeline.

use std::path::PathBuf;

use dd_01_public_suffix::SuffixError;
use dd_02_bloom_filters::{ArtifactError, BloomError};
use thiserror::Error;

/// Errors that can occur while constructing or building a domain filter
#[derive(Debug, Error)]
pub enum FilterError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Source list error: {0}")]
    Source(#[from] SuffixError),

    #[error("Failed to load filter artifact {path}: {source}")]
    ArtifactLoad {
        path: PathBuf,
        #[source]
        source: ArtifactError,
    },

    #[error("Failed to write filter artifact {path}: {source}")]
    ArtifactWrite {
        path: PathBuf,
        #[source]
        source: ArtifactError,
    },

    #[error("Filter sizing error: {0}")]
    Sizing(#[from] BloomError),
}

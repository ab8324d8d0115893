//! Error types for the Bloom filter subsystem

use thiserror::Error;

/// Errors raised while configuring or sizing a filter
#[derive(Debug, Error)]
pub enum BloomError {
    #[error("Invalid false positive rate: {fpr} (must be in (0, {max}])")]
    InvalidFPR { fpr: f64, max: f64 },

    #[error("Filter size exceeds maximum: {size} > {max} bits")]
    FilterTooLarge { size: usize, max: usize },

    #[error("Invalid filter parameters: {0}")]
    InvalidParameters(String),
}

/// Errors raised while encoding, decoding or storing a filter artifact
///
/// Every variant is fatal for the reader: a filter is never handed out
/// from a partially decoded artifact.
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("Not a filter artifact: bad magic {found:?}")]
    BadMagic { found: [u8; 4] },

    #[error("Unsupported artifact format version {found} (supported: {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },

    #[error("Artifact header truncated: {0}")]
    TruncatedHeader(String),

    #[error("Bit array length mismatch: header expects {expected} bytes, found {found}")]
    LengthMismatch { expected: usize, found: usize },

    #[error("Invalid artifact parameters: {0}")]
    InvalidParameters(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Artifact I/O error: {0}")]
    Io(#[from] std::io::Error),
}

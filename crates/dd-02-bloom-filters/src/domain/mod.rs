//! Domain Layer - Pure filter logic
//!
//! This layer contains:
//! - Buildable and read-only Bloom filters
//! - Hash functions
//! - Parameter calculations
//! - Configuration
//! - Artifact encoding
//!
//! RULES:
//! - No I/O operations
//! - No async code

pub mod artifact;
pub mod bloom_filter;
pub mod config;
pub mod hash_functions;
pub mod parameters;
pub mod read_only;

pub use artifact::{ArtifactHeader, ARTIFACT_MAGIC, FORMAT_VERSION, HEADER_LEN};
pub use bloom_filter::BloomFilter;
pub use config::{BloomConfig, BloomConfigBuilder};
pub use parameters::{calculate_fpr, calculate_optimal_parameters, BloomFilterParams};
pub use read_only::ReadOnlyBloomFilter;

//! # DD-02 Bloom Filters
//!
//! Compact probabilistic set used to hold the registrable domains of a
//! denylist.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): Pure logic, no I/O
//!   - `BloomFilter`: buildable filter (insert + query)
//!   - `ReadOnlyBloomFilter`: loaded filter (query only)
//!   - `BloomConfig` / `BloomConfigBuilder`: sizing configuration
//!   - `artifact`: versioned on-disk layout
//!
//! - **Ports Layer** (`ports/`): `MembershipQuery`, the read contract both
//!   filter types satisfy
//!
//! - **Adapters Layer** (`adapters/`): artifact file store
//!
//! ## Invariants
//!
//! - FPR = (1 - e^(-kn/m))^k for n insertions
//! - No false negatives: if inserted, contains() MUST return true
//! - A loaded filter cannot be mutated
//!
//! ## Usage Example
//!
//! ```ignore
//! use dd_02_bloom_filters::{BloomFilter, MembershipQuery, ReadOnlyBloomFilter};
//!
//! let mut filter = BloomFilter::new_with_fpr(2, 1e-6);
//! filter.insert(b"example.com");
//! filter.insert(b"example.co.uk");
//!
//! let bytes = filter.to_bytes()?;
//! let loaded = ReadOnlyBloomFilter::from_bytes(&bytes)?;
//! assert!(loaded.contains(b"example.com"));
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;

pub use adapters::{load_filter, read_header, write_filter};
pub use domain::{
    ArtifactHeader, BloomConfig, BloomConfigBuilder, BloomFilter, BloomFilterParams,
    ReadOnlyBloomFilter, FORMAT_VERSION,
};
pub use error::{ArtifactError, BloomError};
pub use ports::MembershipQuery;

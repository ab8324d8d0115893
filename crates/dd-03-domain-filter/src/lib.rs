//! # DD-03 Domain Filter
//!
//! Decides whether a host belongs to a blocked domain.
//!
//! A host is reduced to its registrable domain with the public suffix table
//! and that domain is looked up in a Bloom filter loaded from an artifact.
//! A small set of top-level domains is blocked outright, and any host the
//! resolver cannot place is blocked as well.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): host normalization, `BlockedTlds`,
//!   `BlockDecision`
//! - **Service Layer** (`service/`): `DomainFilter` (read path) and
//!   `DenylistBuilder` / `run_build` (offline build path)
//! - `config`: `FilterConfig` and `BuildConfig`, defaults plus environment
//! - `metrics`: optional decision counters
//!
//! ## Usage Example
//!
//! ```ignore
//! use dd_03_domain_filter::{DomainFilter, FilterConfig};
//!
//! let filter = DomainFilter::open(&FilterConfig::from_env())?;
//! if filter.is_blocked("ads.tracker.example") {
//!     // drop the request
//! }
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod service;

pub use config::{BuildConfig, FilterConfig, FilterConfigBuilder};
pub use domain::{normalize_host, BlockDecision, BlockedTlds, DEFAULT_BLOCKED_TLDS};
pub use error::FilterError;
pub use metrics::{FilterMetrics, MetricsRecorder, MetricsSnapshot, NoOpMetrics};
pub use service::{run_build, BuildReport, DenylistBuilder, DomainFilter};

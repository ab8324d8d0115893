//! # Domain Denylist Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── fixtures.rs       # Shared suffix list and blocklist on disk
//! └── integration/      # Build -> load -> decide across crates
//!
//! tests/benches/
//! └── filter_benchmarks.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p dd-tests
//! cargo test -p dd-tests integration::fail_closed
//!
//! # Benchmarks
//! cargo bench -p dd-tests
//! ```

pub mod fixtures;
pub mod integration;

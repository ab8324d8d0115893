//! # Integration Flows
//!
//! Each module drives the real build pipeline into a temporary directory and
//! reads the result back through `DomainFilter::open`.

pub mod artifact;
pub mod concurrency;
pub mod fail_closed;
pub mod pipeline;

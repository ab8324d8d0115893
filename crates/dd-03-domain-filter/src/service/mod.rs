//! Service Layer - Read path and build pipeline

pub mod builder;
pub mod domain_filter;

pub use builder::{run_build, BuildReport, DenylistBuilder};
pub use domain_filter::DomainFilter;

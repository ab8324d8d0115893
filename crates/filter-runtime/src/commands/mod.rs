//! Subcommand implementations
//!
//! Each command writes its result to the given writer and logs progress
//! through `tracing`, so stdout carries only results.

pub mod build;
pub mod check;
pub mod inspect;

pub use build::run_build_command;
pub use check::{check_hosts, collect_hosts, run_check_command, HostVerdict};
pub use inspect::run_inspect_command;

//! Ports Layer
//!
//! Defines the traits through which other subsystems consume filters.

pub mod inbound;

pub use inbound::MembershipQuery;

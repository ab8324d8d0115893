//! Domain Layer - Pure decision logic
//!
//! RULES:
//! - No I/O operations
//! - No panics on any host input

pub mod blocked_tlds;
pub mod decision;
pub mod host;

pub use blocked_tlds::{BlockedTlds, DEFAULT_BLOCKED_TLDS};
pub use decision::BlockDecision;
pub use host::{is_well_formed, normalize_host, top_level_label};

//! # DD-01 Public Suffix
//!
//! Public Suffix List parsing and registrable-domain resolution.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): tokenizer, `SuffixRule`, `PublicSuffixTable`,
//!   `resolve`
//! - **Adapters Layer** (`adapters/`): reading sources from disk
//!
//! ## Usage Example
//!
//! ```ignore
//! use dd_01_public_suffix::PublicSuffixTable;
//!
//! let table = PublicSuffixTable::parse("com\nuk\nco.uk\n");
//! let domain = table.registrable_domain("www.example.co.uk").unwrap();
//! assert_eq!(domain.as_str(), "example.co.uk");
//! assert_eq!(domain.public_suffix(), "co.uk");
//! ```

pub mod adapters;
pub mod domain;
pub mod error;

pub use adapters::{load_table, read_source_file};
pub use domain::{
    first_token, parse_source_lines, resolve, PublicSuffixTable, RegistrableDomain, RuleKind,
    SuffixRule, LOCAL_SUFFIX,
};
pub use error::SuffixError;

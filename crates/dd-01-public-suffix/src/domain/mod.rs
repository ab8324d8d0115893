//! Domain Layer - Pure suffix logic
//!
//! - Source tokenizer
//! - Rule classification
//! - Public Suffix Table
//! - Effective-Domain Resolver
//!
//! RULES:
//! - No I/O operations
//! - Parsing never fails

pub mod resolver;
pub mod rule;
pub mod source;
pub mod table;

pub use resolver::{resolve, RegistrableDomain};
pub use rule::{RuleKind, SuffixRule};
pub use source::{first_token, parse_source_lines};
pub use table::{PublicSuffixTable, LOCAL_SUFFIX};

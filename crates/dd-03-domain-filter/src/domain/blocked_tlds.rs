//! Static blocked top-level domains
//!
//! Hosts under these TLDs are blocked before the suffix table or the Bloom
//! filter is consulted, so the answer is exact.

use std::collections::HashSet;

/// Default set of abuse-prone top-level domains.
pub const DEFAULT_BLOCKED_TLDS: &[&str] = &["adult", "local", "porn", "sex", "sexy", "xxx"];

/// Lowercased lookup set built from a list of TLDs
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlockedTlds(HashSet<String>);

impl BlockedTlds {
    pub fn new<I, S>(tlds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            tlds.into_iter()
                .map(|t| t.as_ref().trim().trim_start_matches('.').to_lowercase())
                .filter(|t| !t.is_empty())
                .collect(),
        )
    }

    pub fn contains(&self, tld: &str) -> bool {
        self.0.contains(tld)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for BlockedTlds {
    fn default() -> Self {
        Self::new(DEFAULT_BLOCKED_TLDS)
    }
}

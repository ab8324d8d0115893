//! Effective-Domain Resolver
//!
//! Computes the registrable domain (public suffix + one label) of a host.
//!
//! Candidate suffixes are tried from the full host down to the last label
//! and the first match wins, which makes the longest matching rule win.
//! At a given candidate an exception rule is checked before normal and
//! wildcard rules. Evaluating shortest-first would pick `uk` over `co.uk`.

use std::fmt;

use super::rule::RuleKind;
use super::table::PublicSuffixTable;

/// A resolved registrable domain
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RegistrableDomain {
    name: String,
    suffix_offset: usize,
    matched: RuleKind,
}

impl RegistrableDomain {
    /// The registrable domain, e.g. `example.co.uk`
    pub fn as_str(&self) -> &str {
        &self.name
    }

    pub fn into_string(self) -> String {
        self.name
    }

    /// The public suffix below which the domain is registered, e.g. `co.uk`
    ///
    /// Equal to the whole name when the host itself is a public suffix.
    pub fn public_suffix(&self) -> &str {
        &self.name[self.suffix_offset..]
    }

    /// Kind of the rule that decided the boundary
    pub fn matched_rule(&self) -> RuleKind {
        self.matched
    }
}

impl fmt::Display for RegistrableDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl AsRef<str> for RegistrableDomain {
    fn as_ref(&self) -> &str {
        &self.name
    }
}

/// Byte offsets where each label of `host` starts.
fn label_starts(host: &str) -> Vec<usize> {
    std::iter::once(0)
        .chain(host.match_indices('.').map(|(i, _)| i + 1))
        .collect()
}

/// Resolve the registrable domain of `host`.
///
/// Labels are lowercased. Returns `None` when no rule matches any suffix of
/// the host; that is an expected outcome, not an error.
pub fn resolve(host: &str, table: &PublicSuffixTable) -> Option<RegistrableDomain> {
    let host = host.to_lowercase();
    let starts = label_starts(&host);

    for (i, &start) in starts.iter().enumerate() {
        let candidate = &host[start..];
        // Suffix a wildcard rule would be stored under: candidate minus its first label
        let parent = starts.get(i + 1).map(|&s| &host[s..]);

        if table.contains_exception(candidate) {
            let suffix_offset = parent.map_or(candidate.len(), |p| candidate.len() - p.len());
            return Some(RegistrableDomain {
                name: candidate.to_owned(),
                suffix_offset,
                matched: RuleKind::Exception,
            });
        }

        let matched = if table.contains_normal(candidate) {
            Some(RuleKind::Normal)
        } else if parent.is_some_and(|p| table.contains_wildcard(p)) {
            Some(RuleKind::Wildcard)
        } else {
            None
        };

        if let Some(matched) = matched {
            let from = starts[i.max(1) - 1];
            return Some(RegistrableDomain {
                name: host[from..].to_owned(),
                suffix_offset: start - from,
                matched,
            });
        }
    }

    None
}

impl PublicSuffixTable {
    /// Resolve the registrable domain of `host` against this table.
    pub fn registrable_domain(&self, host: &str) -> Option<RegistrableDomain> {
        resolve(host, self)
    }
}

//! Public Suffix Table
//!
//! Read-only rule set built once from a suffix-list source. Each rule kind
//! lives in its own set keyed by the stored labels, so every lookup is a
//! single hash lookup.

use std::collections::HashSet;

use super::rule::{RuleKind, SuffixRule};
use super::source::parse_source_lines;

/// Synthetic rule appended to every table so intranet-style `.local` hosts
/// resolve to themselves.
pub const LOCAL_SUFFIX: &str = "local";

/// Parsed public suffix rules
#[derive(Clone, Debug)]
pub struct PublicSuffixTable {
    normal: HashSet<String>,
    wildcard: HashSet<String>,
    exception: HashSet<String>,
}

impl Default for PublicSuffixTable {
    /// A table holding only the synthetic `local` rule
    fn default() -> Self {
        Self::from_tokens(std::iter::empty::<&str>())
    }
}

impl PublicSuffixTable {
    /// Build a table from already tokenized rules
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = Self {
            normal: HashSet::new(),
            wildcard: HashSet::new(),
            exception: HashSet::new(),
        };
        for token in tokens {
            table.insert(SuffixRule::parse(token.as_ref()));
        }
        table.insert(SuffixRule::new(LOCAL_SUFFIX, RuleKind::Normal));
        table
    }

    /// Build a table from raw suffix-list text
    pub fn parse(text: &str) -> Self {
        Self::from_tokens(parse_source_lines(text))
    }

    fn insert(&mut self, rule: SuffixRule) {
        let set = match rule.kind {
            RuleKind::Normal => &mut self.normal,
            RuleKind::Wildcard => &mut self.wildcard,
            RuleKind::Exception => &mut self.exception,
        };
        set.insert(rule.labels);
    }

    /// `labels` is a normal rule
    pub fn contains_normal(&self, labels: &str) -> bool {
        self.normal.contains(labels)
    }

    /// `labels` is an exception rule (stored without `!`)
    pub fn contains_exception(&self, labels: &str) -> bool {
        self.exception.contains(labels)
    }

    /// `*.suffix` is a wildcard rule (`suffix` given without `*.`)
    pub fn contains_wildcard(&self, suffix: &str) -> bool {
        self.wildcard.contains(suffix)
    }

    /// Total number of distinct rules, including the synthetic one
    pub fn len(&self) -> usize {
        self.normal.len() + self.wildcard.len() + self.exception.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over all rules in no particular order
    pub fn rules(&self) -> impl Iterator<Item = SuffixRule> + '_ {
        self.normal
            .iter()
            .map(|l| SuffixRule::new(l, RuleKind::Normal))
            .chain(self.wildcard.iter().map(|l| SuffixRule::new(l, RuleKind::Wildcard)))
            .chain(self.exception.iter().map(|l| SuffixRule::new(l, RuleKind::Exception)))
    }

    /// Number of rules of one kind
    pub fn count(&self, kind: RuleKind) -> usize {
        match kind {
            RuleKind::Normal => self.normal.len(),
            RuleKind::Wildcard => self.wildcard.len(),
            RuleKind::Exception => self.exception.len(),
        }
    }
}

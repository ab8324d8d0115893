//! Suffix rule classification

use std::fmt;

/// Kind of a public suffix rule
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RuleKind {
    /// `co.uk`: the labels are a public suffix
    Normal,
    /// `*.ck`: any single label below the stored suffix is a public suffix
    Wildcard,
    /// `!www.ck`: the labels are NOT a public suffix despite a wildcard
    Exception,
}

/// A parsed suffix rule
///
/// `labels` never carries the `!` or `*.` prefix: wildcard rules store the
/// suffix after `*.`, exception rules store the full labels they override.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SuffixRule {
    pub labels: String,
    pub kind: RuleKind,
}

impl SuffixRule {
    /// Classify a raw token. Never fails: anything unrecognised is `Normal`.
    pub fn parse(token: &str) -> Self {
        if let Some(rest) = token.strip_prefix('!') {
            Self::new(rest, RuleKind::Exception)
        } else if let Some(rest) = token.strip_prefix("*.") {
            Self::new(rest, RuleKind::Wildcard)
        } else {
            Self::new(token, RuleKind::Normal)
        }
    }

    pub fn new(labels: &str, kind: RuleKind) -> Self {
        Self {
            labels: labels.to_ascii_lowercase(),
            kind,
        }
    }
}

impl fmt::Display for SuffixRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            RuleKind::Normal => write!(f, "{}", self.labels),
            RuleKind::Wildcard => write!(f, "*.{}", self.labels),
            RuleKind::Exception => write!(f, "!{}", self.labels),
        }
    }
}

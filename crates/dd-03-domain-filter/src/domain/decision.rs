//! Block decision

use serde::Serialize;

/// Outcome of evaluating one host, with the reason
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum BlockDecision {
    /// Top-level domain is on the static blocked list
    BlockedTld { tld: String },
    /// No registrable domain could be determined (fail closed)
    InvalidHost,
    /// Registrable domain is (probably) in the denylist
    Listed { domain: String },
    /// Registrable domain is definitely not in the denylist
    NotListed { domain: String },
}

impl BlockDecision {
    pub fn is_blocked(&self) -> bool {
        !matches!(self, BlockDecision::NotListed { .. })
    }

    /// Registrable domain the decision was made on, if one was resolved
    pub fn domain(&self) -> Option<&str> {
        match self {
            BlockDecision::Listed { domain } | BlockDecision::NotListed { domain } => Some(domain.as_str()),
            BlockDecision::BlockedTld { .. } | BlockDecision::InvalidHost => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_not_listed_is_allowed() {
        assert!(BlockDecision::BlockedTld { tld: "xxx".into() }.is_blocked());
        assert!(BlockDecision::InvalidHost.is_blocked());
        assert!(BlockDecision::Listed { domain: "a.com".into() }.is_blocked());
        assert!(!BlockDecision::NotListed { domain: "a.com".into() }.is_blocked());
    }

    #[test]
    fn test_serializes_with_reason_tag() {
        let json = serde_json::to_string(&BlockDecision::Listed { domain: "a.com".into() }).unwrap();
        assert_eq!(json, r#"{"reason":"listed","domain":"a.com"}"#);

        let json = serde_json::to_string(&BlockDecision::InvalidHost).unwrap();
        assert_eq!(json, r#"{"reason":"invalid_host"}"#);
    }
}

//! Host normalization
//!
//! Applied before any lookup so the blocked-TLD check, the resolver and the
//! build pipeline all see the same spelling of a host.

/// Trim whitespace, lowercase, and drop one trailing root dot.
pub fn normalize_host(host: &str) -> String {
    let host = host.trim();
    let host = host.strip_suffix('.').unwrap_or(host);
    host.to_lowercase()
}

/// Last dot-separated label of an already normalized host.
pub fn top_level_label(host: &str) -> &str {
    host.rsplit('.').next().unwrap_or(host)
}

/// An empty host or one with an empty label (`a..b`, `.com`) cannot be
/// resolved and fails closed.
pub fn is_well_formed(host: &str) -> bool {
    !host.is_empty() && host.split('.').all(|label| !label.is_empty())
}

//! Domain Denylist Filter
//!
//! Decision order for a host:
//! 1. top-level label on the static blocked list -> blocked
//! 2. no registrable domain -> blocked (fail closed)
//! 3. Bloom filter membership of the registrable domain
//!
//! The filter is immutable after construction and is shared across threads
//! behind an `Arc` without locking.

use std::sync::Arc;
use std::time::Instant;

use dd_01_public_suffix::{load_table, PublicSuffixTable, RegistrableDomain};
use dd_02_bloom_filters::{load_filter, MembershipQuery, ReadOnlyBloomFilter};
use tracing::{info, trace};

use crate::config::FilterConfig;
use crate::domain::{is_well_formed, normalize_host, top_level_label, BlockDecision, BlockedTlds};
use crate::error::FilterError;
use crate::metrics::{MetricsRecorder, NoOpMetrics};

/// Denylist filter over a suffix table and a membership set
pub struct DomainFilter<F: MembershipQuery = ReadOnlyBloomFilter> {
    table: PublicSuffixTable,
    bloom: F,
    blocked_tlds: BlockedTlds,
    metrics: Arc<dyn MetricsRecorder>,
}

impl DomainFilter<ReadOnlyBloomFilter> {
    /// Load the suffix table and the filter artifact named by `config`.
    ///
    /// Any load failure is returned; no partially loaded filter exists.
    pub fn open(config: &FilterConfig) -> Result<Self, FilterError> {
        config.validate()?;

        let table = load_table(&config.public_suffix_path)?;
        let bloom = load_filter(&config.bloom_path).map_err(|source| FilterError::ArtifactLoad {
            path: config.bloom_path.clone(),
            source,
        })?;

        let filter = Self::new(table, bloom, config.blocked_tld_set());
        info!(
            rules = filter.table.len(),
            bits = filter.bloom.size_bits(),
            hashes = filter.bloom.hash_count(),
            elements = filter.bloom.elements_inserted(),
            blocked_tlds = filter.blocked_tlds.len(),
            "Domain filter ready"
        );
        Ok(filter)
    }
}

impl<F: MembershipQuery> DomainFilter<F> {
    /// Assemble a filter from already loaded parts
    pub fn new(table: PublicSuffixTable, bloom: F, blocked_tlds: BlockedTlds) -> Self {
        Self {
            table,
            bloom,
            blocked_tlds,
            metrics: Arc::new(NoOpMetrics),
        }
    }

    /// Record every decision into `metrics`
    pub fn with_metrics(mut self, metrics: Arc<dyn MetricsRecorder>) -> Self {
        self.metrics = metrics;
        self
    }

    /// Decide whether `host` is blocked, with the reason
    pub fn decide(&self, host: &str) -> BlockDecision {
        let started = Instant::now();
        let decision = self.evaluate(host);
        self.metrics.record_decision(&decision, started.elapsed());
        trace!(host, ?decision, "Evaluated host");
        decision
    }

    /// `true` if `host` must be blocked
    pub fn is_blocked(&self, host: &str) -> bool {
        self.decide(host).is_blocked()
    }

    /// Registrable domain of `host` after normalization
    pub fn registrable_domain(&self, host: &str) -> Option<RegistrableDomain> {
        let host = normalize_host(host);
        if !is_well_formed(&host) {
            return None;
        }
        self.table.registrable_domain(&host)
    }

    fn evaluate(&self, host: &str) -> BlockDecision {
        let host = normalize_host(host);

        let tld = top_level_label(&host);
        if self.blocked_tlds.contains(tld) {
            return BlockDecision::BlockedTld { tld: tld.to_owned() };
        }

        if !is_well_formed(&host) {
            return BlockDecision::InvalidHost;
        }

        match self.table.registrable_domain(&host) {
            None => BlockDecision::InvalidHost,
            Some(domain) => {
                let domain = domain.into_string();
                if self.bloom.contains(domain.as_bytes()) {
                    BlockDecision::Listed { domain }
                } else {
                    BlockDecision::NotListed { domain }
                }
            }
        }
    }

    pub fn table(&self) -> &PublicSuffixTable {
        &self.table
    }

    pub fn bloom(&self) -> &F {
        &self.bloom
    }

    pub fn blocked_tlds(&self) -> &BlockedTlds {
        &self.blocked_tlds
    }

    /// Release the filter and everything it holds
    pub fn close(self) {
        info!(bits = self.bloom.size_bits(), "Domain filter closed");
    }
}

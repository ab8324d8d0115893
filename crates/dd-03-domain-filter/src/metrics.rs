//! Metrics hooks for filter decisions
//!
//! Counters are plain atomics so recording never blocks concurrent callers.
//!
//! ## Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use dd_03_domain_filter::metrics::FilterMetrics;
//!
//! let metrics = Arc::new(FilterMetrics::new());
//! let filter = DomainFilter::open(&config)?.with_metrics(metrics.clone());
//! filter.is_blocked("tracker.example.com");
//! println!("{:?}", metrics.snapshot());
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use serde::Serialize;

use crate::domain::BlockDecision;

/// Decision counters for one filter instance
#[derive(Default)]
pub struct FilterMetrics {
    /// Total decisions made
    pub lookups: AtomicU64,
    /// Blocked by the static TLD list
    pub blocked_tld: AtomicU64,
    /// Blocked because no registrable domain was found
    pub blocked_invalid: AtomicU64,
    /// Blocked by a Bloom filter hit
    pub blocked_listed: AtomicU64,
    /// Allowed through
    pub allowed: AtomicU64,
    /// Cumulative decision time in nanoseconds
    pub lookup_time_ns: AtomicU64,
}

impl FilterMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one decision and its latency
    pub fn record_decision(&self, decision: &BlockDecision, duration: Duration) {
        self.lookups.fetch_add(1, Ordering::Relaxed);
        self.lookup_time_ns
            .fetch_add(duration.as_nanos() as u64, Ordering::Relaxed);
        let counter = match decision {
            BlockDecision::BlockedTld { .. } => &self.blocked_tld,
            BlockDecision::InvalidHost => &self.blocked_invalid,
            BlockDecision::Listed { .. } => &self.blocked_listed,
            BlockDecision::NotListed { .. } => &self.allowed,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Get current metrics snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            lookups: self.lookups.load(Ordering::Relaxed),
            blocked_tld: self.blocked_tld.load(Ordering::Relaxed),
            blocked_invalid: self.blocked_invalid.load(Ordering::Relaxed),
            blocked_listed: self.blocked_listed.load(Ordering::Relaxed),
            allowed: self.allowed.load(Ordering::Relaxed),
            avg_lookup_ns: self.avg_lookup_time_ns(),
        }
    }

    /// Calculate average decision time in nanoseconds
    pub fn avg_lookup_time_ns(&self) -> u64 {
        let total = self.lookup_time_ns.load(Ordering::Relaxed);
        let count = self.lookups.load(Ordering::Relaxed);
        if count > 0 {
            total / count
        } else {
            0
        }
    }

    /// Fraction of decisions that blocked the host
    pub fn blocked_rate(&self) -> f64 {
        let total = self.lookups.load(Ordering::Relaxed);
        if total == 0 {
            return 0.0;
        }
        let allowed = self.allowed.load(Ordering::Relaxed);
        // Counters are read separately; `allowed` may already include a newer lookup.
        total.saturating_sub(allowed) as f64 / total as f64
    }

    /// Reset all counters
    pub fn reset(&self) {
        for counter in [
            &self.lookups,
            &self.blocked_tld,
            &self.blocked_invalid,
            &self.blocked_listed,
            &self.allowed,
            &self.lookup_time_ns,
        ] {
            counter.store(0, Ordering::Relaxed);
        }
    }
}

/// Point-in-time metrics snapshot
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub lookups: u64,
    pub blocked_tld: u64,
    pub blocked_invalid: u64,
    pub blocked_listed: u64,
    pub allowed: u64,
    pub avg_lookup_ns: u64,
}

/// Trait for custom metrics recording implementations
pub trait MetricsRecorder: Send + Sync {
    fn record_decision(&self, decision: &BlockDecision, duration: Duration);
}

/// No-op metrics recorder for when metrics are disabled
#[derive(Default)]
pub struct NoOpMetrics;

impl MetricsRecorder for NoOpMetrics {
    fn record_decision(&self, _: &BlockDecision, _: Duration) {}
}

impl MetricsRecorder for FilterMetrics {
    fn record_decision(&self, decision: &BlockDecision, duration: Duration) {
        FilterMetrics::record_decision(self, decision, duration);
    }
}

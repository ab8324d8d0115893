//! Denylist build pipeline
//!
//! raw blocklist -> tokenize -> normalize -> (registrable domain) -> dedupe
//! -> size filter -> insert -> serialize
//!
//! Inserting more entries than the capacity hint is allowed; it only raises
//! the false positive rate, which is logged.

use std::collections::HashSet;

use dd_01_public_suffix::{load_table, read_source_file, PublicSuffixTable};
use dd_02_bloom_filters::{write_filter, BloomConfig, BloomFilter, MembershipQuery};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::BuildConfig;
use crate::domain::{is_well_formed, normalize_host};
use crate::error::FilterError;

/// Summary of one build
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct BuildReport {
    /// Tokens read from the source
    pub entries_read: usize,
    /// Distinct domains inserted
    pub inserted: usize,
    /// Entries that collapsed onto an already inserted domain
    pub duplicates: usize,
    /// Entries with no registrable domain, skipped
    pub unresolvable: usize,
    /// Entries rewritten to their registrable domain
    pub canonicalized: usize,
    /// Element count the filter was sized for
    pub capacity: usize,
    pub size_bits: usize,
    pub hash_count: usize,
    pub target_fpr: f64,
    /// Theoretical FPR at the inserted count
    pub effective_fpr: f64,
    /// Artifact size, when written to disk
    pub bytes_written: Option<u64>,
}

/// Builds a Bloom filter from blocklist entries
pub struct DenylistBuilder<'a> {
    table: &'a PublicSuffixTable,
    bloom: BloomConfig,
    capacity_hint: Option<usize>,
    canonicalize: bool,
}

impl<'a> DenylistBuilder<'a> {
    pub fn new(table: &'a PublicSuffixTable) -> Self {
        Self {
            table,
            bloom: BloomConfig::default(),
            capacity_hint: None,
            canonicalize: true,
        }
    }

    pub fn bloom_config(mut self, config: BloomConfig) -> Self {
        self.bloom = config;
        self
    }

    /// Size for `capacity` elements instead of the unique entry count
    pub fn capacity_hint(mut self, capacity: Option<usize>) -> Self {
        self.capacity_hint = capacity;
        self
    }

    /// Reduce entries to their registrable domain (default on)
    pub fn canonicalize(mut self, enabled: bool) -> Self {
        self.canonicalize = enabled;
        self
    }

    /// Map one entry to the string that is inserted, if any
    fn canonical_form(&self, entry: &str) -> Option<String> {
        let host = normalize_host(entry);
        if !is_well_formed(&host) {
            return None;
        }
        if !self.canonicalize {
            return Some(host);
        }
        self.table
            .registrable_domain(&host)
            .map(|domain| domain.into_string())
    }

    /// Build a filter from blocklist entries
    pub fn build<I, S>(&self, entries: I) -> Result<(BloomFilter, BuildReport), FilterError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.bloom.validate()?;

        let mut report = BuildReport {
            target_fpr: self.bloom.target_fpr,
            ..BuildReport::default()
        };
        let mut seen = HashSet::new();
        let mut domains = Vec::new();

        for entry in entries {
            let entry = entry.as_ref();
            report.entries_read += 1;

            let Some(domain) = self.canonical_form(entry) else {
                debug!(entry, "Skipping entry without registrable domain");
                report.unresolvable += 1;
                continue;
            };
            if domain != normalize_host(entry) {
                report.canonicalized += 1;
            }
            if seen.insert(domain.clone()) {
                domains.push(domain);
            } else {
                report.duplicates += 1;
            }
        }

        let capacity = self.capacity_hint.unwrap_or(domains.len());
        let mut filter = BloomFilter::with_config(capacity, &self.bloom)?;
        for domain in &domains {
            filter.insert(domain.as_bytes());
        }

        report.inserted = domains.len();
        report.capacity = capacity;
        report.size_bits = filter.size_bits();
        report.hash_count = filter.hash_count();
        report.effective_fpr = filter.false_positive_rate();

        if report.unresolvable > 0 {
            warn!(count = report.unresolvable, "Blocklist entries skipped as unresolvable");
        }
        if report.inserted > capacity {
            warn!(
                inserted = report.inserted,
                capacity,
                effective_fpr = report.effective_fpr,
                target_fpr = report.target_fpr,
                "Filter over capacity, false positive rate degraded"
            );
        }
        info!(
            inserted = report.inserted,
            bits = report.size_bits,
            hashes = report.hash_count,
            effective_fpr = report.effective_fpr,
            "Built denylist filter"
        );

        Ok((filter, report))
    }
}

/// Run the full offline pipeline described by `config`
pub fn run_build(config: &BuildConfig) -> Result<BuildReport, FilterError> {
    config.validate()?;

    let table = load_table(&config.public_suffix_path)?;
    let entries = read_source_file(&config.source_path)?;
    info!(
        source = %config.source_path.display(),
        entries = entries.len(),
        "Read blocklist source"
    );

    let (filter, mut report) = DenylistBuilder::new(&table)
        .bloom_config(config.bloom.clone())
        .capacity_hint(config.capacity_hint)
        .canonicalize(config.canonicalize)
        .build(&entries)?;

    let written = write_filter(&config.output_path, &filter).map_err(|source| {
        FilterError::ArtifactWrite {
            path: config.output_path.clone(),
            source,
        }
    })?;
    report.bytes_written = Some(written);
    info!(
        output = %config.output_path.display(),
        bytes = written,
        "Wrote denylist artifact"
    );

    Ok(report)
}

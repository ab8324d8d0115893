//! # Filter Runtime
//!
//! Process-level wiring for the domain denylist.
//!
//! ## Modular Structure
//!
//! - `cli` - argument definitions
//! - `commands/` - `build`, `check` and `inspect`
//!
//! ## Lifecycle
//!
//! 1. Load configuration (defaults, then environment, then flags)
//! 2. `FilterRuntime::start` opens the suffix table and artifact; failure is fatal
//! 3. Callers share the filter through `FilterRuntime::filter`
//! 4. `FilterRuntime::shutdown` closes it

pub mod cli;
pub mod commands;

use std::sync::Arc;

use anyhow::{Context, Result};
use dd_03_domain_filter::{DomainFilter, FilterConfig, FilterMetrics, MetricsSnapshot};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Environment variable consulted for the log level when `RUST_LOG` is unset.
pub const ENV_LOG_LEVEL: &str = "DD_LOG_LEVEL";

/// Owns the long-lived domain filter of a process.
pub struct FilterRuntime {
    /// Immutable filter shared by every caller.
    filter: Arc<DomainFilter>,
    /// Decision counters fed by the filter.
    metrics: Arc<FilterMetrics>,
    config: FilterConfig,
}

impl FilterRuntime {
    /// Open the filter described by `config`.
    pub fn start(config: FilterConfig) -> Result<Self> {
        info!(
            bloom = %config.bloom_path.display(),
            public_suffix = %config.public_suffix_path.display(),
            "Starting domain filter"
        );

        let metrics = Arc::new(FilterMetrics::new());
        let filter = DomainFilter::open(&config)
            .context("Failed to open domain filter")?
            .with_metrics(metrics.clone());

        Ok(Self {
            filter: Arc::new(filter),
            metrics,
            config,
        })
    }

    /// Handle to the shared filter.
    pub fn filter(&self) -> Arc<DomainFilter> {
        Arc::clone(&self.filter)
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    /// Close the filter once no other handle is alive.
    pub fn shutdown(self) {
        info!(metrics = ?self.metrics.snapshot(), "Shutting down domain filter");
        match Arc::try_unwrap(self.filter) {
            Ok(filter) => filter.close(),
            Err(filter) => warn!(
                handles = Arc::strong_count(&filter),
                "Domain filter still shared at shutdown; released by last holder"
            ),
        }
    }
}

/// Install the global `tracing` subscriber, logging to stderr.
///
/// `RUST_LOG` wins, then `DD_LOG_LEVEL`, then `info`.
pub fn init_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env(ENV_LOG_LEVEL))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

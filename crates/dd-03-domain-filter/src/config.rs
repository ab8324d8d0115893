//! Filter and build configuration
//!
//! Values come from, in increasing priority: defaults, environment
//! variables, explicit builder calls.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `DD_BLOOM_DOMAIN` | `data/domain_blocklist.bloom` |
//! | `DD_BLOOM_DOMAIN_SOURCE` | `data/domain_blocklist.txt` |
//! | `DD_PUBLIC_SUFFIX_LIST` | `data/public_suffix_list.dat` |
//! | `DD_BLOCKED_TLDS` | `adult,local,porn,sex,sexy,xxx` |
//! | `DD_TARGET_FPR` | `0.000001` |

use std::path::PathBuf;

use dd_02_bloom_filters::BloomConfig;
use serde::Serialize;
use tracing::warn;

use crate::domain::{BlockedTlds, DEFAULT_BLOCKED_TLDS};
use crate::error::FilterError;

pub const DEFAULT_BLOOM_PATH: &str = "data/domain_blocklist.bloom";
pub const DEFAULT_BLOCKLIST_SOURCE_PATH: &str = "data/domain_blocklist.txt";
pub const DEFAULT_PUBLIC_SUFFIX_PATH: &str = "data/public_suffix_list.dat";

pub const ENV_BLOOM_DOMAIN: &str = "DD_BLOOM_DOMAIN";
pub const ENV_BLOOM_DOMAIN_SOURCE: &str = "DD_BLOOM_DOMAIN_SOURCE";
pub const ENV_PUBLIC_SUFFIX_LIST: &str = "DD_PUBLIC_SUFFIX_LIST";
pub const ENV_BLOCKED_TLDS: &str = "DD_BLOCKED_TLDS";
pub const ENV_TARGET_FPR: &str = "DD_TARGET_FPR";

/// Read-path configuration
#[derive(Clone, Debug, Serialize)]
pub struct FilterConfig {
    /// Serialized Bloom filter artifact
    pub bloom_path: PathBuf,
    /// Public suffix list source
    pub public_suffix_path: PathBuf,
    /// Top-level domains blocked unconditionally
    pub blocked_tlds: Vec<String>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            bloom_path: PathBuf::from(DEFAULT_BLOOM_PATH),
            public_suffix_path: PathBuf::from(DEFAULT_PUBLIC_SUFFIX_PATH),
            blocked_tlds: DEFAULT_BLOCKED_TLDS.iter().map(|t| t.to_string()).collect(),
        }
    }
}

impl FilterConfig {
    /// Defaults overridden by process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(path) = lookup(ENV_BLOOM_DOMAIN) {
            config.bloom_path = PathBuf::from(path);
        }
        if let Some(path) = lookup(ENV_PUBLIC_SUFFIX_LIST) {
            config.public_suffix_path = PathBuf::from(path);
        }
        if let Some(tlds) = lookup(ENV_BLOCKED_TLDS) {
            config.blocked_tlds = split_list(&tlds);
        }
        config
    }

    pub fn validate(&self) -> Result<(), FilterError> {
        if let Some(bad) = self.blocked_tlds.iter().find(|t| t.trim_start_matches('.').contains('.')) {
            return Err(FilterError::InvalidConfig(format!(
                "blocked TLD {:?} must be a single label",
                bad
            )));
        }
        Ok(())
    }

    pub fn blocked_tld_set(&self) -> BlockedTlds {
        BlockedTlds::new(&self.blocked_tlds)
    }
}

/// Builder for FilterConfig with validation
#[derive(Default)]
pub struct FilterConfigBuilder {
    base: Option<FilterConfig>,
    bloom_path: Option<PathBuf>,
    public_suffix_path: Option<PathBuf>,
    blocked_tlds: Option<Vec<String>>,
}

impl FilterConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration instead of the defaults
    pub fn from_config(config: FilterConfig) -> Self {
        Self {
            base: Some(config),
            ..Self::default()
        }
    }

    pub fn bloom_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.bloom_path = Some(path.into());
        self
    }

    pub fn public_suffix_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.public_suffix_path = Some(path.into());
        self
    }

    pub fn blocked_tlds<I, S>(mut self, tlds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.blocked_tlds = Some(tlds.into_iter().map(Into::into).collect());
        self
    }

    pub fn build(self) -> Result<FilterConfig, FilterError> {
        let base = self.base.unwrap_or_default();
        let config = FilterConfig {
            bloom_path: self.bloom_path.unwrap_or(base.bloom_path),
            public_suffix_path: self.public_suffix_path.unwrap_or(base.public_suffix_path),
            blocked_tlds: self.blocked_tlds.unwrap_or(base.blocked_tlds),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Build-path configuration
#[derive(Clone, Debug, Serialize)]
pub struct BuildConfig {
    /// Raw blocklist source
    pub source_path: PathBuf,
    /// Where the artifact is written
    pub output_path: PathBuf,
    /// Public suffix list used to canonicalize entries
    pub public_suffix_path: PathBuf,
    /// Sizing of the Bloom filter
    pub bloom: BloomConfig,
    /// Expected element count; defaults to the number of unique entries
    pub capacity_hint: Option<usize>,
    /// Reduce every entry to its registrable domain before insertion
    pub canonicalize: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            source_path: PathBuf::from(DEFAULT_BLOCKLIST_SOURCE_PATH),
            output_path: PathBuf::from(DEFAULT_BLOOM_PATH),
            public_suffix_path: PathBuf::from(DEFAULT_PUBLIC_SUFFIX_PATH),
            bloom: BloomConfig::default(),
            capacity_hint: None,
            canonicalize: true,
        }
    }
}

impl BuildConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(path) = lookup(ENV_BLOOM_DOMAIN_SOURCE) {
            config.source_path = PathBuf::from(path);
        }
        if let Some(path) = lookup(ENV_BLOOM_DOMAIN) {
            config.output_path = PathBuf::from(path);
        }
        if let Some(path) = lookup(ENV_PUBLIC_SUFFIX_LIST) {
            config.public_suffix_path = PathBuf::from(path);
        }
        if let Some(fpr) = lookup(ENV_TARGET_FPR) {
            match fpr.parse::<f64>() {
                Ok(fpr) => config.bloom.target_fpr = fpr,
                Err(_) => warn!("{} is not a number: {:?}", ENV_TARGET_FPR, fpr),
            }
        }
        config
    }

    pub fn validate(&self) -> Result<(), FilterError> {
        self.bloom.validate()?;
        if self.source_path == self.output_path {
            return Err(FilterError::InvalidConfig(
                "output path must differ from the source path".to_string(),
            ));
        }
        Ok(())
    }
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}

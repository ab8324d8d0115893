//! Command-line arguments

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use dd_03_domain_filter::{BuildConfig, FilterConfig, FilterConfigBuilder, FilterError};

/// Domain denylist runtime
#[derive(Parser, Debug)]
#[command(name = "filter-runtime")]
#[command(version)]
#[command(about = "Build, query and inspect domain denylist filters", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build a filter artifact from a raw blocklist
    Build(BuildArgs),
    /// Check hosts against a filter artifact
    Check(CheckArgs),
    /// Print the header of a filter artifact
    Inspect(InspectArgs),
}

#[derive(Args, Debug, Default)]
pub struct BuildArgs {
    /// Raw blocklist, one domain per line
    #[arg(long)]
    pub source: Option<PathBuf>,

    /// Public Suffix List used to canonicalize entries
    #[arg(long)]
    pub public_suffix: Option<PathBuf>,

    /// Artifact output path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Target false positive rate
    #[arg(long)]
    pub fpr: Option<f64>,

    /// Size the filter for this many elements
    #[arg(long)]
    pub capacity: Option<usize>,

    /// Insert entries as written instead of their registrable domain
    #[arg(long)]
    pub no_canonicalize: bool,

    /// Print the build report as JSON
    #[arg(long)]
    pub json: bool,
}

impl BuildArgs {
    /// Apply flags on top of `base`
    pub fn to_config(&self, base: BuildConfig) -> BuildConfig {
        let mut config = base;
        if let Some(path) = &self.source {
            config.source_path = path.clone();
        }
        if let Some(path) = &self.public_suffix {
            config.public_suffix_path = path.clone();
        }
        if let Some(path) = &self.output {
            config.output_path = path.clone();
        }
        if let Some(fpr) = self.fpr {
            config.bloom.target_fpr = fpr;
        }
        if self.capacity.is_some() {
            config.capacity_hint = self.capacity;
        }
        if self.no_canonicalize {
            config.canonicalize = false;
        }
        config
    }
}

#[derive(Args, Debug, Default)]
pub struct CheckArgs {
    /// Filter artifact
    #[arg(long)]
    pub bloom: Option<PathBuf>,

    /// Public Suffix List
    #[arg(long)]
    pub public_suffix: Option<PathBuf>,

    /// Read additional hosts from a file, one per line
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Emit one JSON object per host
    #[arg(long)]
    pub json: bool,

    /// Hosts to check
    pub hosts: Vec<String>,
}

impl CheckArgs {
    pub fn to_config(&self, base: FilterConfig) -> Result<FilterConfig, FilterError> {
        let mut builder = FilterConfigBuilder::from_config(base);
        if let Some(path) = &self.bloom {
            builder = builder.bloom_path(path);
        }
        if let Some(path) = &self.public_suffix {
            builder = builder.public_suffix_path(path);
        }
        builder.build()
    }
}

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Filter artifact
    pub artifact: PathBuf,

    /// Print the header as JSON
    #[arg(long)]
    pub json: bool,
}

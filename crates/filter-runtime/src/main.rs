//! # Filter Runtime
//!
//! ```text
//! filter-runtime build   [--source P] [--public-suffix P] [--output P] [--fpr F] [--capacity N] [--no-canonicalize]
//! filter-runtime check   [--bloom P] [--public-suffix P] [--file P] [--json] HOST...
//! filter-runtime inspect ARTIFACT
//! ```
//!
//! Paths not given on the command line come from `DD_BLOOM_DOMAIN`,
//! `DD_BLOOM_DOMAIN_SOURCE` and `DD_PUBLIC_SUFFIX_LIST`, then defaults.

use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;

use dd_03_domain_filter::{BuildConfig, FilterConfig};
use filter_runtime::cli::{Cli, Command};
use filter_runtime::commands::{run_build_command, run_check_command, run_inspect_command};
use filter_runtime::init_logging;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Build(args) => {
            run_build_command(&args, BuildConfig::from_env(), &mut out)?;
        }
        Command::Check(args) => {
            run_check_command(&args, FilterConfig::from_env(), &mut out)?;
        }
        Command::Inspect(args) => {
            run_inspect_command(&args, &mut out)?;
        }
    }

    out.flush()?;
    Ok(())
}

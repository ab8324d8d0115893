//! `build` subcommand

use std::io::Write;

use anyhow::{Context, Result};
use dd_03_domain_filter::{run_build, BuildConfig, BuildReport};

use crate::cli::BuildArgs;

/// Run the build pipeline with flags applied over `base`
pub fn run_build_command<W: Write>(
    args: &BuildArgs,
    base: BuildConfig,
    out: &mut W,
) -> Result<BuildReport> {
    let config = args.to_config(base);
    let report = run_build(&config).with_context(|| {
        format!(
            "Failed to build filter from {}",
            config.source_path.display()
        )
    })?;

    if args.json {
        serde_json::to_writer(&mut *out, &report)?;
        writeln!(out)?;
    } else {
        writeln!(out, "output:        {}", config.output_path.display())?;
        writeln!(out, "entries read:  {}", report.entries_read)?;
        writeln!(out, "inserted:      {}", report.inserted)?;
        writeln!(out, "duplicates:    {}", report.duplicates)?;
        writeln!(out, "unresolvable:  {}", report.unresolvable)?;
        writeln!(out, "bits (m):      {}", report.size_bits)?;
        writeln!(out, "hashes (k):    {}", report.hash_count)?;
        writeln!(out, "target fpr:    {:e}", report.target_fpr)?;
        writeln!(out, "effective fpr: {:e}", report.effective_fpr)?;
    }
    Ok(report)
}

//! `inspect` subcommand

use std::io::Write;

use anyhow::{Context, Result};
use dd_02_bloom_filters::{read_header, ArtifactHeader};
use serde::Serialize;

use crate::cli::InspectArgs;

#[derive(Serialize)]
struct HeaderView {
    format_version: u32,
    bit_count: u64,
    hash_count: u32,
    element_count: u64,
    payload_bytes: usize,
    theoretical_fpr: f64,
}

impl From<&ArtifactHeader> for HeaderView {
    fn from(header: &ArtifactHeader) -> Self {
        Self {
            format_version: header.format_version,
            bit_count: header.bit_count,
            hash_count: header.hash_count,
            element_count: header.element_count,
            payload_bytes: header.payload_len(),
            theoretical_fpr: header.theoretical_fpr(),
        }
    }
}

/// Print the header of an artifact without loading its bit array
pub fn run_inspect_command<W: Write>(args: &InspectArgs, out: &mut W) -> Result<ArtifactHeader> {
    let header = read_header(&args.artifact)
        .with_context(|| format!("Failed to read artifact {}", args.artifact.display()))?;
    let view = HeaderView::from(&header);

    if args.json {
        serde_json::to_writer(&mut *out, &view)?;
        writeln!(out)?;
    } else {
        writeln!(out, "format version: {}", view.format_version)?;
        writeln!(out, "bits (m):       {}", view.bit_count)?;
        writeln!(out, "hashes (k):     {}", view.hash_count)?;
        writeln!(out, "elements (n):   {}", view.element_count)?;
        writeln!(out, "payload bytes:  {}", view.payload_bytes)?;
        writeln!(out, "fpr at n:       {:e}", view.theoretical_fpr)?;
    }
    Ok(header)
}

//! `check` subcommand

use std::io::Write;

use anyhow::{Context, Result};
use dd_01_public_suffix::read_source_file;
use dd_02_bloom_filters::MembershipQuery;
use dd_03_domain_filter::{BlockDecision, DomainFilter, FilterConfig};
use rayon::prelude::*;
use serde::Serialize;
use tracing::info;

use crate::cli::CheckArgs;
use crate::FilterRuntime;

/// Decision for one host as printed by `check`
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HostVerdict {
    pub host: String,
    pub blocked: bool,
    /// Suffix under which the registrable domain sits, when one was found
    pub public_suffix: Option<String>,
    #[serde(flatten)]
    pub decision: BlockDecision,
}

/// Hosts from the command line followed by those in `--file`
pub fn collect_hosts(args: &CheckArgs) -> Result<Vec<String>> {
    let mut hosts = args.hosts.clone();
    if let Some(path) = &args.file {
        let listed = read_source_file(path)
            .with_context(|| format!("Failed to read host list {}", path.display()))?;
        hosts.extend(listed);
    }
    Ok(hosts)
}

/// Evaluate `hosts` in parallel against one shared filter, keeping input order
pub fn check_hosts<F: MembershipQuery>(filter: &DomainFilter<F>, hosts: &[String]) -> Vec<HostVerdict> {
    hosts
        .par_iter()
        .map(|host| {
            let decision = filter.decide(host);
            let public_suffix = filter
                .registrable_domain(host)
                .map(|domain| domain.public_suffix().to_owned());
            HostVerdict {
                host: host.clone(),
                blocked: decision.is_blocked(),
                public_suffix,
                decision,
            }
        })
        .collect()
}

fn describe(verdict: &HostVerdict) -> String {
    let suffix = verdict.public_suffix.as_deref().unwrap_or("-");
    match &verdict.decision {
        BlockDecision::BlockedTld { tld } => format!("blocked top-level domain .{}", tld),
        BlockDecision::InvalidHost => "no registrable domain".to_string(),
        BlockDecision::Listed { domain } => format!("{} is listed, suffix {}", domain, suffix),
        BlockDecision::NotListed { domain } => {
            format!("{} is not listed, suffix {}", domain, suffix)
        }
    }
}

/// Open the filter, check every host, close the filter
pub fn run_check_command<W: Write>(
    args: &CheckArgs,
    base: FilterConfig,
    out: &mut W,
) -> Result<Vec<HostVerdict>> {
    let hosts = collect_hosts(args)?;
    let config = args.to_config(base).context("Invalid filter configuration")?;

    let runtime = FilterRuntime::start(config)?;
    let verdicts = {
        let filter = runtime.filter();
        check_hosts(&*filter, &hosts)
    };

    for verdict in &verdicts {
        if args.json {
            serde_json::to_writer(&mut *out, verdict)?;
            writeln!(out)?;
        } else {
            let label = if verdict.blocked { "BLOCKED" } else { "ALLOWED" };
            writeln!(out, "{} {} ({})", label, verdict.host, describe(verdict))?;
        }
    }

    let blocked = verdicts.iter().filter(|v| v.blocked).count();
    info!(checked = verdicts.len(), blocked, "Check complete");
    runtime.shutdown();
    Ok(verdicts)
}

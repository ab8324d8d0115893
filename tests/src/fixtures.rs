//! On-disk fixtures shared by integration tests and benchmarks.

use std::fs;
use std::path::PathBuf;

use dd_03_domain_filter::{run_build, BuildConfig, BuildReport, FilterConfig};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tempfile::TempDir;

/// Representative slice of the Public Suffix List.
pub const PUBLIC_SUFFIXES: &str = "\
// ===BEGIN ICANN DOMAINS===
com
net
org
io
uk
co.uk
ac.uk
jp
// wildcard with exception
*.kawasaki.jp
!city.kawasaki.jp
*.ck
!www.ck
// ===BEGIN PRIVATE DOMAINS===
github.io
";

/// Hand-written denylist covering each kind of entry.
pub const BLOCKLIST: &str = "\
// trackers
ads.tracker.com
telemetry.tracker.com
metrics.example.net   # trailing text after the first token is ignored
malware.co.uk
evil.github.io
shop.foo.kawasaki.jp
city.kawasaki.jp

// unresolvable
intranet
";

/// Suffix list and blocklist written to a temporary directory.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self::with_blocklist(BLOCKLIST)
    }

    pub fn with_blocklist(blocklist: &str) -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("public_suffix_list.dat"), PUBLIC_SUFFIXES).expect("write suffixes");
        fs::write(dir.path().join("domain_blocklist.txt"), blocklist).expect("write blocklist");
        Self { dir }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn artifact_path(&self) -> PathBuf {
        self.path("domain_blocklist.bloom")
    }

    pub fn build_config(&self) -> BuildConfig {
        BuildConfig {
            source_path: self.path("domain_blocklist.txt"),
            output_path: self.artifact_path(),
            public_suffix_path: self.path("public_suffix_list.dat"),
            ..BuildConfig::default()
        }
    }

    pub fn filter_config(&self) -> FilterConfig {
        FilterConfig {
            bloom_path: self.artifact_path(),
            public_suffix_path: self.path("public_suffix_list.dat"),
            ..FilterConfig::default()
        }
    }

    /// Run the build pipeline with default settings.
    pub fn build(&self) -> BuildReport {
        run_build(&self.build_config()).expect("build")
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}

/// Deterministic random registrable domains under `.com`.
pub fn random_domains(count: usize, seed: u64) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let len = rng.gen_range(6..16);
            let label: String = (0..len)
                .map(|_| char::from(b'a' + rng.gen_range(0..26u8)))
                .collect();
            format!("{}.com", label)
        })
        .collect()
}

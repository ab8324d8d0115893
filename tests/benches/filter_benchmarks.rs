//! # Domain Denylist Benchmarks
//!
//! | Path | Operation | Expectation |
//! |------|-----------|-------------|
//! | read | `DomainFilter::is_blocked` | sub-microsecond, O(k + labels) |
//! | read | `ReadOnlyBloomFilter::contains` | k bit reads |
//! | read | `resolve` | linear in label count |
//! | build | insert 100k domains | dominated by hashing |
//! | load | `ReadOnlyBloomFilter::from_bytes` | linear in artifact size |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::time::Duration;

use dd_01_public_suffix::PublicSuffixTable;
use dd_02_bloom_filters::{BloomFilter, MembershipQuery, ReadOnlyBloomFilter};
use dd_03_domain_filter::{BlockedTlds, DomainFilter};
use dd_tests::fixtures::{random_domains, PUBLIC_SUFFIXES};

fn built_filter(domains: &[String], fpr: f64) -> BloomFilter {
    let mut filter = BloomFilter::new_with_fpr(domains.len(), fpr);
    for domain in domains {
        filter.insert(domain.as_bytes());
    }
    filter
}

// ============================================================================
// Read path
// ============================================================================

fn bench_is_blocked(c: &mut Criterion) {
    let mut group = c.benchmark_group("dd-03-is-blocked");
    group.measurement_time(Duration::from_secs(5));

    let domains = random_domains(100_000, 11);
    let filter = DomainFilter::new(
        PublicSuffixTable::parse(PUBLIC_SUFFIXES),
        built_filter(&domains, 1e-6).freeze(),
        BlockedTlds::default(),
    );

    let listed = format!("cdn.{}", domains[0]);
    group.bench_function("listed_subdomain", |b| {
        b.iter(|| black_box(filter.is_blocked(black_box(&listed))))
    });
    group.bench_function("unlisted", |b| {
        b.iter(|| black_box(filter.is_blocked(black_box("www.example.org"))))
    });
    group.bench_function("blocked_tld", |b| {
        b.iter(|| black_box(filter.is_blocked(black_box("site.xxx"))))
    });
    group.bench_function("deep_wildcard", |b| {
        b.iter(|| black_box(filter.is_blocked(black_box("a.b.c.d.shop.foo.kawasaki.jp"))))
    });

    group.finish();
}

fn bench_contains(c: &mut Criterion) {
    let mut group = c.benchmark_group("dd-02-contains");

    let domains = random_domains(100_000, 5);
    let filter = built_filter(&domains, 1e-6).freeze();
    let queries = random_domains(1_000, 6);

    group.throughput(Throughput::Elements(queries.len() as u64));
    group.bench_function("read_only_1k_queries", |b| {
        b.iter(|| {
            queries
                .iter()
                .filter(|p| filter.contains(black_box(p.as_bytes())))
                .count()
        })
    });

    group.finish();
}

fn bench_resolve(c: &mut Criterion) {
    let table = PublicSuffixTable::parse(PUBLIC_SUFFIXES);
    let mut group = c.benchmark_group("dd-01-resolve");

    for depth in [2usize, 4, 8] {
        let host = format!("{}example.co.uk", "sub.".repeat(depth - 2));
        group.bench_with_input(BenchmarkId::new("labels", depth + 1), &host, |b, host| {
            b.iter(|| black_box(table.registrable_domain(host)))
        });
    }

    group.finish();
}

// ============================================================================
// Build and load paths
// ============================================================================

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("dd-02-build");
    group.sample_size(20);

    for size in [1_000usize, 10_000, 100_000] {
        let domains = random_domains(size, size as u64);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("insert", size), &domains, |b, domains| {
            b.iter(|| black_box(built_filter(domains, 1e-6)))
        });
    }

    group.finish();
}

fn bench_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("dd-02-load");

    let domains = random_domains(100_000, 3);
    let bytes = built_filter(&domains, 1e-6)
        .to_bytes()
        .expect("encode artifact");
    group.throughput(Throughput::Bytes(bytes.len() as u64));
    group.bench_function("from_bytes_100k", |b| {
        b.iter(|| black_box(ReadOnlyBloomFilter::from_bytes(black_box(&bytes))))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_is_blocked,
    bench_contains,
    bench_resolve,
    bench_build,
    bench_load,
);

criterion_main!(benches);

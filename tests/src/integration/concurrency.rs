//! One loaded filter shared by many threads.

#[cfg(test)]
mod tests {
    use std::fs;
    use std::sync::Arc;

    use dd_03_domain_filter::{DomainFilter, FilterMetrics};
    use rayon::prelude::*;

    use crate::fixtures::{random_domains, Workspace};

    const TARGET_FPR: f64 = 0.001;

    fn workspace_with(domains: &[String]) -> Workspace {
        let workspace = Workspace::with_blocklist(&domains.join("\n"));
        let mut config = workspace.build_config();
        config.bloom = config.bloom.with_target_fpr(TARGET_FPR);
        dd_03_domain_filter::run_build(&config).unwrap();
        workspace
    }

    #[test]
    fn test_parallel_lookups_have_no_false_negatives() {
        let domains = random_domains(20_000, 42);
        let workspace = workspace_with(&domains);
        let filter = Arc::new(DomainFilter::open(&workspace.filter_config()).unwrap());

        let missed: Vec<&String> = domains
            .par_iter()
            .filter(|domain| !filter.is_blocked(&format!("www.{}", domain)))
            .collect();
        assert!(missed.is_empty(), "false negatives: {:?}", &missed[..missed.len().min(5)]);
    }

    #[test]
    fn test_measured_false_positive_rate_is_bounded() {
        let domains = random_domains(20_000, 1);
        let workspace = workspace_with(&domains);
        let metrics = Arc::new(FilterMetrics::new());
        let filter = DomainFilter::open(&workspace.filter_config())
            .unwrap()
            .with_metrics(metrics.clone());

        let inserted: std::collections::HashSet<&String> = domains.iter().collect();
        let unlisted: Vec<String> = random_domains(50_000, 2)
            .into_iter()
            .filter(|d| !inserted.contains(d))
            .collect();

        let false_positives = unlisted.par_iter().filter(|d| filter.is_blocked(d)).count();
        let measured = false_positives as f64 / unlisted.len() as f64;

        assert!(
            measured <= TARGET_FPR * 3.0,
            "measured fpr {} exceeds 3x target {}",
            measured,
            TARGET_FPR
        );
        assert_eq!(metrics.snapshot().lookups as usize, unlisted.len());
        assert!(fs::metadata(workspace.artifact_path()).unwrap().len() > 0);
    }
}

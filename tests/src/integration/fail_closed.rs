//! Hosts and artifacts that must never produce an allow.

#[cfg(test)]
mod tests {
    use std::fs;

    use dd_02_bloom_filters::ArtifactError;
    use dd_03_domain_filter::{BlockDecision, DomainFilter, FilterConfigBuilder, FilterError};

    use crate::fixtures::Workspace;

    fn open(workspace: &Workspace) -> DomainFilter {
        DomainFilter::open(&workspace.filter_config()).unwrap()
    }

    #[test]
    fn test_unresolvable_hosts_are_blocked() {
        let workspace = Workspace::new();
        workspace.build();
        let filter = open(&workspace);

        for host in ["", " ", ".", "..", "intranet", "a..tracker.com", ".com", "foo.unknowntld"] {
            assert_eq!(
                filter.decide(host),
                BlockDecision::InvalidHost,
                "host {:?}",
                host
            );
        }
    }

    #[test]
    fn test_blocked_tlds_win_over_everything() {
        let workspace = Workspace::new();
        workspace.build();
        let filter = open(&workspace);

        for host in ["site.xxx", "a.b.adult", "PRINTER.LOCAL", "x.sexy.", "porn", "sex"] {
            assert!(
                matches!(filter.decide(host), BlockDecision::BlockedTld { .. }),
                "host {:?}",
                host
            );
        }
    }

    #[test]
    fn test_blocked_tlds_are_configurable() {
        let workspace = Workspace::new();
        workspace.build();
        let config = FilterConfigBuilder::from_config(workspace.filter_config())
            .blocked_tlds(["io"])
            .build()
            .unwrap();
        let filter = DomainFilter::open(&config).unwrap();

        assert!(filter.is_blocked("good.github.io"));
        // `.local` is no longer blocked outright; the synthetic suffix rule still resolves it
        assert_eq!(
            filter.decide("printer.local"),
            BlockDecision::NotListed { domain: "printer.local".into() }
        );
    }

    #[test]
    fn test_missing_artifact_refuses_to_open() {
        let workspace = Workspace::new();
        let result = DomainFilter::open(&workspace.filter_config());
        assert!(matches!(
            result,
            Err(FilterError::ArtifactLoad { source: ArtifactError::Io(_), .. })
        ));
    }

    #[test]
    fn test_missing_suffix_list_refuses_to_open() {
        let workspace = Workspace::new();
        workspace.build();
        fs::remove_file(workspace.path("public_suffix_list.dat")).unwrap();

        let result = DomainFilter::open(&workspace.filter_config());
        assert!(matches!(result, Err(FilterError::Source(_))));
    }

    #[test]
    fn test_corrupt_artifacts_are_rejected() {
        let workspace = Workspace::new();
        workspace.build();
        let path = workspace.artifact_path();
        let original = fs::read(&path).unwrap();

        let mut bad_magic = original.clone();
        bad_magic[0] = b'X';
        fs::write(&path, &bad_magic).unwrap();
        assert!(matches!(
            DomainFilter::open(&workspace.filter_config()),
            Err(FilterError::ArtifactLoad { source: ArtifactError::BadMagic { .. }, .. })
        ));

        let mut future_version = original.clone();
        future_version[4..8].copy_from_slice(&2u32.to_le_bytes());
        fs::write(&path, &future_version).unwrap();
        assert!(matches!(
            DomainFilter::open(&workspace.filter_config()),
            Err(FilterError::ArtifactLoad {
                source: ArtifactError::UnsupportedVersion { found: 2, .. },
                ..
            })
        ));

        fs::write(&path, &original[..original.len() - 1]).unwrap();
        assert!(matches!(
            DomainFilter::open(&workspace.filter_config()),
            Err(FilterError::ArtifactLoad { source: ArtifactError::LengthMismatch { .. }, .. })
        ));

        fs::write(&path, &original[..10]).unwrap();
        assert!(matches!(
            DomainFilter::open(&workspace.filter_config()),
            Err(FilterError::ArtifactLoad { source: ArtifactError::TruncatedHeader(_), .. })
        ));
    }
}

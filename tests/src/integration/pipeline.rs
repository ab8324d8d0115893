//! Build -> open -> decide, end to end.

#[cfg(test)]
mod tests {
    use dd_03_domain_filter::{BlockDecision, DomainFilter};

    use crate::fixtures::Workspace;

    #[test]
    fn test_build_report_matches_blocklist() {
        let workspace = Workspace::new();
        let report = workspace.build();

        assert_eq!(report.entries_read, 8);
        assert_eq!(report.inserted, 6);
        assert_eq!(report.duplicates, 1);
        assert_eq!(report.unresolvable, 1);
        assert_eq!(report.capacity, 6);
        assert!(report.effective_fpr < report.target_fpr * 2.0);
    }

    #[test]
    fn test_subdomains_of_listed_domains_are_blocked() {
        let workspace = Workspace::new();
        workspace.build();
        let filter = DomainFilter::open(&workspace.filter_config()).unwrap();

        for host in [
            "tracker.com",
            "www.tracker.com",
            "a.b.c.tracker.com",
            "example.net",
            "www.malware.co.uk",
            "cdn.evil.github.io",
            "x.shop.foo.kawasaki.jp",
            "www.city.kawasaki.jp",
        ] {
            assert!(filter.is_blocked(host), "{} should be blocked", host);
        }
    }

    #[test]
    fn test_neighbours_of_listed_domains_are_allowed() {
        let workspace = Workspace::new();
        workspace.build();
        let filter = DomainFilter::open(&workspace.filter_config()).unwrap();

        for host in [
            "tracker.net",
            "example.com",
            "www.other.co.uk",
            "good.github.io",
            "x.other.foo.kawasaki.jp",
            "www.mozilla.org",
        ] {
            assert!(!filter.is_blocked(host), "{} should be allowed", host);
        }
    }

    #[test]
    fn test_decision_names_the_registrable_domain() {
        let workspace = Workspace::new();
        workspace.build();
        let filter = DomainFilter::open(&workspace.filter_config()).unwrap();

        assert_eq!(
            filter.decide("Ads.Tracker.COM."),
            BlockDecision::Listed { domain: "tracker.com".into() }
        );
        assert_eq!(
            filter.decide("www.bbc.co.uk"),
            BlockDecision::NotListed { domain: "bbc.co.uk".into() }
        );
        filter.close();
    }

    #[test]
    fn test_build_without_canonicalization_requires_exact_host() {
        let workspace = Workspace::new();
        let mut config = workspace.build_config();
        config.canonicalize = false;
        dd_03_domain_filter::run_build(&config).unwrap();

        let filter = DomainFilter::open(&workspace.filter_config()).unwrap();
        // Lookups are by registrable domain; only entries that already were one match.
        assert!(filter.is_blocked("www.malware.co.uk"));
        assert!(!filter.is_blocked("www.tracker.com"));
    }
}

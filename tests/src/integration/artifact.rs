//! The artifact written by the build is exactly what the read path sees.

#[cfg(test)]
mod tests {
    use dd_01_public_suffix::load_table;
    use dd_02_bloom_filters::{
        load_filter, read_header, BloomConfig, MembershipQuery, ReadOnlyBloomFilter, FORMAT_VERSION,
    };
    use dd_03_domain_filter::DenylistBuilder;

    use crate::fixtures::{random_domains, Workspace};

    #[test]
    fn test_header_reflects_build_report() {
        let workspace = Workspace::new();
        let report = workspace.build();
        let header = read_header(&workspace.artifact_path()).unwrap();

        assert_eq!(header.format_version, FORMAT_VERSION);
        assert_eq!(header.bit_count as usize, report.size_bits);
        assert_eq!(header.hash_count as usize, report.hash_count);
        assert_eq!(header.element_count as usize, report.inserted);
        assert_eq!(Some(header.artifact_len() as u64), report.bytes_written);
    }

    #[test]
    fn test_loaded_filter_answers_like_built_filter() {
        let workspace = Workspace::new();
        let table = load_table(&workspace.path("public_suffix_list.dat")).unwrap();
        let domains = random_domains(2_000, 7);
        let unlisted = random_domains(2_000, 8);

        let (built, _) = DenylistBuilder::new(&table)
            .bloom_config(BloomConfig::default().with_target_fpr(0.01))
            .build(&domains)
            .unwrap();
        let bytes = built.to_bytes().unwrap();
        let loaded = ReadOnlyBloomFilter::from_bytes(&bytes).unwrap();

        for domain in domains.iter().chain(&unlisted) {
            assert_eq!(built.contains(domain.as_bytes()), loaded.contains(domain.as_bytes()));
        }
        assert_eq!(loaded.to_bytes().unwrap(), bytes);
    }

    #[test]
    fn test_rebuild_is_byte_identical() {
        let workspace = Workspace::new();
        workspace.build();
        let first = std::fs::read(workspace.artifact_path()).unwrap();
        workspace.build();
        let second = std::fs::read(workspace.artifact_path()).unwrap();

        assert_eq!(first, second);
        assert!(load_filter(&workspace.artifact_path()).is_ok());
    }
}

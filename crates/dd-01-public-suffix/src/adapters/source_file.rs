//! Source file reader

use std::fs;
use std::path::Path;

use tracing::info;

use crate::domain::{parse_source_lines, PublicSuffixTable, RuleKind};
use crate::error::SuffixError;

/// Read a line-oriented source file and return its tokens
pub fn read_source_file(path: &Path) -> Result<Vec<String>, SuffixError> {
    let text = fs::read_to_string(path).map_err(|source| SuffixError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_source_lines(&text))
}

/// Load a Public Suffix Table from a suffix-list file
pub fn load_table(path: &Path) -> Result<PublicSuffixTable, SuffixError> {
    let table = PublicSuffixTable::from_tokens(read_source_file(path)?);
    info!(
        path = %path.display(),
        normal = table.count(RuleKind::Normal),
        wildcard = table.count(RuleKind::Wildcard),
        exception = table.count(RuleKind::Exception),
        "Loaded public suffix table"
    );
    Ok(table)
}

impl PublicSuffixTable {
    /// Load a table from a suffix-list file
    pub fn from_path(path: &Path) -> Result<Self, SuffixError> {
        load_table(path)
    }
}

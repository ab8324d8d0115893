//! Line tokenizer shared by suffix lists and domain blocklists
//!
//! Rules per line:
//! - surrounding whitespace is stripped
//! - blank lines and lines starting with `//` are skipped
//! - only the first whitespace-delimited token is kept

/// Comment marker recognised at the start of a line.
pub const COMMENT_MARKER: &str = "//";

/// Extract the first token of a source line, if the line carries one.
pub fn first_token(line: &str) -> Option<&str> {
    let line = line.trim();
    if line.is_empty() || line.starts_with(COMMENT_MARKER) {
        return None;
    }
    line.split_whitespace().next()
}

/// Tokenize a whole source text.
pub fn parse_source_lines(text: &str) -> Vec<String> {
    text.lines().filter_map(first_token).map(str::to_owned).collect()
}

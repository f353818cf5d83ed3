//! Parsing of `ghq` output

use std::path::PathBuf;

/// Parse the output of `ghq root`: a single path, surrounding whitespace removed.
pub fn parse_root(stdout: &str) -> PathBuf {
    PathBuf::from(stdout.trim())
}

/// Parse the output of `ghq list`: one repository per line.
///
/// Lines are trimmed and blank lines dropped. Duplicates are kept; the
/// caller decides whether to collapse them.
pub fn parse_repository_list(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

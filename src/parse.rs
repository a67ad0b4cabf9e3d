use crate::error::Result;
use std::fs;
use std::path::Path;

/// Tokenize a dependency declaration into records.
///
/// One record per line: the first token is a class name, the remaining
/// tokens are the classes it depends on. Tokens are separated by runs of
/// whitespace; blank lines are skipped.
pub fn parse_records(input: &str) -> Vec<Vec<String>> {
    input
        .lines()
        .map(|line| {
            line.split_whitespace()
                .map(str::to_owned)
                .collect::<Vec<_>>()
        })
        .filter(|tokens| !tokens.is_empty())
        .collect()
}

/// Read a dependency declaration file and tokenize it.
pub fn load_records(path: &Path) -> Result<Vec<Vec<String>>> {
    let contents = fs::read_to_string(path)?;
    Ok(parse_records(&contents))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let records = parse_records("A B C\nB D\n");
        assert_eq!(records, vec![vec!["A", "B", "C"], vec!["B", "D"]]);
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let records = parse_records("A B\n\n   \nB C\n");
        assert_eq!(records, vec![vec!["A", "B"], vec!["B", "C"]]);
    }

    #[test]
    fn test_parse_collapses_whitespace_runs() {
        let records = parse_records("A \t B   C");
        assert_eq!(records, vec![vec!["A", "B", "C"]]);
    }

    #[test]
    fn test_parse_single_token_line() {
        let records = parse_records("Standalone\n");
        assert_eq!(records, vec![vec!["Standalone"]]);
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(parse_records("").is_empty());
    }
}

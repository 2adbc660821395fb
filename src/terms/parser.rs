use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::Path;

use crate::error::{ModerationError, Result, TermSourceErrorKind};
use crate::tokenize::is_separator;

/// A term line is a single run of non-separator characters
static TERM_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^ \t\n\x0B\x0C\r]+$").expect("TERM_PATTERN: hardcoded regex is invalid")
});

/// Maximum nesting depth for `file:` include directives.
const MAX_INCLUDE_DEPTH: usize = 10;

/// Trim token separators only; other whitespace is part of a term.
fn trim_separators(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_ascii() && is_separator(c as u8))
}

/// Parse a text term list.
///
/// One term per line. `#` starts a comment, blank lines are skipped, and
/// `file: /path/to/terms.txt` includes another text list.
pub fn parse_terms(text: &str) -> Result<Vec<String>> {
    parse_terms_inner(text, None, 0)
}

fn parse_terms_inner(text: &str, origin: Option<&Path>, depth: usize) -> Result<Vec<String>> {
    if depth > MAX_INCLUDE_DEPTH {
        return Err(ModerationError::term_source(
            TermSourceErrorKind::Malformed,
            format!(
                "file include depth exceeds maximum ({MAX_INCLUDE_DEPTH}), possible circular include"
            ),
        ));
    }

    let mut terms = Vec::new();

    for (line_num, line) in text.lines().enumerate() {
        let line_num = line_num + 1;

        let line = match line.find('#') {
            Some(pos) => &line[..pos],
            None => line,
        };
        let line = trim_separators(line);

        if line.is_empty() {
            continue;
        }

        if let Some(path) = line.strip_prefix("file:") {
            terms.extend(parse_terms_from_file_inner(trim_separators(path), depth + 1)?);
            continue;
        }

        if !TERM_PATTERN.is_match(line) {
            let message = match origin {
                Some(path) => format!(
                    "Term contains whitespace in '{}': {}",
                    path.display(),
                    line
                ),
                None => format!("Term contains whitespace: {}", line),
            };
            return Err(ModerationError::TermSourceAtLine {
                line: line_num,
                message,
            });
        }
        terms.push(line.to_string());
    }

    Ok(terms)
}

/// Parse a text term list from a file.
pub fn parse_terms_from_file(path: impl AsRef<Path>) -> Result<Vec<String>> {
    parse_terms_from_file_inner(path, 0)
}

fn parse_terms_from_file_inner(path: impl AsRef<Path>, depth: usize) -> Result<Vec<String>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| {
        ModerationError::term_source(
            TermSourceErrorKind::FileError,
            format!("Failed to read term list '{}': {}", path.display(), e),
        )
    })?;
    parse_terms_inner(&text, Some(path), depth)
}

/// Parse a JSON term list: an array of strings.
pub fn parse_json_terms(text: &str) -> Result<Vec<String>> {
    serde_json::from_str::<Vec<String>>(text).map_err(|e| {
        ModerationError::term_source(
            TermSourceErrorKind::Malformed,
            format!("Term list must be a JSON array of strings: {}", e),
        )
    })
}

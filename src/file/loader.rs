//! Expression list loading functionality.
//!
//! An expression list is plain text with one mutation path per line. Blank
//! lines and lines starting with the comment prefix are skipped. Each
//! remaining line is parsed on its own, so one bad line does not hide the
//! others.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::path::{self, ParseError};

/// One expression read from a list, with its parse outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    /// 1-based line number in the source.
    pub line: usize,
    /// The expression text, trimmed.
    pub source: String,
    pub result: Result<path::Path, ParseError>,
}

impl Expression {
    pub fn is_valid(&self) -> bool {
        self.result.is_ok()
    }
}

/// Loads and parses an expression list from the filesystem.
///
/// # Errors
///
/// Returns an error if the file cannot be read. Parse failures are not
/// errors here; they are recorded on the returned expressions.
///
/// # Examples
///
/// ```no_run
/// use mutpath::file::loader::load_expressions_file;
///
/// let expressions = load_expressions_file("paths.txt", "#").unwrap();
/// let invalid = expressions.iter().filter(|e| !e.is_valid()).count();
/// ```
pub fn load_expressions_file<P: AsRef<Path>>(
    path: P,
    comment_prefix: &str,
) -> Result<Vec<Expression>> {
    let path_ref = path.as_ref();
    let content = fs::read_to_string(path_ref)
        .with_context(|| format!("Failed to read {}", path_ref.display()))?;
    Ok(parse_expression_lines(&content, comment_prefix))
}

/// Loads and parses an expression list from standard input.
///
/// Reads until EOF; useful for `cat paths.txt | mutpath check`.
pub fn load_expressions_from_stdin(comment_prefix: &str) -> Result<Vec<Expression>> {
    use std::io::{self, Read};

    let mut content = String::new();
    io::stdin()
        .read_to_string(&mut content)
        .context("Failed to read from stdin")?;
    Ok(parse_expression_lines(&content, comment_prefix))
}

/// Parses every non-blank, non-comment line of `content`.
///
/// An empty `comment_prefix` disables comment skipping.
pub fn parse_expression_lines(content: &str, comment_prefix: &str) -> Vec<Expression> {
    let mut expressions = Vec::new();

    for (line_num, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if !comment_prefix.is_empty() && trimmed.starts_with(comment_prefix) {
            continue;
        }

        expressions.push(Expression {
            line: line_num + 1,
            source: trimmed.to_string(),
            result: path::parse(trimmed),
        });
    }

    expressions
}

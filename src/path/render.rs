//! Canonical text rendering for mutation path nodes.
//!
//! Identifiers made only of word characters are written bare; everything
//! else (including the empty string and `*`) is quoted, escaping the quote
//! character and backslashes. Parsing the rendered text yields the same tree.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use super::ast::Node;
use super::lexer::is_identifier_char;

/// Delimiter used when a token has to be quoted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteStyle {
    #[default]
    Double,
    Single,
}

impl QuoteStyle {
    pub fn delimiter(self) -> char {
        match self {
            QuoteStyle::Double => '"',
            QuoteStyle::Single => '\'',
        }
    }
}

impl std::str::FromStr for QuoteStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "double" => Ok(QuoteStyle::Double),
            "single" => Ok(QuoteStyle::Single),
            other => Err(format!(
                "unknown quote style '{}', expected 'double' or 'single'",
                other
            )),
        }
    }
}

/// Options controlling how nodes are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub quote: QuoteStyle,
}

impl RenderOptions {
    pub fn with_quote(quote: QuoteStyle) -> Self {
        Self { quote }
    }
}

/// True if `value` can be written without quotes.
pub fn is_bare_identifier(value: &str) -> bool {
    !value.is_empty() && value.chars().all(is_identifier_char)
}

/// Renders a single identifier value, quoting it only when required.
pub fn quote_token(value: &str, quote: QuoteStyle) -> Cow<'_, str> {
    if is_bare_identifier(value) {
        return Cow::Borrowed(value);
    }

    let delimiter = quote.delimiter();
    let mut out = String::with_capacity(value.len() + 2);
    out.push(delimiter);
    for ch in value.chars() {
        if ch == delimiter || ch == '\\' {
            out.push('\\');
        }
        out.push(ch);
    }
    out.push(delimiter);
    Cow::Owned(out)
}

/// Renders a node sequence as path syntax.
///
/// Objects after the first segment get a `.` separator; lists attach
/// directly to whatever precedes them. Nested paths are rendered inline.
pub(crate) fn render_nodes(nodes: &[Node], options: &RenderOptions) -> String {
    let mut out = String::new();
    write_nodes(nodes, options, &mut out);
    out
}

fn write_nodes(nodes: &[Node], options: &RenderOptions, out: &mut String) {
    for node in nodes {
        match node {
            Node::Object(object) => {
                // every rendered segment is non-empty, so this marks "not first"
                if !out.is_empty() {
                    out.push('.');
                }
                out.push_str(&object.render_with(options));
            }
            Node::List(list) => out.push_str(&list.render_with(options)),
            Node::Path(path) => write_nodes(&path.nodes, options, out),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_identifiers() {
        assert!(is_bare_identifier("spec"));
        assert!(is_bare_identifier("-123-_456_"));
        assert!(!is_bare_identifier(""));
        assert!(!is_bare_identifier("*"));
        assert!(!is_bare_identifier("foo bar"));
        assert!(!is_bare_identifier("a.b"));
    }

    #[test]
    fn test_quote_token_double() {
        assert_eq!(quote_token("spec", QuoteStyle::Double), "spec");
        assert_eq!(quote_token("", QuoteStyle::Double), r#""""#);
        assert_eq!(quote_token("*", QuoteStyle::Double), r#""*""#);
        assert_eq!(quote_token("sp\"ec", QuoteStyle::Double), r#""sp\"ec""#);
        assert_eq!(quote_token("back\\", QuoteStyle::Double), r#""back\\""#);
        assert_eq!(quote_token("it's", QuoteStyle::Double), r#""it's""#);
    }

    #[test]
    fn test_quote_token_single() {
        assert_eq!(quote_token("it's", QuoteStyle::Single), r"'it\'s'");
        assert_eq!(quote_token("say \"hi\"", QuoteStyle::Single), "'say \"hi\"'");
    }

    #[test]
    fn test_quote_style_from_str() {
        assert_eq!("double".parse::<QuoteStyle>(), Ok(QuoteStyle::Double));
        assert_eq!("single".parse::<QuoteStyle>(), Ok(QuoteStyle::Single));
        assert!("backtick".parse::<QuoteStyle>().is_err());
    }
}

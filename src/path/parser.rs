//! Mutation path parser.
//!
//! Grammar:
//!
//! ```text
//! Path         := (Object Continuation*)?
//! Continuation := ('.' Object) | List
//! Object       := Identifier | QuotedIdentifier
//! List         := '[' KeyField ':' ListValue ']'
//! KeyField     := Identifier | QuotedIdentifier
//! ListValue    := '*' | Identifier | QuotedIdentifier
//! ```
//!
//! A list may only follow an object, with nothing in between.

use log::debug;

use super::ast::{List, Node, Object, Path};
use super::error::ParseError;
use super::lexer::{Lexer, Token, TokenKind};

/// Recursive-descent parser holding one token of lookahead.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
}

impl<'a> Parser<'a> {
    /// Creates a parser and reads the first token.
    pub fn new(input: &'a str) -> Result<Self, ParseError> {
        let mut lexer = Lexer::new(input);
        let current = lexer.next_token()?;
        Ok(Self { lexer, current })
    }

    /// Parses `input` into a [`Path`].
    ///
    /// Empty (or all-whitespace) input yields an empty path.
    pub fn parse(input: &str) -> Result<Path, ParseError> {
        let result = Parser::new(input).and_then(|mut parser| parser.parse_path());
        match &result {
            Ok(path) => debug!("parsed {:?} into {} node(s)", input, path.len()),
            Err(err) => debug!("failed to parse {:?}: {}", input, err),
        }
        result
    }

    fn parse_path(&mut self) -> Result<Path, ParseError> {
        let mut path = Path::default();

        if self.current.kind == TokenKind::EndOfInput {
            return Ok(path);
        }

        loop {
            path.push(self.parse_object()?);

            if self.current.kind == TokenKind::LBracket {
                path.push(self.parse_list()?);
            }

            match self.current.kind {
                TokenKind::EndOfInput => return Ok(path),
                TokenKind::Dot => {
                    let dot = self.current.position;
                    self.advance()?;
                    if self.current.kind == TokenKind::EndOfInput {
                        return Err(ParseError::TrailingSeparator { position: dot });
                    }
                }
                _ => return Err(self.unexpected("'.', '[' or end of input")),
            }
        }
    }

    /// Object := Identifier | QuotedIdentifier
    fn parse_object(&mut self) -> Result<Node, ParseError> {
        let reference = self.expect_identifier("field name")?;
        Ok(Object::new(reference).into())
    }

    /// List := '[' KeyField ':' ListValue ']'
    fn parse_list(&mut self) -> Result<Node, ParseError> {
        self.expect(TokenKind::LBracket)?;
        let key_field = self.expect_identifier("list key field")?;
        self.expect(TokenKind::Colon)?;

        let list = match &self.current.kind {
            TokenKind::Star => List::glob(key_field),
            TokenKind::Identifier(value) | TokenKind::QuotedIdentifier(value) => {
                List::with_value(key_field, value.clone())
            }
            _ => return Err(self.unexpected("'*' or list key value")),
        };
        self.advance()?;
        self.expect(TokenKind::RBracket)?;

        Ok(list.into())
    }

    /// Moves to the next token.
    fn advance(&mut self) -> Result<(), ParseError> {
        self.current = self.lexer.next_token()?;
        Ok(())
    }

    /// Expects a specific token and advances, or returns an error.
    fn expect(&mut self, expected: TokenKind) -> Result<(), ParseError> {
        if self.current.kind == expected {
            self.advance()
        } else {
            Err(self.unexpected(expected.to_string()))
        }
    }

    /// Expects an identifier of either flavour, returning its value.
    fn expect_identifier(&mut self, what: &str) -> Result<String, ParseError> {
        let value = match self.current.kind.identifier() {
            Some(value) => value.to_string(),
            None => return Err(self.unexpected(what)),
        };
        self.advance()?;
        Ok(value)
    }

    fn unexpected(&self, expected: impl Into<String>) -> ParseError {
        ParseError::unexpected(
            self.current.position,
            self.current.kind.to_string(),
            expected,
        )
    }
}

/// Parses a mutation path; see [`Parser::parse`].
pub fn parse(input: &str) -> Result<Path, ParseError> {
    Parser::parse(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::ast::KeyMatch;
    use crate::path::error::ErrorKind;

    fn obj(reference: &str) -> Node {
        Object::new(reference).into()
    }

    fn kind_of(input: &str) -> ErrorKind {
        Parser::parse(input).unwrap_err().kind()
    }

    #[test]
    fn test_parse_empty() {
        let path = Parser::parse("").unwrap();
        assert!(path.is_empty());
        assert!(Parser::parse("   ").unwrap().is_empty());
    }

    #[test]
    fn test_parse_single_field() {
        let path = Parser::parse("single_field").unwrap();
        assert_eq!(path.nodes, vec![obj("single_field")]);
    }

    #[test]
    fn test_parse_nested_fields() {
        let path = Parser::parse("metadata.labels.app").unwrap();
        assert_eq!(path.nodes, vec![obj("metadata"), obj("labels"), obj("app")]);
    }

    #[test]
    fn test_parse_glob_list() {
        let path = Parser::parse("spec.containers[name: *].securityContext").unwrap();
        assert_eq!(
            path.nodes,
            vec![
                obj("spec"),
                obj("containers"),
                List::glob("name").into(),
                obj("securityContext"),
            ]
        );
    }

    #[test]
    fn test_parse_quoted_star_is_literal() {
        let path = Parser::parse(r#"spec.containers[name: "*"]"#).unwrap();
        match &path.nodes[2] {
            Node::List(list) => {
                assert_eq!(list.key_match, KeyMatch::Value("*".to_string()));
                assert!(!list.is_glob());
            }
            other => panic!("expected list, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_list_at_end() {
        let path = Parser::parse("spec.containers[name: foo]").unwrap();
        assert_eq!(path.len(), 3);
        assert_eq!(path.nodes[2], List::with_value("name", "foo").into());
    }

    #[test]
    fn test_leading_separator() {
        assert_eq!(kind_of(".spec"), ErrorKind::UnexpectedToken);
    }

    #[test]
    fn test_trailing_separator() {
        let err = Parser::parse("spec.").unwrap_err();
        assert_eq!(err, ParseError::TrailingSeparator { position: 4 });
        assert_eq!(kind_of("spec.containers[a: b].  "), ErrorKind::TrailingSeparator);
    }

    #[test]
    fn test_list_placement() {
        assert_eq!(kind_of("[foo: bar]"), ErrorKind::UnexpectedToken);
        assert_eq!(kind_of("spec.containers[foo: bar][bar: *]"), ErrorKind::UnexpectedToken);
        assert_eq!(kind_of("spec.[foo: bar]"), ErrorKind::UnexpectedToken);
    }

    #[test]
    fn test_malformed_list_bodies() {
        for input in [
            "spec.containers[name: ].x",
            "spec.containers[].x",
            "spec.containers[:].x",
            "spec.containers[:foo].x",
            "spec.containers[foo].x",
            "spec.containers[*].x",
            "spec.containers[name: foo",
            "foo[",
        ] {
            assert_eq!(kind_of(input), ErrorKind::UnexpectedToken, "input: {}", input);
        }
    }

    #[test]
    fn test_error_reports_offending_token() {
        let err = Parser::parse("spec.foo bar").unwrap_err();
        assert_eq!(
            err,
            ParseError::UnexpectedToken {
                position: 9,
                found: "identifier \"bar\"".to_string(),
                expected: "'.', '[' or end of input".to_string(),
            }
        );
    }

    #[test]
    fn test_free_function_matches_parser() {
        assert_eq!(parse("a.b"), Parser::parse("a.b"));
    }
}

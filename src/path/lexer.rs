//! Tokenizer for mutation path expressions.
//!
//! The lexer is pull-based: the parser asks for one token at a time via
//! [`Lexer::next_token`]. Whitespace outside of quotes is skipped, quoted
//! identifiers are unescaped, and every token records the byte offset where
//! it starts.

use std::fmt;
use std::iter::Peekable;
use std::str::CharIndices;

use log::trace;

use super::error::ParseError;

/// Returns true for characters allowed in an unquoted identifier:
/// letters, decimal digits, `_` and `-`.
///
/// Letter-numbers such as `Ⅷ` carry the Unicode Alphabetic property, so
/// numerics are excluded explicitly.
pub fn is_identifier_char(ch: char) -> bool {
    (ch.is_alphabetic() && !ch.is_numeric()) || ch.is_ascii_digit() || ch == '_' || ch == '-'
}

/// The kind of a token, carrying the semantic value for identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// Unquoted run of identifier characters.
    Identifier(String),
    /// Identifier delimited by `"` or `'`, already unescaped.
    QuotedIdentifier(String),
    Dot,
    LBracket,
    RBracket,
    Colon,
    /// A bare, unquoted `*`.
    Star,
    EndOfInput,
}

impl TokenKind {
    /// The identifier text, for either identifier flavour.
    pub fn identifier(&self) -> Option<&str> {
        match self {
            TokenKind::Identifier(value) | TokenKind::QuotedIdentifier(value) => Some(value),
            _ => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Identifier(value) => write!(f, "identifier {:?}", value),
            TokenKind::QuotedIdentifier(value) => write!(f, "quoted identifier {:?}", value),
            TokenKind::Dot => write!(f, "'.'"),
            TokenKind::LBracket => write!(f, "'['"),
            TokenKind::RBracket => write!(f, "']'"),
            TokenKind::Colon => write!(f, "':'"),
            TokenKind::Star => write!(f, "'*'"),
            TokenKind::EndOfInput => write!(f, "end of input"),
        }
    }
}

/// A token and the byte offset where it starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub position: usize,
}

impl Token {
    pub fn new(kind: TokenKind, position: usize) -> Self {
        Self { kind, position }
    }
}

/// Lexer over a borrowed path expression.
pub struct Lexer<'a> {
    input: &'a str,
    chars: Peekable<CharIndices<'a>>,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer positioned at the start of `input`.
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.char_indices().peekable(),
        }
    }

    /// Scans the next token.
    ///
    /// Once the input is exhausted this keeps returning `EndOfInput`.
    /// Unterminated quotes and characters that cannot start any token are
    /// reported as [`ParseError::UnexpectedToken`].
    pub fn next_token(&mut self) -> Result<Token, ParseError> {
        self.skip_whitespace();

        let (start, ch) = match self.chars.next() {
            Some(next) => next,
            None => return Ok(Token::new(TokenKind::EndOfInput, self.input.len())),
        };

        let kind = match ch {
            '.' => TokenKind::Dot,
            '[' => TokenKind::LBracket,
            ']' => TokenKind::RBracket,
            ':' => TokenKind::Colon,
            '*' => TokenKind::Star,
            '"' | '\'' => self.scan_quoted(start, ch)?,
            c if is_identifier_char(c) => self.scan_identifier(start),
            other => {
                return Err(ParseError::unexpected(
                    start,
                    format!("character {:?}", other),
                    "an identifier, quoted identifier, '.', '[', ']', ':' or '*'",
                ))
            }
        };

        trace!("token {} at {}", kind, start);
        Ok(Token::new(kind, start))
    }

    fn skip_whitespace(&mut self) {
        while let Some(&(_, ch)) = self.chars.peek() {
            if ch.is_whitespace() {
                self.chars.next();
            } else {
                break;
            }
        }
    }

    /// Consumes the rest of an unquoted identifier whose first character
    /// starts at `start`.
    fn scan_identifier(&mut self, start: usize) -> TokenKind {
        let mut end = self.input.len();
        while let Some(&(offset, ch)) = self.chars.peek() {
            if is_identifier_char(ch) {
                self.chars.next();
            } else {
                end = offset;
                break;
            }
        }
        TokenKind::Identifier(self.input[start..end].to_string())
    }

    /// Consumes a quoted identifier; the opening `quote` has been read.
    fn scan_quoted(&mut self, start: usize, quote: char) -> Result<TokenKind, ParseError> {
        let mut value = String::new();
        loop {
            match self.chars.next() {
                Some((_, ch)) if ch == quote => return Ok(TokenKind::QuotedIdentifier(value)),
                Some((_, '\\')) => match self.chars.next() {
                    Some((_, ch)) if ch == quote || ch == '\\' => value.push(ch),
                    Some((_, ch)) => {
                        value.push('\\');
                        value.push(ch);
                    }
                    None => return Err(unterminated(start, quote)),
                },
                Some((_, ch)) => value.push(ch),
                None => return Err(unterminated(start, quote)),
            }
        }
    }
}

fn unterminated(start: usize, quote: char) -> ParseError {
    ParseError::unexpected(
        start,
        format!("unterminated quoted identifier opened with {}", quote),
        format!("closing {}", quote),
    )
}

//! Error types for mutation path parsing.

use thiserror::Error;

/// The category of a [`ParseError`], usable for matching without
/// inspecting the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A token appeared where the grammar does not permit it.
    UnexpectedToken,
    /// The path ended directly after a `.` separator.
    TrailingSeparator,
}

/// Errors that can occur while parsing a mutation path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Unexpected token at a specific byte offset.
    #[error("unexpected token {found} at position {position}, expected {expected}")]
    UnexpectedToken {
        position: usize,
        found: String,
        expected: String,
    },
    /// A `.` separator with nothing after it.
    #[error("trailing separator at position {position}")]
    TrailingSeparator { position: usize },
}

impl ParseError {
    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ParseError::UnexpectedToken { .. } => ErrorKind::UnexpectedToken,
            ParseError::TrailingSeparator { .. } => ErrorKind::TrailingSeparator,
        }
    }

    /// Byte offset into the input where parsing stopped.
    pub fn position(&self) -> usize {
        match self {
            ParseError::UnexpectedToken { position, .. }
            | ParseError::TrailingSeparator { position } => *position,
        }
    }

    pub fn is_unexpected_token(&self) -> bool {
        self.kind() == ErrorKind::UnexpectedToken
    }

    pub fn is_trailing_separator(&self) -> bool {
        self.kind() == ErrorKind::TrailingSeparator
    }

    pub(crate) fn unexpected(
        position: usize,
        found: impl Into<String>,
        expected: impl Into<String>,
    ) -> Self {
        ParseError::UnexpectedToken {
            position,
            found: found.into(),
            expected: expected.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_matches_variant() {
        let err = ParseError::unexpected(3, "'*'", "identifier");
        assert_eq!(err.kind(), ErrorKind::UnexpectedToken);
        assert!(err.is_unexpected_token());
        assert!(!err.is_trailing_separator());

        let err = ParseError::TrailingSeparator { position: 5 };
        assert_eq!(err.kind(), ErrorKind::TrailingSeparator);
        assert_eq!(err.position(), 5);
    }

    #[test]
    fn test_display_carries_context() {
        let err = ParseError::unexpected(7, "'['", "'.' or end of input");
        assert_eq!(
            err.to_string(),
            "unexpected token '[' at position 7, expected '.' or end of input"
        );
        let err = ParseError::TrailingSeparator { position: 4 };
        assert_eq!(err.to_string(), "trailing separator at position 4");
    }
}

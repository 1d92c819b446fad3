/// Whether the parsing of the regex succeeded.
pub type ParseResult<T> = core::result::Result<T, ParseError>;

/// Information about the error occurred during parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// Start and end position of the offending token in the pattern.
    pub pos: (usize, usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A character that is neither an ASCII alphanumeric symbol nor one of
    /// `( ) * . +`.
    UnknownToken(char),
    /// A `)` without an open `(` before it.
    UnmatchedRightParen,
    /// A `(` that is never closed.
    UnmatchedLeftParen,
}

impl ParseError {
    pub(crate) fn new(kind: ParseErrorKind, pos: (usize, usize)) -> Self {
        Self { kind, pos }
    }
}

impl std::fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use ParseErrorKind::*;
        match self {
            UnknownToken(c) => write!(f, "unknown token `{}`", c),
            UnmatchedRightParen => write!(f, "expected LEFT_PAREN before RIGHT_PAREN"),
            UnmatchedLeftParen => write!(f, "expected RIGHT_PAREN for LEFT_PAREN"),
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[ERROR] ({}, {}): {}", self.pos.0, self.pos.1, self.kind)
    }
}

impl std::error::Error for ParseError {}

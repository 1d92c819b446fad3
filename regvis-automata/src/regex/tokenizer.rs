use std::{iter::Enumerate, str::Chars};

/// Regex tokenizer.
pub(super) struct Tokenizer<'a> {
    /// Iterator over the characters in the input along with their position.
    iter: Enumerate<Chars<'a>>,
}

/// Regex token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Token {
    pub(super) kind: TokenKind,
    /// Start and end position of the token in the input text. The end position
    /// is one further than the end of the current token.
    pub(super) pos: (usize, usize),
}

impl Token {
    /// Creates a new [`Token`].
    pub(super) fn new(kind: TokenKind, pos: (usize, usize)) -> Self {
        Self { kind, pos }
    }
}

/// Regex token kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum TokenKind {
    /// An ASCII alphanumeric input symbol.
    Symbol(char),
    Operator(OperatorKind),
    Invalid(char),
}

/// Regex operator kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum OperatorKind {
    LeftParen,
    RightParen,
    Star,
    Concat,
    Union,
}

impl Iterator for Tokenizer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let (pos, ch) = self.iter.next()?;

        let kind = match ch {
            '(' => TokenKind::Operator(OperatorKind::LeftParen),
            ')' => TokenKind::Operator(OperatorKind::RightParen),
            '*' => TokenKind::Operator(OperatorKind::Star),
            '.' => TokenKind::Operator(OperatorKind::Concat),
            '+' => TokenKind::Operator(OperatorKind::Union),
            c if c.is_ascii_alphanumeric() => TokenKind::Symbol(c),

            c => TokenKind::Invalid(c),
        };

        Some(Token::new(kind, (pos, pos + 1)))
    }
}

impl<'a> Tokenizer<'a> {
    /// Creates a new tokenizer.
    pub(super) fn new(input: &'a str) -> Self {
        Self {
            iter: input.chars().enumerate(),
        }
    }
}

impl OperatorKind {
    /// Binding strength of the operator. Parentheses never bind.
    pub(super) fn precedence(&self) -> u8 {
        match self {
            OperatorKind::Union => 1,
            OperatorKind::Concat => 2,
            OperatorKind::Star => 3,
            OperatorKind::LeftParen | OperatorKind::RightParen => 0,
        }
    }

    pub(super) fn as_char(&self) -> char {
        match self {
            OperatorKind::LeftParen => '(',
            OperatorKind::RightParen => ')',
            OperatorKind::Star => '*',
            OperatorKind::Concat => '.',
            OperatorKind::Union => '+',
        }
    }
}

impl TokenKind {
    /// Whether a concatenation may directly follow this token.
    pub(super) fn ends_operand(&self) -> bool {
        matches!(
            self,
            TokenKind::Symbol(_)
                | TokenKind::Operator(OperatorKind::RightParen)
                | TokenKind::Operator(OperatorKind::Star)
        )
    }

    /// Whether a concatenation may directly precede this token.
    pub(super) fn starts_operand(&self) -> bool {
        matches!(
            self,
            TokenKind::Symbol(_) | TokenKind::Operator(OperatorKind::LeftParen)
        )
    }

    pub(super) fn as_char(&self) -> char {
        match *self {
            TokenKind::Symbol(c) | TokenKind::Invalid(c) => c,
            TokenKind::Operator(op) => op.as_char(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{OperatorKind::*, Token, TokenKind::*, Tokenizer};

    macro_rules! tokens {
        ($(($start:expr, $end:expr) => $token_kind:expr),*) => {
           [$(Token::new($token_kind.into(), ($start, $end))),*]
        };
    }

    macro_rules! assert_eq_tokens {
        ($lhs:expr, $rhs:expr) => {
            let actual = $rhs.collect::<Vec<_>>();
            assert_eq!($lhs.len(), actual.len());
            for (expected, actual) in $lhs.into_iter().zip(actual) {
                assert_eq!(expected, actual);
            }
        };
    }

    #[test]
    fn symbols() {
        let tokenizer = Tokenizer::new("ab0Z");
        let tokens = tokens![
            (0, 1) => Symbol('a'),
            (1, 2) => Symbol('b'),
            (2, 3) => Symbol('0'),
            (3, 4) => Symbol('Z')
        ];

        assert_eq_tokens!(tokens, tokenizer);
    }

    #[test]
    fn operators() {
        let tokenizer = Tokenizer::new("()*.+");
        let tokens = tokens![
            (0, 1) => Operator(LeftParen),
            (1, 2) => Operator(RightParen),
            (2, 3) => Operator(Star),
            (3, 4) => Operator(Concat),
            (4, 5) => Operator(Union)
        ];

        assert_eq_tokens!(tokens, tokenizer);
    }

    #[test]
    fn invalid() {
        let tokenizer = Tokenizer::new("a#|é");
        let tokens = tokens![
            (0, 1) => Symbol('a'),
            (1, 2) => Invalid('#'),
            (2, 3) => Invalid('|'),
            (3, 4) => Invalid('é')
        ];

        assert_eq_tokens!(tokens, tokenizer);
    }
}

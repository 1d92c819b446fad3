//! Operator-precedence (shunting-yard) parser turning an infix pattern into
//! postfix notation.
//!
//! # Grammar
//!
//! ```ebnf
//!     expression ::= term (UNION term)*;
//!     term ::= factor (CONCAT? factor)*;
//!     factor ::= atom STAR*;
//!     atom ::= SYMBOL | LEFT_PAREN expression RIGHT_PAREN;
//! ```
//!
//! Concatenation is implicit in the input. Before the precedence parse an
//! explicit `.` is inserted wherever an operand ends and the next one starts,
//! so that `ab*(c+d)` becomes `a.b*.(c+d)`.

use self::error::{ParseError, ParseErrorKind, ParseResult};
use super::tokenizer::{OperatorKind, Token, TokenKind, Tokenizer};

pub mod error;

/// Shunting-yard regex parser.
pub struct Parser<'a> {
    input: &'a str,
}

impl<'a> Parser<'a> {
    /// Creates a new regex parser from the `input`.
    pub fn new(input: &'a str) -> Self {
        Self { input }
    }

    /// Returns the pattern with every implicit concatenation made explicit.
    ///
    /// # Fails
    ///
    /// When the pattern contains an unknown token.
    pub fn with_concatenation(&self) -> ParseResult<String> {
        Ok(self
            .concatenated()?
            .iter()
            .map(|token| token.kind.as_char())
            .collect())
    }

    /// Parses the `input` into a postfix (reverse-Polish) token string.
    ///
    /// An empty pattern yields an empty postfix string; rejecting it is left
    /// to the NFA compiler.
    pub fn parse(&self) -> ParseResult<String> {
        let mut output = String::with_capacity(self.input.len() * 2);
        let mut operators: Vec<Token> = Vec::new();

        for token in self.concatenated()? {
            match token.kind {
                TokenKind::Symbol(c) => output.push(c),
                TokenKind::Operator(OperatorKind::LeftParen) => operators.push(token),
                TokenKind::Operator(OperatorKind::RightParen) => loop {
                    match operators.pop() {
                        Some(Token {
                            kind: TokenKind::Operator(OperatorKind::LeftParen),
                            ..
                        }) => break,
                        Some(op) => output.push(op.kind.as_char()),
                        None => {
                            return Err(ParseError::new(
                                ParseErrorKind::UnmatchedRightParen,
                                token.pos,
                            ))
                        }
                    }
                },
                TokenKind::Operator(op) => {
                    // Left associative: pop everything binding at least as
                    // tightly. `(` has precedence 0 and stops the loop.
                    while let Some(Token {
                        kind: TokenKind::Operator(top),
                        ..
                    }) = operators.last()
                    {
                        if top.precedence() < op.precedence() {
                            break;
                        }
                        output.push(top.as_char());
                        operators.pop();
                    }
                    operators.push(token);
                }
                TokenKind::Invalid(c) => {
                    return Err(ParseError::new(ParseErrorKind::UnknownToken(c), token.pos))
                }
            }
        }

        while let Some(token) = operators.pop() {
            match token.kind {
                TokenKind::Operator(OperatorKind::LeftParen) => {
                    return Err(ParseError::new(
                        ParseErrorKind::UnmatchedLeftParen,
                        token.pos,
                    ))
                }
                kind => output.push(kind.as_char()),
            }
        }

        log::debug!("parsed `{}` into postfix `{}`", self.input, output);
        Ok(output)
    }

    /// Tokenizes the input and inserts explicit concatenation operators.
    fn concatenated(&self) -> ParseResult<Vec<Token>> {
        let mut tokens: Vec<Token> = Vec::with_capacity(self.input.len() * 2);

        for token in Tokenizer::new(self.input) {
            if let TokenKind::Invalid(c) = token.kind {
                return Err(ParseError::new(ParseErrorKind::UnknownToken(c), token.pos));
            }

            if let Some(prev) = tokens.last() {
                if prev.kind.ends_operand() && token.kind.starts_operand() {
                    tokens.push(Token::new(
                        TokenKind::Operator(OperatorKind::Concat),
                        (token.pos.0, token.pos.0),
                    ));
                }
            }

            tokens.push(token);
        }

        Ok(tokens)
    }
}

/// Converts an infix `pattern` into postfix notation.
pub fn parse(pattern: &str) -> ParseResult<String> {
    Parser::new(pattern).parse()
}

#[cfg(test)]
mod tests {
    use super::{error::ParseErrorKind, parse, Parser};
    use rstest::rstest;

    #[rstest]
    #[case("ab", "a.b")]
    #[case("a*b", "a*.b")]
    #[case("(a+b)c", "(a+b).c")]
    #[case("a(b)", "a.(b)")]
    #[case("ab*(c+d)", "a.b*.(c+d)")]
    #[case("a.b", "a.b")]
    #[case("(k+kkg+kk)*h*+kh*+kkh", "(k+k.k.g+k.k)*.h*+k.h*+k.k.h")]
    fn concatenation(#[case] pattern: &str, #[case] expected: &str) {
        assert_eq!(Parser::new(pattern).with_concatenation().unwrap(), expected);
    }

    #[rstest]
    #[case("a", "a")]
    #[case("ab", "ab.")]
    #[case("a+b", "ab+")]
    #[case("a+bc", "abc.+")]
    #[case("a+b.c", "abc.+")]
    #[case("ab+c", "ab.c+")]
    #[case("a*", "a*")]
    #[case("ab*", "ab*.")]
    #[case("a*b", "a*b.")]
    #[case("(a+b)*c", "ab+*c.")]
    #[case("abc", "ab.c.")]
    #[case("a+b+c", "ab+c+")]
    #[case("a**", "a**")]
    #[case("", "")]
    #[case("(k+kkg+kk)*h*+kh*+kkh", "kkk.g.+kk.+*h*.kh*.+kk.h.+")]
    fn postfix(#[case] pattern: &str, #[case] expected: &str) {
        assert_eq!(parse(pattern).unwrap(), expected);
    }

    #[rstest]
    #[case("a+)", ParseErrorKind::UnmatchedRightParen, (2, 3))]
    #[case(")", ParseErrorKind::UnmatchedRightParen, (0, 1))]
    #[case("(a", ParseErrorKind::UnmatchedLeftParen, (0, 1))]
    #[case("a#b", ParseErrorKind::UnknownToken('#'), (1, 2))]
    #[case("a|b", ParseErrorKind::UnknownToken('|'), (1, 2))]
    #[case("a b", ParseErrorKind::UnknownToken(' '), (1, 2))]
    fn errors(
        #[case] pattern: &str,
        #[case] kind: ParseErrorKind,
        #[case] pos: (usize, usize),
    ) {
        let err = parse(pattern).unwrap_err();
        assert_eq!(err.kind, kind);
        assert_eq!(err.pos, pos);
    }

    #[test]
    fn error_display() {
        let err = parse("a#b").unwrap_err();
        assert_eq!(err.to_string(), "[ERROR] (1, 2): unknown token `#`");
    }
}

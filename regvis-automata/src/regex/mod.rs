pub use self::parser::{
    error::{ParseError, ParseErrorKind, ParseResult},
    parse, Parser,
};

mod parser;
mod tokenizer;

//! Regular expressions to finite automata.
//!
//! A pattern over ASCII alphanumeric symbols with `+` (union), `*` (Kleene star), implicit
//! concatenation and parentheses is parsed into postfix notation, compiled into an NFA by
//! Thompson construction, determinized by subset construction and minimized by partition
//! refinement. Every stage can be simulated on a word and exported as a [`fsm::Graph`].

pub use error::Error;
pub use pipeline::{
    accepts, build, compile, compile_with_alphabet, determinize, minimize, parse, trace, Automata,
};

pub mod fsm;
pub mod pipeline;
pub mod regex;

mod error;

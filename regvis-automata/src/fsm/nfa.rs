pub use self::{
    compiler::build,
    error::{BuildError, BuildErrorKind, BuildResult},
    model::{Input, Nfa},
    sim::NfaSimulator,
};

mod compiler;
mod error;
mod graph;
mod model;
mod sim;

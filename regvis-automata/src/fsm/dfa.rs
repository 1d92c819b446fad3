pub use self::{
    minimize::minimize,
    model::{Dfa, MinDfa},
    sim::DfaSimulator,
    subset::determinize,
    trace::{Trace, TraceStep},
};

mod graph;
mod minimize;
mod model;
mod sim;
mod subset;
mod trace;

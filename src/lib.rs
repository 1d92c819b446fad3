//! Command line and export layer over [`regvis_automata`]: a [`Session`] compiling a pattern once
//! and answering per word queries, JSON payloads for verdicts and traces, and Graphviz export of
//! every stage.

pub use dot::to_dot;
pub use export::{export, ExportConfig};
pub use regvis_automata as automata;
pub use session::{Report, Session, Stages, TraceReport, Verdict};

mod dot;
mod export;
mod session;

pub use self::{
    alphabet::{Alphabet, InvalidSymbol},
    graph::{Edge, Graph},
    state::{StateId, StateSet},
    traits::{Simulatable, Simulate},
};

pub mod dfa;
pub mod nfa;

mod alphabet;
mod graph;
mod state;
mod traits;

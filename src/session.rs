use regvis_automata::{
    accepts, compile_with_alphabet,
    fsm::{dfa::Trace, Alphabet, Graph},
    regex::Parser,
    Automata, Error,
};
use serde::Serialize;

/// A compiled pattern, ready to answer queries about every stage.
#[derive(Debug, Clone)]
pub struct Session {
    pattern: String,
    concatenated: String,
    automata: Automata,
}

/// Acceptance of one word by each stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub word: String,
    pub nfa: bool,
    pub dfa: bool,
    pub mindfa: bool,
}

impl Verdict {
    /// Whether all stages gave the same answer.
    pub fn is_consistent(&self) -> bool {
        self.nfa == self.dfa && self.dfa == self.mindfa
    }
}

/// Exported graphs of all stages.
#[derive(Debug, Clone, Serialize)]
pub struct Stages {
    pub nfa: Graph,
    pub dfa: Graph,
    pub mindfa: Graph,
}

/// Trace of one word through the minimized DFA.
#[derive(Debug, Clone, Serialize)]
pub struct TraceReport {
    pub word: String,
    #[serde(flatten)]
    pub trace: Trace,
}

/// Verdicts, and optionally traces, for a list of words. Serializes to a single JSON object.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub verdicts: Vec<Verdict>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub traces: Option<Vec<TraceReport>>,
}

impl Session {
    /// Compiles `pattern` over the alphanumeric symbols it contains.
    pub fn new(pattern: &str) -> Result<Self, Error> {
        Self::with_alphabet(pattern, Alphabet::from_pattern(pattern))
    }

    /// Compiles `pattern` over an explicit `alphabet`.
    pub fn with_alphabet(pattern: &str, alphabet: Alphabet) -> Result<Self, Error> {
        let concatenated = Parser::new(pattern).with_concatenation()?;
        let automata = compile_with_alphabet(pattern, alphabet)?;

        Ok(Self {
            pattern: pattern.to_string(),
            concatenated,
            automata,
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The pattern with explicit `.` concatenation operators.
    pub fn concatenated(&self) -> &str {
        &self.concatenated
    }

    pub fn postfix(&self) -> &str {
        &self.automata.postfix
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.automata.alphabet
    }

    pub fn automata(&self) -> &Automata {
        &self.automata
    }

    pub fn test(&self, word: &str) -> Verdict {
        Verdict {
            word: word.to_string(),
            nfa: accepts(&self.automata.nfa, word),
            dfa: accepts(&self.automata.dfa, word),
            mindfa: accepts(&self.automata.min_dfa, word),
        }
    }

    pub fn trace(&self, word: &str) -> TraceReport {
        TraceReport {
            word: word.to_string(),
            trace: self.automata.min_dfa.trace(word),
        }
    }

    /// Tests every word, tracing them through the minimized DFA when `with_traces` is set.
    pub fn report<W: AsRef<str>>(&self, words: &[W], with_traces: bool) -> Report {
        Report {
            verdicts: words.iter().map(|w| self.test(w.as_ref())).collect(),
            traces: with_traces.then(|| words.iter().map(|w| self.trace(w.as_ref())).collect()),
        }
    }

    pub fn graphs(&self) -> Stages {
        Stages {
            nfa: self.automata.nfa.to_graph(),
            dfa: self.automata.dfa.to_graph(),
            mindfa: self.automata.min_dfa.to_graph(),
        }
    }
}

use super::{
    error::{BuildError, BuildErrorKind, BuildResult},
    model::{Fragment, Input, Nfa, NfaBuilder},
};

/// Postfix to NFA compiler (Thompson construction).
///
/// Evaluates the postfix stream with a stack of fragments. Every operator pops its operands and
/// pushes the composed fragment, so after a well-formed stream exactly one fragment is left.
pub(crate) struct Compiler {
    /// Arena of the NFA being compiled.
    nfa: NfaBuilder,
    stack: Vec<Fragment>,
}

impl TryFrom<&str> for Nfa {
    type Error = BuildError;

    fn try_from(postfix: &str) -> BuildResult<Self> {
        Compiler::new().compile(postfix)
    }
}

impl Compiler {
    pub(crate) fn new() -> Self {
        Self {
            nfa: NfaBuilder::new(),
            stack: Vec::new(),
        }
    }

    pub(crate) fn compile(mut self, postfix: &str) -> BuildResult<Nfa> {
        if postfix.is_empty() {
            return Err(BuildError::new(BuildErrorKind::EmptyPostfix, (0, 0)));
        }

        let mut len = 0;
        for (pos, token) in postfix.chars().enumerate() {
            let pos = (pos, pos + 1);
            let fragment = match token {
                c if c.is_ascii_alphanumeric() => self.symbol(c),
                '*' => {
                    let a = self.pop(token, pos)?;
                    self.star(a)
                }
                '.' => {
                    let b = self.pop(token, pos)?;
                    let a = self.pop(token, pos)?;
                    self.concat(a, b)
                }
                '+' => {
                    let b = self.pop(token, pos)?;
                    let a = self.pop(token, pos)?;
                    self.union(a, b)
                }
                c => return Err(BuildError::new(BuildErrorKind::UnknownToken(c), pos)),
            };
            self.stack.push(fragment);
            len += 1;
        }

        let fragment = match self.stack.as_slice() {
            [fragment] => *fragment,
            fragments => {
                return Err(BuildError::new(
                    BuildErrorKind::LeftoverFragments(fragments.len()),
                    (0, len),
                ))
            }
        };

        let nfa = self.nfa.build(fragment);
        log::debug!(
            "compiled postfix `{}` into an NFA with {} states",
            postfix,
            nfa.num_states()
        );
        Ok(nfa)
    }

    fn pop(&mut self, operator: char, pos: (usize, usize)) -> BuildResult<Fragment> {
        self.stack
            .pop()
            .ok_or_else(|| BuildError::new(BuildErrorKind::MissingOperand(operator), pos))
    }

    /// Two fresh states joined by a single `c` transition.
    fn symbol(&mut self, c: char) -> Fragment {
        let start = self.nfa.add_state();
        let accept = self.nfa.add_state();
        self.nfa.add_transition(start, accept, Input::Literal(c));

        Fragment { start, accept }
    }

    fn concat(&mut self, a: Fragment, b: Fragment) -> Fragment {
        self.nfa.add_transition(a.accept, b.start, Input::Eps);

        Fragment {
            start: a.start,
            accept: b.accept,
        }
    }

    fn union(&mut self, a: Fragment, b: Fragment) -> Fragment {
        let start = self.nfa.add_state();
        let accept = self.nfa.add_state();
        self.nfa.add_transition(start, a.start, Input::Eps);
        self.nfa.add_transition(start, b.start, Input::Eps);
        self.nfa.add_transition(a.accept, accept, Input::Eps);
        self.nfa.add_transition(b.accept, accept, Input::Eps);

        Fragment { start, accept }
    }

    /// The only construct introducing a cycle (`a.accept -> a.start`).
    fn star(&mut self, a: Fragment) -> Fragment {
        let start = self.nfa.add_state();
        let accept = self.nfa.add_state();
        self.nfa.add_transition(start, a.start, Input::Eps);
        self.nfa.add_transition(start, accept, Input::Eps);
        self.nfa.add_transition(a.accept, a.start, Input::Eps);
        self.nfa.add_transition(a.accept, accept, Input::Eps);

        Fragment { start, accept }
    }
}

/// Compiles a postfix token stream into an [`Nfa`].
pub fn build(postfix: &str) -> BuildResult<Nfa> {
    Nfa::try_from(postfix)
}

#[cfg(test)]
mod tests {
    use super::{super::error::BuildErrorKind, build};
    use crate::fsm::{nfa::Input, Simulatable};
    use rstest::rstest;

    #[test]
    fn symbol() {
        let nfa = build("a").unwrap();

        assert_eq!(nfa.num_states(), 2);
        assert_eq!(
            nfa.transitions().collect::<Vec<_>>(),
            vec![(0, Input::Literal('a'), 1)]
        );
        assert_eq!((nfa.start_state(), nfa.accept_state()), (0, 1));
    }

    #[test]
    fn star_shape() {
        let nfa = build("a*").unwrap();

        assert_eq!(nfa.num_states(), 4);
        assert_eq!((nfa.start_state(), nfa.accept_state()), (2, 3));
        assert_eq!(
            nfa.transitions().collect::<Vec<_>>(),
            vec![
                (0, Input::Literal('a'), 1),
                (1, Input::Eps, 0),
                (1, Input::Eps, 3),
                (2, Input::Eps, 0),
                (2, Input::Eps, 3),
            ]
        );
    }

    #[test]
    fn accept_state_has_no_outgoing_transitions() {
        let nfa = build("kkk.g.+kk.+*h*.kh*.+kk.h.+").unwrap();
        let accept = nfa.accept_state();

        assert!(nfa.transitions().all(|(from, _, _)| from != accept));
        assert_eq!(nfa.reachable_states().len(), nfa.num_states());
    }

    #[rstest]
    #[case("a*", &["", "a", "aa", "aaa"], &["b", "ab"])]
    #[case("ab.", &["ab"], &["", "a", "b", "ba", "abb"])]
    #[case("ab+", &["a", "b"], &["", "ab"])]
    #[case("abc.+", &["a", "bc"], &["ab", "c", ""])]
    fn accepts(#[case] postfix: &str, #[case] accepted: &[&str], #[case] rejected: &[&str]) {
        let nfa = build(postfix).unwrap();

        for word in accepted {
            assert!(nfa.accepts(word), "`{}` should accept `{}`", postfix, word);
        }
        for word in rejected {
            assert!(!nfa.accepts(word), "`{}` should reject `{}`", postfix, word);
        }
    }

    #[rstest]
    #[case("", BuildErrorKind::EmptyPostfix, (0, 0))]
    #[case("*", BuildErrorKind::MissingOperand('*'), (0, 1))]
    #[case("a.", BuildErrorKind::MissingOperand('.'), (1, 2))]
    #[case("a+", BuildErrorKind::MissingOperand('+'), (1, 2))]
    #[case("ab", BuildErrorKind::LeftoverFragments(2), (0, 2))]
    #[case("a(", BuildErrorKind::UnknownToken('('), (1, 2))]
    fn errors(#[case] postfix: &str, #[case] kind: BuildErrorKind, #[case] pos: (usize, usize)) {
        let err = build(postfix).unwrap_err();
        assert_eq!(err.kind, kind);
        assert_eq!(err.pos, pos);
    }
}

/// Whether compiling the postfix stream into an NFA succeeded.
pub type BuildResult<T> = core::result::Result<T, BuildError>;

/// Information about the error occurred while building the NFA.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildError {
    pub kind: BuildErrorKind,
    /// Start and end position in the postfix stream.
    pub pos: (usize, usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildErrorKind {
    /// Nothing to build.
    EmptyPostfix,
    /// The operator found fewer fragments on the stack than it takes.
    MissingOperand(char),
    /// More than one fragment remained after the whole stream was consumed.
    LeftoverFragments(usize),
    UnknownToken(char),
}

impl BuildError {
    pub(crate) fn new(kind: BuildErrorKind, pos: (usize, usize)) -> Self {
        Self { kind, pos }
    }
}

impl std::fmt::Display for BuildErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BuildErrorKind::*;
        match self {
            EmptyPostfix => write!(f, "expected at least one token to build from"),
            MissingOperand(op) => write!(f, "missing operand for operator `{}`", op),
            LeftoverFragments(n) => write!(f, "{} fragments left uncombined", n),
            UnknownToken(c) => write!(f, "unknown token `{}`", c),
        }
    }
}

impl std::fmt::Display for BuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[ERROR] ({}, {}): {}", self.pos.0, self.pos.1, self.kind)
    }
}

impl std::error::Error for BuildError {}

use std::{error::Error, fmt};

/// Error constructing a [Sentence](`super::Sentence`) in violation of its invariants
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvalidSentence {
    /// Token is empty or has characters a [Token](`super::Token`) does not admit
    InvalidToken(String),
    /// Connective applied to the wrong number of children
    InvalidChild {
        /// Children a compound sentence requires
        expected: usize,
        /// Children supplied
        found: usize,
    },
}

impl Error for InvalidSentence {}

impl fmt::Display for InvalidSentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidToken(token) => write!(f, "Invalid token {token:?}"),
            Self::InvalidChild { expected, found } => write!(
                f,
                "Compound sentence requires {expected} children, found {found}"
            ),
        }
    }
}

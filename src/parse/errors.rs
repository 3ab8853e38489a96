use std::{error::Error, fmt};

/// Why some text is not a sentence
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParseErrorReason {
    /// A parenthesis without its partner
    UnbalancedParens,
    /// Nothing but whitespace where a sentence should be
    EmptyExpression,
    /// A connective missing its left or right operand
    EmptyOperand,
    /// A character which is neither part of a token nor of the notation
    UnknownCharacter,
    /// Nesting beyond [`ParseConfig::max_depth`](super::ParseConfig::max_depth)
    TooDeep,
}

/// Error parsing text as a [Sentence](crate::sentence::Sentence)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ParseError {
    /// What went wrong
    pub reason: ParseErrorReason,
    /// Byte offset into the parsed text at which it went wrong
    pub offset: usize,
}

impl ParseError {
    pub(crate) fn new(reason: ParseErrorReason, offset: usize) -> Self {
        Self { reason, offset }
    }

    /// Move an error found in a slice of the input to its position in the whole input
    pub(crate) fn shifted(self, by: usize) -> Self {
        Self::new(self.reason, self.offset + by)
    }
}

impl Error for ParseError {}

impl fmt::Display for ParseErrorReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnbalancedParens => write!(f, "Unbalanced parentheses"),
            Self::EmptyExpression => write!(f, "Empty expression"),
            Self::EmptyOperand => write!(f, "Connective missing an operand"),
            Self::UnknownCharacter => write!(f, "Unknown character"),
            Self::TooDeep => write!(f, "Sentence nested too deeply"),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at byte {}", self.reason, self.offset)
    }
}

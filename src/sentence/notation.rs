// Printing is the inverse of `crate::parse`: every compound is wrapped in parentheses, so the parser never
// has to guess at grouping and `parse(&s.to_string())` rebuilds a sentence equal to `s`.

use super::types::{Connective, Node, Sentence, Token};

use std::fmt::{self, Write};

impl fmt::Display for Connective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(self.symbol())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negated() {
            f.write_char('~')?;
        }
        match self.node() {
            Node::Atomic(token) => write!(f, "{token}"),
            Node::Compound {
                connective,
                left,
                right,
            } => write!(f, "({left} {connective} {right})"),
        }
    }
}

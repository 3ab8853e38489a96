//! Sentences of propositional logic as expression trees
//!
//! A [Sentence] is either an atomic [Token] or a [Connective] applied to a left and a right child. Negation
//! is not a connective: every node, atomic or compound, carries its own negation flag.
//!
//! ```
//! use sentential::sentence::{Connective, Sentence};
//! use std::rc::Rc;
//!
//! let p = Rc::new(Sentence::atomic("p", false).unwrap());
//! let q = Rc::new(Sentence::atomic("q", true).unwrap());
//! let s = Sentence::compound(Connective::Conditional, p, q, false);
//!
//! assert_eq!(s.to_string(), "(p > ~q)");
//! ```

mod errors;
mod notation;
mod types;

#[cfg(any(test, feature = "with-proptest"))]
mod with_proptest;

pub use errors::InvalidSentence;
pub use types::{Connective, Node, Sentence, Token};

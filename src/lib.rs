//! Sentences of propositional logic: building them, reading them from text, and collecting them into sets
//! compared by structure rather than identity.
//!
//! <!-- `README.md` generated from `src/lib.rs` -->
//!
//! ```
//! use sentential::{parse::parse, rules, set::SentenceSet};
//!
//! let (sentence, nodes) = parse("(a & b) v ~(c > d)").unwrap();
//! assert_eq!(sentence.to_string(), "((a & b) v ~(c > d))");
//!
//! let (conjunction, _) = sentence.children().unwrap();
//! let mut conjuncts = SentenceSet::new();
//! rules::eliminate_conjunction(conjunction, &mut conjuncts).unwrap();
//!
//! assert_eq!(conjuncts.to_string(), "a\nb\n");
//! assert!(conjuncts.iter().all(|conjunct| nodes.contains(conjunct)));
//! ```
//!
//! # Modules
//!
//! * [`sentence`]: the expression tree, its construction, equality, and printing.
//! * [`set`]: insertion-ordered sets of sentences, deduplicated structurally.
//! * [`parse`]: recursive descent over the notation.
//! * [`rules`]: natural deduction rules as plain functions.
//! * [`derivation`]: assumptions, goals, and a pluggable proof search.
//!
//! # Features
//!
//! * `with-proptest`: exports `proptest` strategies generating [`Sentence`](sentence::Sentence)s and
//!   [`Token`](sentence::Token)s.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod derivation;
pub mod misc;
pub mod parse;
pub mod rules;
pub mod sentence;
pub mod set;

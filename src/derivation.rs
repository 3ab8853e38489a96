//! Derivations: a set of assumptions and a goal to be reached from them
//!
//! Proof search is left to implementations of [Solve]. [`ForwardChaining`] is a small one: it applies the
//! elimination rules of [`crate::rules`] to everything known until the goal turns up or nothing new follows.
//! It is sound but far from complete, as it never introduces connectives or reasons by cases.
//!
//! ```
//! use sentential::derivation::{Derivation, ForwardChaining, Solve};
//!
//! let derivation = Derivation::from_notation(&["p & q", "q > r"], "r").unwrap();
//! let steps = ForwardChaining::default().solve(&derivation).unwrap();
//!
//! assert_eq!(steps.to_string(), "p\nq\nr\n");
//! ```

use crate::{
    misc::log::targets,
    parse::{ParseError, Parser},
    rules::{self, Rule, RuleError},
    sentence::Sentence,
    set::SentenceSet,
};

use std::{error::Error, fmt, rc::Rc};

/// Rounds a [`ForwardChaining`] solver runs for by default
pub const DEFAULT_MAX_ROUNDS: usize = 64;

/// Assumptions together with a goal to derive from them
#[derive(Clone, Debug)]
pub struct Derivation {
    assumptions: SentenceSet,
    goal: Rc<Sentence>,
}

impl Derivation {
    /// A derivation of `goal` from `assumptions`
    #[must_use]
    pub fn new(assumptions: SentenceSet, goal: Rc<Sentence>) -> Self {
        Self { assumptions, goal }
    }

    /// Parse assumptions and goal from their notation
    ///
    /// Equal subtrees are shared across all of the parsed sentences.
    ///
    /// # Errors
    ///
    /// Returns the [`ParseError`] of the first text which is not a sentence.
    pub fn from_notation(assumptions: &[&str], goal: &str) -> Result<Self, ParseError> {
        let parser = Parser::new();
        let mut nodes = SentenceSet::new();

        let mut assumed = SentenceSet::new();
        for text in assumptions {
            assumed.insert(parser.parse_into(text, &mut nodes)?);
        }
        let goal = parser.parse_into(goal, &mut nodes)?;

        Ok(Self::new(assumed, goal))
    }

    /// Sentences assumed true
    #[must_use]
    pub fn assumptions(&self) -> &SentenceSet {
        &self.assumptions
    }

    /// Sentence to derive
    #[must_use]
    pub fn goal(&self) -> &Rc<Sentence> {
        &self.goal
    }

    /// Whether the goal is among the assumptions
    #[must_use]
    pub fn is_trivial(&self) -> bool {
        self.assumptions.contains(&self.goal)
    }
}

impl fmt::Display for Derivation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let assumptions: Vec<_> = self.assumptions.iter().map(ToString::to_string).collect();
        write!(f, "{} ⊢ {}", assumptions.join(", "), self.goal)
    }
}

/// Error returned when a solver finds no proof
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NotFound {
    /// Rounds of search made before giving up
    pub rounds: usize,
}

impl Error for NotFound {}

impl fmt::Display for NotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "No proof found after {} rounds", self.rounds)
    }
}

/// Proof search
pub trait Solve {
    /// Search for a proof of the goal of `derivation`
    ///
    /// On success, returns the sentences derived on the way to the goal in the order they were derived, ending
    /// with the goal. Assumptions are not repeated, so a trivial derivation has an empty proof.
    ///
    /// # Errors
    ///
    /// Returns [`NotFound`] if the search ends without reaching the goal.
    fn solve(&self, derivation: &Derivation) -> Result<SentenceSet, NotFound>;
}

/// Saturate the assumptions under conjunction and conditional elimination
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ForwardChaining {
    /// Rounds to run before giving up
    pub max_rounds: usize,
}

impl Default for ForwardChaining {
    fn default() -> Self {
        ForwardChaining {
            max_rounds: DEFAULT_MAX_ROUNDS,
        }
    }
}

impl ForwardChaining {
    /// Everything which follows from `known` by one elimination
    fn round(known: &SentenceSet) -> Result<SentenceSet, RuleError> {
        let mut derived = SentenceSet::new();
        for sentence in known {
            if Rule::ConjunctionElimination.applies_to(sentence) {
                rules::eliminate_conjunction(sentence, &mut derived)?;
            } else if Rule::ConditionalElimination.applies_to(sentence) {
                rules::eliminate_conditional(sentence, known, &mut derived)?;
            }
        }
        Ok(derived)
    }
}

impl Solve for ForwardChaining {
    fn solve(&self, derivation: &Derivation) -> Result<SentenceSet, NotFound> {
        let goal = derivation.goal();
        let mut known = derivation.assumptions().clone();
        let mut steps = SentenceSet::new();

        if derivation.is_trivial() {
            return Ok(steps);
        }

        for round in 0..self.max_rounds {
            let derived = Self::round(&known).map_err(|error| {
                log::error!(target: targets::DERIVATION, "{error}");
                NotFound { rounds: round }
            })?;

            let mut progress = false;
            for sentence in derived {
                if known.insert(Rc::clone(&sentence)) {
                    log::debug!(target: targets::DERIVATION, "Round {round}: {sentence}");
                    steps.insert(sentence);
                    progress = true;
                }
                if known.contains(goal) {
                    return Ok(steps);
                }
            }

            if !progress {
                log::debug!(target: targets::DERIVATION, "Saturated after {} rounds", round + 1);
                return Err(NotFound { rounds: round + 1 });
            }
        }

        Err(NotFound {
            rounds: self.max_rounds,
        })
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;

    fn solve(assumptions: &[&str], goal: &str) -> Result<SentenceSet, NotFound> {
        let derivation = Derivation::from_notation(assumptions, goal).unwrap();
        ForwardChaining::default().solve(&derivation)
    }

    #[test]
    fn derivation__from_notation() {
        let derivation = Derivation::from_notation(&["p & q", "p"], "q").unwrap();

        assert_eq!(derivation.assumptions().len(), 2);
        assert_eq!(derivation.goal().to_string(), "q");
        assert_eq!(derivation.to_string(), "(p & q), p ⊢ q");
        assert!(!derivation.is_trivial());
    }

    #[test]
    fn derivation__shares_nodes_across_sentences() {
        let derivation = Derivation::from_notation(&["p & q", "p"], "q").unwrap();
        let conjunction = derivation.assumptions().get(0).unwrap();
        let (left, right) = conjunction.children().unwrap();

        assert!(Rc::ptr_eq(left, derivation.assumptions().get(1).unwrap()));
        assert!(Rc::ptr_eq(right, derivation.goal()));
    }

    #[test]
    fn invalid_derivation__unparsable_goal() {
        let error = Derivation::from_notation(&["p"], "p &").unwrap_err();

        assert_eq!(error.reason, crate::parse::ParseErrorReason::EmptyOperand);
    }

    #[test]
    fn solve__trivial_derivation() {
        let steps = solve(&["p", "q"], "q").unwrap();

        assert!(steps.is_empty());
    }

    #[test]
    fn solve__conjunction_elimination() {
        let steps = solve(&["a & b"], "b").unwrap();

        assert_eq!(steps.to_string(), "a\nb\n");
    }

    #[test]
    fn solve__chained_conditionals() {
        let steps = solve(&["p", "p > q", "q > (r & s)"], "s").unwrap();

        assert_eq!(steps.to_string(), "q\n(r & s)\nr\ns\n");
    }

    #[test]
    fn solve__biconditional_from_consequent() {
        let steps = solve(&["a = b", "b"], "a").unwrap();

        assert_eq!(steps.to_string(), "a\n");
    }

    #[test]
    fn solve__not_found_when_saturated() {
        assert_eq!(solve(&["p > q"], "q"), Err(NotFound { rounds: 1 }));
        assert_eq!(solve(&["a v b"], "a"), Err(NotFound { rounds: 1 }));
    }

    #[test]
    fn solve__not_found_within_bound() {
        let assumptions = ["p", "p > q", "q > r", "r > s"];
        let derivation = Derivation::from_notation(&assumptions, "s").unwrap();

        assert_eq!(
            ForwardChaining { max_rounds: 2 }.solve(&derivation),
            Err(NotFound { rounds: 2 })
        );
        assert!(ForwardChaining { max_rounds: 3 }.solve(&derivation).is_ok());
    }

    #[test]
    fn not_found__display() {
        assert_eq!(
            NotFound { rounds: 3 }.to_string(),
            "No proof found after 3 rounds"
        );
    }
}

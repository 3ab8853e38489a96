//! Natural deduction rules over sentences and sentence sets
//!
//! Each rule is a stateless function. Eliminations take a sentence of the right shape and add what follows
//! from it to a destination set, introductions build a new sentence from existing ones. Sentences added to a
//! destination are shared with wherever they came from, never copied.
//!
//! A rule handed a sentence of the wrong shape returns [`RuleError::NotApplicable`] rather than quietly doing
//! nothing.

use crate::{
    misc::log::targets,
    sentence::{Connective, Sentence},
    set::SentenceSet,
};

use std::{error::Error, fmt, rc::Rc};

/// Rules of natural deduction provided by this module
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rule {
    /// From `a & b`, infer `a` and `b`
    ConjunctionElimination,
    /// From `a > b` and `a`, infer `b`; from `a = b` and either side, infer the other
    ConditionalElimination,
    /// From `a` and `b`, infer `a & b`
    ConjunctionIntroduction,
    /// From `a`, infer `a v b`
    DisjunctionIntroduction,
}

impl Rule {
    /// Whether `sentence` has the shape the rule requires of its premise
    ///
    /// Introductions apply to any sentence.
    #[must_use]
    pub fn applies_to(self, sentence: &Sentence) -> bool {
        match self {
            Self::ConjunctionElimination => {
                !sentence.is_negated() && sentence.connective() == Some(Connective::And)
            }
            Self::ConditionalElimination => {
                !sentence.is_negated()
                    && matches!(
                        sentence.connective(),
                        Some(Connective::Conditional | Connective::Biconditional)
                    )
            }
            Self::ConjunctionIntroduction | Self::DisjunctionIntroduction => true,
        }
    }

    fn premise(
        self,
        sentence: &Sentence,
    ) -> Result<(Connective, &Rc<Sentence>, &Rc<Sentence>), RuleError> {
        match (sentence.connective(), sentence.children()) {
            (Some(connective), Some((left, right))) if self.applies_to(sentence) => {
                Ok((connective, left, right))
            }
            _ => Err(RuleError::NotApplicable {
                rule: self,
                sentence: sentence.clone(),
            }),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConjunctionElimination => write!(f, "&E"),
            Self::ConditionalElimination => write!(f, ">E"),
            Self::ConjunctionIntroduction => write!(f, "&I"),
            Self::DisjunctionIntroduction => write!(f, "vI"),
        }
    }
}

/// Error applying a [Rule] to a sentence
#[derive(Clone, Debug, PartialEq)]
pub enum RuleError {
    /// The sentence does not have the shape the rule requires
    NotApplicable {
        /// Rule applied
        rule: Rule,
        /// Sentence it was applied to
        sentence: Sentence,
    },
}

impl Error for RuleError {}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotApplicable { rule, sentence } => {
                write!(f, "{rule} does not apply to {sentence}")
            }
        }
    }
}

/// Whether conditional elimination can be performed on `sentence` given `assumptions`
///
/// A conditional can be eliminated when its antecedent is assumed. A biconditional can be eliminated when
/// either side is assumed.
///
/// # Errors
///
/// Returns [`RuleError::NotApplicable`] unless `sentence` is an un-negated conditional or biconditional.
pub fn can_eliminate_conditional(
    sentence: &Sentence,
    assumptions: &SentenceSet,
) -> Result<bool, RuleError> {
    let (connective, antecedent, consequent) = Rule::ConditionalElimination.premise(sentence)?;

    Ok(assumptions.contains(antecedent)
        || (connective == Connective::Biconditional && assumptions.contains(consequent)))
}

/// Perform conditional elimination on `sentence`, adding whatever follows given `assumptions` to
/// `destination`
///
/// Returns whether anything followed.
///
/// # Errors
///
/// Returns [`RuleError::NotApplicable`] unless `sentence` is an un-negated conditional or biconditional.
pub fn eliminate_conditional(
    sentence: &Sentence,
    assumptions: &SentenceSet,
    destination: &mut SentenceSet,
) -> Result<bool, RuleError> {
    let (connective, antecedent, consequent) = Rule::ConditionalElimination.premise(sentence)?;
    let mut followed = false;

    if assumptions.contains(antecedent) {
        log::debug!(target: targets::RULES, "{} on {sentence} gives {consequent}", Rule::ConditionalElimination);
        destination.insert(Rc::clone(consequent));
        followed = true;
    }
    if connective == Connective::Biconditional && assumptions.contains(consequent) {
        log::debug!(target: targets::RULES, "{} on {sentence} gives {antecedent}", Rule::ConditionalElimination);
        destination.insert(Rc::clone(antecedent));
        followed = true;
    }

    Ok(followed)
}

/// Perform conjunction elimination on `source`, adding both conjuncts to `destination`, left first
///
/// Conjuncts already in `destination` are not added twice.
///
/// # Errors
///
/// Returns [`RuleError::NotApplicable`] unless `source` is an un-negated conjunction.
pub fn eliminate_conjunction(
    source: &Sentence,
    destination: &mut SentenceSet,
) -> Result<(), RuleError> {
    let (_, left, right) = Rule::ConjunctionElimination.premise(source)?;
    log::debug!(target: targets::RULES, "{} on {source}", Rule::ConjunctionElimination);

    destination.insert(Rc::clone(left));
    destination.insert(Rc::clone(right));
    Ok(())
}

/// Perform conjunction introduction, adding `(left & right)` to `destination`
///
/// Returns the member of `destination` equal to the conjunction.
pub fn introduce_conjunction(
    left: &Rc<Sentence>,
    right: &Rc<Sentence>,
    destination: &mut SentenceSet,
) -> Rc<Sentence> {
    introduce(
        Rule::ConjunctionIntroduction,
        Connective::And,
        left,
        right,
        destination,
    )
}

/// Perform disjunction introduction, adding `(sentence v other)` to `destination`
///
/// Returns the member of `destination` equal to the disjunction.
pub fn introduce_disjunction(
    sentence: &Rc<Sentence>,
    other: &Rc<Sentence>,
    destination: &mut SentenceSet,
) -> Rc<Sentence> {
    introduce(
        Rule::DisjunctionIntroduction,
        Connective::Or,
        sentence,
        other,
        destination,
    )
}

fn introduce(
    rule: Rule,
    connective: Connective,
    left: &Rc<Sentence>,
    right: &Rc<Sentence>,
    destination: &mut SentenceSet,
) -> Rc<Sentence> {
    let sentence = destination.intern(Sentence::compound(
        connective,
        Rc::clone(left),
        Rc::clone(right),
        false,
    ));
    log::debug!(target: targets::RULES, "{rule} gives {sentence}");
    sentence
}

use super::InvalidSentence;

use serde::{Deserialize, Serialize};
use std::{convert::TryFrom, rc::Rc};

/// Binary connective joining the two children of a compound [Sentence]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(
    any(test, feature = "with-proptest"),
    derive(proptest_derive::Arbitrary)
)]
pub enum Connective {
    /// Conjunction, written `&`
    And,
    /// Disjunction, written `v`
    Or,
    /// Material conditional, written `>`
    Conditional,
    /// Material biconditional, written `=`
    Biconditional,
}

impl Connective {
    /// Every connective, in notation order
    pub const ALL: [Self; 4] = [Self::And, Self::Or, Self::Conditional, Self::Biconditional];

    /// Character used for the connective in the notation
    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            Self::And => '&',
            Self::Or => 'v',
            Self::Conditional => '>',
            Self::Biconditional => '=',
        }
    }

    /// Inverse of [`Connective::symbol`]
    #[must_use]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.symbol() == symbol)
    }

    /// Apply to exactly two children to construct a compound [Sentence]
    ///
    /// # Errors
    ///
    /// Returns [`InvalidSentence::InvalidChild`] if `children` does not hold exactly a left and a right child.
    pub fn apply(
        self,
        children: &[Rc<Sentence>],
        negated: bool,
    ) -> Result<Sentence, InvalidSentence> {
        match children {
            [left, right] => Ok(Sentence::compound(
                self,
                Rc::clone(left),
                Rc::clone(right),
                negated,
            )),
            _ => Err(InvalidSentence::InvalidChild {
                expected: 2,
                found: children.len(),
            }),
        }
    }
}

/// Name of a propositional variable
///
/// A token is a non-empty run of alphanumeric characters other than `v`, which the notation reserves for
/// disjunction.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Token(String);

impl Token {
    /// Validate `token` as the name of a propositional variable
    ///
    /// # Errors
    ///
    /// Returns [`InvalidSentence::InvalidToken`] if `token` is empty or has a character [`Token::admits`] rejects.
    pub fn new(token: impl Into<String>) -> Result<Self, InvalidSentence> {
        let token = token.into();
        if !token.is_empty() && token.chars().all(Self::admits) {
            Ok(Self(token))
        } else {
            Err(InvalidSentence::InvalidToken(token))
        }
    }

    /// Whether `c` may appear in a token
    #[must_use]
    pub fn admits(c: char) -> bool {
        c.is_alphanumeric() && Connective::from_symbol(c).is_none()
    }

    /// Borrow the token text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Token {
    type Error = InvalidSentence;

    fn try_from(token: String) -> Result<Self, Self::Error> {
        Self::new(token)
    }
}

impl From<Token> for String {
    fn from(token: Token) -> Self {
        token.0
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Shape of a [Sentence]
#[derive(Clone, Debug, Eq, Serialize, Deserialize)]
pub enum Node {
    /// Propositional variable
    Atomic(Token),
    /// Connective applied to a left and a right child
    Compound {
        /// Main connective
        connective: Connective,
        /// Left child, the antecedent of a conditional
        left: Rc<Sentence>,
        /// Right child, the consequent of a conditional
        right: Rc<Sentence>,
    },
}

/// Sentence of propositional logic, immutable once built
///
/// Children are reference counted so one child may be shared between several parents, or between several
/// [`SentenceSet`](crate::set::SentenceSet)s, and is released once its last holder is dropped.
///
/// Equality is structural: two sentences are equal when they have the same shape, the same tokens and
/// connectives, and the same negation flags at every node, regardless of whether any node is shared.
#[derive(Clone, Debug, Eq, Serialize, Deserialize)]
pub struct Sentence {
    node: Node,
    negated: bool,
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Atomic(a), Self::Atomic(b)) => a == b,
            (
                Self::Compound {
                    connective,
                    left,
                    right,
                },
                Self::Compound {
                    connective: other_connective,
                    left: other_left,
                    right: other_right,
                },
            ) => {
                connective == other_connective
                    && same_child(left, other_left)
                    && same_child(right, other_right)
            }
            _ => false,
        }
    }
}

fn same_child(a: &Rc<Sentence>, b: &Rc<Sentence>) -> bool {
    Rc::ptr_eq(a, b) || **a == **b
}

impl PartialEq for Sentence {
    fn eq(&self, other: &Self) -> bool {
        self.negated == other.negated && self.node == other.node
    }
}

impl Sentence {
    /// Construct an atomic sentence from a token
    ///
    /// # Errors
    ///
    /// Returns [`InvalidSentence::InvalidToken`] if `token` is not a valid [Token].
    pub fn atomic(token: impl Into<String>, negated: bool) -> Result<Self, InvalidSentence> {
        Ok(Self::from_token(Token::new(token)?, negated))
    }

    /// Construct an atomic sentence from an already validated [Token]
    #[must_use]
    pub fn from_token(token: Token, negated: bool) -> Self {
        Self {
            node: Node::Atomic(token),
            negated,
        }
    }

    /// Construct a compound sentence, sharing `left` and `right` rather than copying them
    #[must_use]
    pub fn compound(
        connective: Connective,
        left: Rc<Sentence>,
        right: Rc<Sentence>,
        negated: bool,
    ) -> Self {
        Self {
            node: Node::Compound {
                connective,
                left,
                right,
            },
            negated,
        }
    }

    /// Shape of the sentence
    #[must_use]
    pub fn node(&self) -> &Node {
        &self.node
    }

    /// Whether the negation flag is set on this node
    #[must_use]
    pub fn is_negated(&self) -> bool {
        self.negated
    }

    /// Whether the sentence is a propositional variable
    #[must_use]
    pub fn is_atomic(&self) -> bool {
        matches!(self.node, Node::Atomic(_))
    }

    /// Whether the sentence is a connective applied to two children
    #[must_use]
    pub fn is_compound(&self) -> bool {
        !self.is_atomic()
    }

    /// Token of an atomic sentence
    #[must_use]
    pub fn token(&self) -> Option<&Token> {
        match &self.node {
            Node::Atomic(token) => Some(token),
            Node::Compound { .. } => None,
        }
    }

    /// Main connective of a compound sentence
    #[must_use]
    pub fn connective(&self) -> Option<Connective> {
        match &self.node {
            Node::Atomic(_) => None,
            Node::Compound { connective, .. } => Some(*connective),
        }
    }

    /// Left and right children of a compound sentence
    #[must_use]
    pub fn children(&self) -> Option<(&Rc<Sentence>, &Rc<Sentence>)> {
        match &self.node {
            Node::Atomic(_) => None,
            Node::Compound { left, right, .. } => Some((left, right)),
        }
    }

    /// Copy of the sentence with the negation flag flipped
    ///
    /// The copy shares its children with `self`.
    #[must_use]
    pub fn negate(&self) -> Self {
        self.clone().with_negation(!self.negated)
    }

    /// Replace the negation flag
    #[must_use]
    pub fn with_negation(mut self, negated: bool) -> Self {
        self.negated = negated;
        self
    }

    /// Number of connectives on the longest path from this node to an atomic sentence
    #[must_use]
    pub fn depth(&self) -> usize {
        match &self.node {
            Node::Atomic(_) => 0,
            Node::Compound { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    /// Distinct tokens in order of first occurrence, reading left to right
    #[must_use]
    pub fn atoms(&self) -> Vec<&Token> {
        let mut atoms = Vec::new();
        self.collect_atoms(&mut atoms);
        atoms
    }

    fn collect_atoms<'a>(&'a self, atoms: &mut Vec<&'a Token>) {
        match &self.node {
            Node::Atomic(token) => {
                if !atoms.contains(&token) {
                    atoms.push(token);
                }
            }
            Node::Compound { left, right, .. } => {
                left.collect_atoms(atoms);
                right.collect_atoms(atoms);
            }
        }
    }
}

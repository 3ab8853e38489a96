//! Insertion-ordered sets of sentences, deduplicated by structural equality
//!
//! A [`SentenceSet`] is the owner of every node built during one parse or one derivation. Members are
//! reference counted, so a sentence inserted into a second set is shared with the first rather than copied,
//! and dropping a set releases each of its references exactly once.

use crate::{misc::log::targets, sentence::Sentence};

use serde::{Deserialize, Serialize};
use std::{fmt, iter::FromIterator, ptr, rc::Rc, slice};

/// Insertion-ordered collection of [Sentence]s in which no two members are structurally equal
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Rc<Sentence>>", into = "Vec<Rc<Sentence>>")]
pub struct SentenceSet {
    members: Vec<Rc<Sentence>>,
}

impl SentenceSet {
    /// An empty set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of members
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the set has no members
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Append `sentence` unless a structurally equal member is present
    ///
    /// Returns whether the set grew.
    pub fn insert(&mut self, sentence: Rc<Sentence>) -> bool {
        if self.contains(&sentence) {
            return false;
        }
        log::trace!(target: targets::SET, "Inserted {sentence} at {}", self.members.len());
        self.members.push(sentence);
        true
    }

    /// The member structurally equal to `sentence`, inserting `sentence` first if there is none
    pub fn intern(&mut self, sentence: Sentence) -> Rc<Sentence> {
        if let Some(member) = self.find(&sentence) {
            return Rc::clone(member);
        }
        let sentence = Rc::new(sentence);
        self.insert(Rc::clone(&sentence));
        sentence
    }

    /// Whether `sentence` is a member, either the very same node or one structurally equal to it
    #[must_use]
    pub fn contains(&self, sentence: &Sentence) -> bool {
        self.find(sentence).is_some()
    }

    /// Index of the member equal to `sentence`, in insertion order
    #[must_use]
    pub fn position(&self, sentence: &Sentence) -> Option<usize> {
        self.members
            .iter()
            .position(|member| ptr::eq(member.as_ref(), sentence) || **member == *sentence)
    }

    /// Member at `index`, in insertion order
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Rc<Sentence>> {
        self.members.get(index)
    }

    /// Members in insertion order
    pub fn iter(&self) -> slice::Iter<'_, Rc<Sentence>> {
        self.members.iter()
    }

    /// Drop every member inserted after the first `len`
    pub(crate) fn truncate(&mut self, len: usize) {
        if len < self.members.len() {
            log::trace!(target: targets::SET, "Discarding {} members", self.members.len() - len);
            self.members.truncate(len);
        }
    }

    fn find(&self, sentence: &Sentence) -> Option<&Rc<Sentence>> {
        self.position(sentence).map(|index| &self.members[index])
    }
}

impl<'a> IntoIterator for &'a SentenceSet {
    type Item = &'a Rc<Sentence>;
    type IntoIter = slice::Iter<'a, Rc<Sentence>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for SentenceSet {
    type Item = Rc<Sentence>;
    type IntoIter = std::vec::IntoIter<Rc<Sentence>>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.into_iter()
    }
}

impl Extend<Rc<Sentence>> for SentenceSet {
    fn extend<I: IntoIterator<Item = Rc<Sentence>>>(&mut self, sentences: I) {
        for sentence in sentences {
            self.insert(sentence);
        }
    }
}

impl FromIterator<Rc<Sentence>> for SentenceSet {
    fn from_iter<I: IntoIterator<Item = Rc<Sentence>>>(sentences: I) -> Self {
        let mut set = Self::new();
        set.extend(sentences);
        set
    }
}

impl From<Vec<Rc<Sentence>>> for SentenceSet {
    fn from(sentences: Vec<Rc<Sentence>>) -> Self {
        sentences.into_iter().collect()
    }
}

impl From<SentenceSet> for Vec<Rc<Sentence>> {
    fn from(set: SentenceSet) -> Self {
        set.members
    }
}

impl fmt::Display for SentenceSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for member in &self.members {
            writeln!(f, "{member}")?;
        }
        Ok(())
    }
}

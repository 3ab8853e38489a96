use crate::sentence::Sentence;

/// Depth of nesting permitted by [`ParseConfig::default`]
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// How a `~` combines with a negation already present on the sentence it prefixes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Negation {
    /// Each `~` flips the flag, so `~~p` reads as `p`
    #[default]
    Toggle,
    /// Any number of `~` sets the flag, so `~~p` reads as `~p`
    Set,
}

impl Negation {
    /// Apply one `~` to `sentence`
    #[must_use]
    pub fn apply(self, sentence: Sentence) -> Sentence {
        let negated = match self {
            Self::Toggle => !sentence.is_negated(),
            Self::Set => true,
        };
        sentence.with_negation(negated)
    }
}

/// Configuration of a [Parser](super::Parser)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseConfig {
    /// Reading of repeated negation
    pub negation: Negation,

    /// Greatest nesting of parentheses, negations, and connectives before parsing gives up with
    /// [`ParseErrorReason::TooDeep`](super::ParseErrorReason::TooDeep)
    pub max_depth: usize,
}

impl Default for ParseConfig {
    fn default() -> Self {
        ParseConfig {
            negation: Negation::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

//! Parsing sentences from their textual notation
//!
//! ```text
//! sentence   := '~'? ( atom | '(' sentence ')' | sentence op sentence )
//! atom       := one-or-more alphanumeric characters
//! op         := '&' | 'v' | '>' | '='
//! ```
//!
//! There is no precedence among connectives. The main connective of a sentence is the first connective
//! outside every pair of parentheses, so `a & b v c` reads as `(a & (b v c))` and any other grouping has to
//! be written out. A `~` prefixes whatever sentence follows it when that sentence has no main connective of
//! its own: `~a & b` is `(~a & b)` while `~(a & b)` negates the conjunction.
//!
//! Every node of the parsed tree is registered in a [`SentenceSet`], children before their parents, and
//! structurally equal subtrees are shared rather than duplicated.
//!
//! ```
//! use sentential::parse::parse;
//!
//! let (sentence, nodes) = parse("(a & b) v ~(c > d)").unwrap();
//!
//! assert_eq!(sentence.to_string(), "((a & b) v ~(c > d))");
//! assert_eq!(nodes.len(), 7);
//! ```

mod config;
mod errors;
mod scan;

pub use config::{Negation, ParseConfig, DEFAULT_MAX_DEPTH};
pub use errors::{ParseError, ParseErrorReason};
pub use scan::{main_connective, matching_paren};

use crate::{
    misc::log::targets,
    sentence::{Connective, Sentence, Token},
    set::SentenceSet,
};

use std::rc::Rc;

/// Parse `text` with the default [`ParseConfig`]
///
/// Returns the root of the sentence together with the set owning every node of it.
///
/// # Errors
///
/// Returns a [`ParseError`] if `text` is not a sentence. Nothing partially built is returned.
pub fn parse(text: &str) -> Result<(Rc<Sentence>, SentenceSet), ParseError> {
    Parser::default().parse(text)
}

/// Parse `text` with the default [`ParseConfig`], registering its nodes in `set`
///
/// # Errors
///
/// Returns a [`ParseError`] if `text` is not a sentence, in which case `set` is left as it was.
pub fn parse_into(text: &str, set: &mut SentenceSet) -> Result<Rc<Sentence>, ParseError> {
    Parser::default().parse_into(text, set)
}

/// Recursive descent parser for the sentence notation
#[derive(Clone, Debug, Default)]
pub struct Parser {
    config: ParseConfig,
}

impl Parser {
    /// Parser with the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parser with the given configuration
    #[must_use]
    pub fn with_config(config: ParseConfig) -> Self {
        Self { config }
    }

    /// Configuration of the parser
    #[must_use]
    pub fn config(&self) -> &ParseConfig {
        &self.config
    }

    /// Parse `text`, returning its root together with a fresh set owning every node of it
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if `text` is not a sentence.
    pub fn parse(&self, text: &str) -> Result<(Rc<Sentence>, SentenceSet), ParseError> {
        let mut set = SentenceSet::new();
        let root = self.parse_into(text, &mut set)?;
        Ok((root, set))
    }

    /// Parse `text`, registering each of its nodes in `set`
    ///
    /// Nodes equal to members already in `set` are shared with those members.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if `text` is not a sentence, after removing anything the failed parse added to
    /// `set`.
    pub fn parse_into(
        &self,
        text: &str,
        set: &mut SentenceSet,
    ) -> Result<Rc<Sentence>, ParseError> {
        let checkpoint = set.len();
        let mut descent = Descent {
            config: &self.config,
            set: &mut *set,
            depth: 0,
        };

        match descent.sentence(text, 0) {
            Ok(root) => Ok(descent.set.intern(root)),
            Err(error) => {
                log::debug!(target: targets::PARSE, "Failed to parse {text:?}: {error}");
                set.truncate(checkpoint);
                Err(error)
            }
        }
    }
}

/// State of one call to [`Parser::parse_into`]
///
/// Each step returns the sentence it built without registering it, and a compound registers its children only
/// once both have parsed.
struct Descent<'p> {
    config: &'p ParseConfig,
    set: &'p mut SentenceSet,
    depth: usize,
}

impl Descent<'_> {
    /// `offset` is the position of `text` within the whole input
    fn sentence(&mut self, text: &str, offset: usize) -> Result<Sentence, ParseError> {
        if self.depth == self.config.max_depth {
            return Err(ParseError::new(ParseErrorReason::TooDeep, offset));
        }
        self.depth += 1;
        let sentence = self.trimmed(text, offset);
        self.depth -= 1;
        sentence
    }

    fn trimmed(&mut self, text: &str, offset: usize) -> Result<Sentence, ParseError> {
        let offset = offset + (text.len() - text.trim_start().len());
        let text = text.trim();
        if text.is_empty() {
            return Err(ParseError::new(ParseErrorReason::EmptyExpression, offset));
        }
        log::trace!(target: targets::PARSE, "Parsing {text:?} at {offset}");

        if text.starts_with('(') {
            let close = matching_paren(text)
                .ok_or_else(|| ParseError::new(ParseErrorReason::UnbalancedParens, offset))?;
            if close == text.len() - 1 {
                return self.sentence(&text[1..close], offset + 1);
            }
        }

        match main_connective(text).map_err(|error| error.shifted(offset))? {
            Some((index, connective)) => self.compound(text, offset, index, connective),
            None => match text.strip_prefix('~') {
                Some(rest) => {
                    let sentence = self.sentence(rest, offset + 1)?;
                    Ok(self.config.negation.apply(sentence))
                }
                None => atomic(text, offset),
            },
        }
    }

    fn compound(
        &mut self,
        text: &str,
        offset: usize,
        index: usize,
        connective: Connective,
    ) -> Result<Sentence, ParseError> {
        let (left, right) = (&text[..index], &text[index + 1..]);
        if left.trim().is_empty() {
            return Err(ParseError::new(ParseErrorReason::EmptyOperand, offset));
        }
        if right.trim().is_empty() {
            return Err(ParseError::new(
                ParseErrorReason::EmptyOperand,
                offset + index + 1,
            ));
        }

        let left = self.sentence(left, offset)?;
        let right = self.sentence(right, offset + index + 1)?;

        let left = self.set.intern(left);
        let right = self.set.intern(right);
        Ok(Sentence::compound(connective, left, right, false))
    }
}

fn atomic(text: &str, offset: usize) -> Result<Sentence, ParseError> {
    if let Some((index, _)) = text.char_indices().find(|(_, c)| !Token::admits(*c)) {
        return Err(ParseError::new(
            ParseErrorReason::UnknownCharacter,
            offset + index,
        ));
    }
    match Token::new(text) {
        Ok(token) => Ok(Sentence::from_token(token, false)),
        Err(_) => Err(ParseError::new(ParseErrorReason::EmptyExpression, offset)),
    }
}

#[cfg(test)]
mod tests;

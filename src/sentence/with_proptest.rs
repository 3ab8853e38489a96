use super::*;

use proptest::prelude::*;
use std::rc::Rc;

impl Token {
    /// Generate a [Token] the notation can spell
    pub fn arb_token() -> impl Strategy<Value = Self> {
        "[a-uw-zA-Z0-9]{1,3}"
            .prop_map(|t| Token::new(t).expect("Generated tokens avoid reserved characters"))
    }
}

impl Sentence {
    /// Generate a [Sentence] with `depth` as an upper-bound depth
    pub fn arb_sentence(depth: u32) -> impl Strategy<Value = Self> {
        let atomic = (Token::arb_token(), any::<bool>())
            .prop_map(|(token, negated)| Sentence::from_token(token, negated));

        atomic.prop_recursive(depth, 64, 2, |inner| {
            (any::<Connective>(), inner.clone(), inner, any::<bool>()).prop_map(
                |(connective, left, right, negated)| {
                    Sentence::compound(connective, Rc::new(left), Rc::new(right), negated)
                },
            )
        })
    }

    /// Generate a [Sentence] whose children are all the same shared node
    ///
    /// Exercises equality over trees that are not strict hierarchies.
    pub fn arb_shared(depth: u32) -> impl Strategy<Value = Self> {
        let child = Self::arb_sentence(depth).prop_map(Rc::new);
        (child, any::<Connective>(), any::<bool>()).prop_map(|(child, connective, negated)| {
            Sentence::compound(connective, Rc::clone(&child), child, negated)
        })
    }
}

use super::{ParseError, ParseErrorReason};
use crate::sentence::Connective;

/// Locate the main connective of `text`: the first connective outside every pair of parentheses
///
/// Returns the byte index of the connective alongside it, or `None` if every connective is enclosed (or there
/// are none).
///
/// # Errors
///
/// Returns [`ParseErrorReason::UnbalancedParens`] if a `)` closes nothing or a `(` is never closed. The offset
/// is relative to `text`.
pub fn main_connective(text: &str) -> Result<Option<(usize, Connective)>, ParseError> {
    let mut depth = 0_usize;
    let mut main = None;

    for (index, c) in text.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| ParseError::new(ParseErrorReason::UnbalancedParens, index))?;
            }
            _ if depth == 0 && main.is_none() => {
                main = Connective::from_symbol(c).map(|connective| (index, connective));
            }
            _ => {}
        }
    }

    if depth == 0 {
        Ok(main)
    } else {
        Err(ParseError::new(
            ParseErrorReason::UnbalancedParens,
            text.len(),
        ))
    }
}

/// Byte index of the `)` partnering the `(` which opens `text`
///
/// Returns `None` if `text` does not open with `(` or the parenthesis is never closed.
#[must_use]
pub fn matching_paren(text: &str) -> Option<usize> {
    if !text.starts_with('(') {
        return None;
    }

    let mut depth = 0_usize;
    for (index, c) in text.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(index);
                }
            }
            _ => {}
        }
    }
    None
}

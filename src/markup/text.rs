//! Text significance filter.

use crate::ir::Op;

/// Whether a text node carries printable content.
///
/// Text made only of whitespace is layout between tags and is dropped.
/// Anything else is printed verbatim, leading and trailing whitespace
/// included, so `<bold>  hi  </bold>` keeps its padding.
pub fn is_relevant(content: &str) -> bool {
    !content.chars().all(char::is_whitespace)
}

/// The op for a text node, if it is relevant.
pub fn filter(content: &str) -> Option<Op> {
    is_relevant(content).then(|| Op::Write(content.to_string()))
}

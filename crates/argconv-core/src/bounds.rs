//! End-of-run finders for list and rooted paths
//!
//! Both take the tentative exclusive end of a path run and return the
//! adjusted one, updating the tracked quote state when they stop on the
//! closing quote.

use crate::scan::QuoteState;

/// End of a POSIX path list.
///
/// Advances `to` until the input ends or the open quote closes. Stopping
/// on the quote clears the state. The list converter splits elements
/// inside the returned bound.
pub fn find_end_of_posix_list(src: &[u8], to: usize, quote: &mut QuoteState) -> usize {
    let mut to = to.min(src.len());
    while to < src.len() && !quote.closes(src[to]) {
        to += 1;
    }
    if to < src.len() {
        *quote = QuoteState::None;
    }
    to
}

/// End of a rooted path.
///
/// A parent reference (`/..`) inside `[from, to)` ends the path just
/// before its slash. Otherwise `to` advances until an unquoted space, the
/// closing quote (which clears the state), or a `/` that follows a space
/// (the space starts a new token, so the end backs up onto it).
pub fn find_end_of_rooted_path(
    src: &[u8],
    from: usize,
    to: usize,
    quote: &mut QuoteState,
) -> usize {
    let limit = to.min(src.len());
    for it in from..limit {
        if src[it] == b'.' && src.get(it + 1) == Some(&b'.') && it > 0 && src[it - 1] == b'/' {
            return (it - 1).max(from);
        }
    }

    let mut to = limit;
    while to < src.len() {
        let b = src[to];
        if !quote.is_open() && b == b' ' {
            return to;
        }
        if quote.closes(b) {
            *quote = QuoteState::None;
            return to;
        }
        if b == b'/' && to > 0 && src[to - 1] == b' ' {
            return (to - 1).max(from);
        }
        to += 1;
    }
    to
}

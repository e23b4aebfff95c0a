//! Positional reasoning over raw token and trivia boundaries.
//!
//! Spacing rules all answer the same four questions about a token:
//! does it start its line, is whitespace touching its left edge, does
//! anything trail it, and does its line end right after it. The
//! helpers here answer them from the token's own trivia and at most
//! one neighbor, so every rule built on them stays stateless.

use style_lint_syntax::{Token, TriviaKind};

/// Returns true if `token` starts its line.
///
/// A token starts its line when it sits at the very start of the
/// source, when its leading trivia contains a line break (the trivia
/// reaches back across a line start), or when it has no leading trivia
/// and the previous token's trailing trivia ends the line (source
/// column 0). Indentation whitespace alone does not start a line: a
/// token indented after a line break is *preceded* by that whitespace,
/// not first in line.
#[must_use]
pub fn is_first_in_line(token: Token<'_>) -> bool {
    if token.span().start == 0 {
        return true;
    }
    if token
        .leading_trivia()
        .any(|trivia| trivia.kind() == TriviaKind::EndOfLine)
    {
        return true;
    }
    if !token.has_leading_trivia() {
        return match token.prev_token() {
            None => true,
            Some(prev) => prev
                .trailing_trivia()
                .last()
                .is_some_and(|trivia| trivia.kind() == TriviaKind::EndOfLine),
        };
    }
    false
}

/// Returns true if the trivia item touching the token's left edge is
/// non-empty whitespace.
///
/// The adjacent item is the last of the token's leading trivia, or the
/// previous token's last trailing trivia when the leading list is
/// empty.
#[must_use]
pub fn is_preceded_by_whitespace(token: Token<'_>) -> bool {
    let adjacent = token.leading_trivia().last().or_else(|| {
        token
            .prev_token()
            .and_then(|prev| prev.trailing_trivia().last())
    });
    adjacent.is_some_and(|trivia| {
        trivia.kind() == TriviaKind::Whitespace && !trivia.span().is_empty()
    })
}

/// Returns true if the token's line ends within its trailing trivia.
#[must_use]
pub fn is_last_in_line(token: Token<'_>) -> bool {
    token
        .trailing_trivia()
        .any(|trivia| trivia.kind() == TriviaKind::EndOfLine)
}

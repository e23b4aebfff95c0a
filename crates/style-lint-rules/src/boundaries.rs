//! Ownership boundaries between rules.
//!
//! When one rule intentionally skips a case that a sibling rule owns,
//! both sides must agree on where the boundary lies. The rules never
//! communicate at runtime, so the boundary is encoded here as shared
//! predicates each rule tests against, not as an assumption about
//! dispatch order.

use style_lint_syntax::{NodeKind, Token, TokenKind};

/// Returns true for an open bracket that introduces an attribute list.
///
/// Such brackets belong to [`AttributeBracketSpacing`]; the general
/// bracket rule skips them so the same token is never reported twice.
/// A token is in exactly one of the two categories, decided by its
/// structural parent.
///
/// [`AttributeBracketSpacing`]: crate::AttributeBracketSpacing
#[must_use]
pub fn is_attribute_open_bracket(token: Token<'_>) -> bool {
    token.kind() == TokenKind::OpenBracket && token.parent().kind() == NodeKind::AttributeList
}

/// Returns true for a token whose right-hand spacing is owned by the
/// keyword spacing rules rather than the bracket rule.
///
/// `new[] { ... }` array creations require a space after `new`; a
/// bracket preceded by that space must not be reported as incorrectly
/// spaced on its left.
#[must_use]
pub fn keyword_owns_left_spacing(prev: Token<'_>) -> bool {
    prev.kind() == TokenKind::Keyword && prev.text() == "new"
}

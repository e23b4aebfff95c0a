//! Rule forbidding spaces adjacent to opening square brackets.
//!
//! # Rationale
//!
//! An opening square bracket in an element access or array type reads
//! as part of the expression it opens; detaching it with whitespace
//! (`x [i]`, `x[ i]`) breaks that visual unit. The bracket must be
//! flush against its neighbors on both sides, except where a line
//! break legitimately intervenes.
//!
//! # Boundaries
//!
//! - Attribute-list brackets are owned by
//!   [`AttributeBracketSpacing`](crate::AttributeBracketSpacing) and
//!   skipped here.
//! - The space after the `new` keyword in `new[] { ... }` is owned by
//!   the keyword spacing rules; it never produces a left-side report
//!   from this rule.

use crate::{adjacency, boundaries};
use style_lint_core::{
    AnalysisContext, DiagnosticSink, Rule, RuleDescriptor, Severity, Subscriptions,
};
use style_lint_syntax::{Token, TokenKind};

/// Rule code for bracket-spacing.
pub const CODE: &str = "SL001";

/// Rule name for bracket-spacing.
pub const NAME: &str = "bracket-spacing";

static DESCRIPTOR: RuleDescriptor = RuleDescriptor {
    code: CODE,
    name: NAME,
    title: "Opening square brackets must be spaced correctly",
    category: "spacing",
    severity: Severity::Warning,
    help_uri: "https://style-lint.dev/rules/SL001",
    message_template: "opening square bracket should not be {0} by a space",
};

/// Forbids whitespace touching an opening square bracket.
///
/// The left- and right-hand checks are independent; a bracket spaced
/// on both sides is reported twice, once with `preceded` and once with
/// `followed`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BracketSpacing;

impl BracketSpacing {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for BracketSpacing {
    fn descriptor(&self) -> &'static RuleDescriptor {
        &DESCRIPTOR
    }

    fn subscriptions(&self) -> Subscriptions {
        Subscriptions::new().tokens(&[TokenKind::OpenBracket])
    }

    fn check_token(&self, token: Token<'_>, _ctx: &AnalysisContext<'_>, sink: &mut DiagnosticSink) {
        debug_assert!(
            token.kind() == TokenKind::OpenBracket,
            "bracket-spacing received a {:?} token",
            token.kind()
        );

        if boundaries::is_attribute_open_bracket(token) {
            return;
        }

        if !adjacency::is_first_in_line(token) && adjacency::is_preceded_by_whitespace(token) {
            let owned_elsewhere = token
                .prev_token()
                .is_some_and(boundaries::keyword_owns_left_spacing);
            if owned_elsewhere {
                tracing::trace!(
                    span = %token.span(),
                    "left-side space after `new` left to the keyword spacing rule"
                );
            } else {
                sink.report(self.descriptor(), token.span(), &["preceded"]);
            }
        }

        if token.has_trailing_trivia() && !adjacency::is_last_in_line(token) {
            sink.report(self.descriptor(), token.span(), &["followed"]);
        }
    }
}

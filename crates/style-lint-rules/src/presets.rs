//! Built-in rule sets.

use crate::{AttributeBracketSpacing, BracketSpacing, CommentLeadIn};
use style_lint_core::RuleBox;

/// Returns every built-in rule, in code order.
///
/// Registration order is dispatch order, so analyzers built from this
/// set report ties at a single token in code order too.
#[must_use]
pub fn default_rules() -> Vec<RuleBox> {
    vec![
        Box::new(BracketSpacing::new()),
        Box::new(AttributeBracketSpacing::new()),
        Box::new(CommentLeadIn::new()),
    ]
}

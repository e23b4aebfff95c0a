//! Rule forbidding a space after an attribute list's opening bracket.
//!
//! Disjoint from the general bracket rule by construction: a token
//! either opens an attribute list or it does not, so the two rules can
//! never report the same bracket. Left-hand spacing of attribute
//! brackets is governed by indentation rules elsewhere and not checked
//! here.

use crate::{adjacency, boundaries};
use style_lint_core::{
    AnalysisContext, DiagnosticSink, Rule, RuleDescriptor, Severity, Subscriptions,
};
use style_lint_syntax::{Token, TokenKind};

/// Rule code for attribute-bracket-spacing.
pub const CODE: &str = "SL002";

/// Rule name for attribute-bracket-spacing.
pub const NAME: &str = "attribute-bracket-spacing";

static DESCRIPTOR: RuleDescriptor = RuleDescriptor {
    code: CODE,
    name: NAME,
    title: "Opening attribute brackets must not be followed by a space",
    category: "spacing",
    severity: Severity::Warning,
    help_uri: "https://style-lint.dev/rules/SL002",
    message_template: "opening attribute bracket should not be followed by a space",
};

/// Forbids `[ Obsolete]`-style spacing inside attribute lists.
///
/// A bracket that ends its line is fine: the attribute content starting
/// on the next line is an accepted wrapping style.
#[derive(Debug, Clone, Copy, Default)]
pub struct AttributeBracketSpacing;

impl AttributeBracketSpacing {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for AttributeBracketSpacing {
    fn descriptor(&self) -> &'static RuleDescriptor {
        &DESCRIPTOR
    }

    fn subscriptions(&self) -> Subscriptions {
        Subscriptions::new().tokens(&[TokenKind::OpenBracket])
    }

    fn check_token(&self, token: Token<'_>, _ctx: &AnalysisContext<'_>, sink: &mut DiagnosticSink) {
        debug_assert!(
            token.kind() == TokenKind::OpenBracket,
            "attribute-bracket-spacing received a {:?} token",
            token.kind()
        );

        if !boundaries::is_attribute_open_bracket(token) {
            return;
        }

        if token.has_trailing_trivia() && !adjacency::is_last_in_line(token) {
            sink.report(self.descriptor(), token.span(), &[]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use style_lint_core::{Analyzer, Diagnostic};
    use style_lint_syntax::{NodeKind, SyntaxTree, TreeBuilder};

    fn check(tree: &SyntaxTree) -> Vec<Diagnostic> {
        let analyzer = Analyzer::builder()
            .rule(AttributeBracketSpacing::new())
            .build()
            .unwrap();
        analyzer.analyze(tree).diagnostics
    }

    fn attribute_tree(spaced: bool) -> SyntaxTree {
        let builder = TreeBuilder::new()
            .open(NodeKind::Document)
            .open(NodeKind::AttributeList)
            .token(TokenKind::OpenBracket, "[");
        let builder = if spaced {
            builder.whitespace(" ")
        } else {
            builder
        };
        builder
            .token(TokenKind::Identifier, "Obsolete")
            .token(TokenKind::CloseBracket, "]")
            .close()
            .close()
            .finish()
            .unwrap()
    }

    #[test]
    fn space_after_attribute_bracket_is_reported() {
        let tree = attribute_tree(true);
        let diagnostics = check(&tree);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].code, CODE);
        assert_eq!(
            diagnostics[0].message,
            "opening attribute bracket should not be followed by a space"
        );
        assert!(diagnostics[0].arguments.is_empty());
    }

    #[test]
    fn flush_attribute_bracket_is_clean() {
        let tree = attribute_tree(false);
        assert!(check(&tree).is_empty());
    }

    #[test]
    fn bracket_ending_its_line_is_clean() {
        // [
        //  Obsolete]
        let tree = TreeBuilder::new()
            .open(NodeKind::Document)
            .open(NodeKind::AttributeList)
            .token(TokenKind::OpenBracket, "[")
            .newline()
            .whitespace(" ")
            .token(TokenKind::Identifier, "Obsolete")
            .token(TokenKind::CloseBracket, "]")
            .close()
            .close()
            .finish()
            .unwrap();

        assert!(check(&tree).is_empty());
    }

    #[test]
    fn non_attribute_brackets_are_ignored() {
        let tree = TreeBuilder::new()
            .open(NodeKind::Document)
            .open(NodeKind::Expression)
            .token(TokenKind::Identifier, "x")
            .token(TokenKind::OpenBracket, "[")
            .whitespace(" ")
            .token(TokenKind::Identifier, "i")
            .token(TokenKind::CloseBracket, "]")
            .close()
            .close()
            .finish()
            .unwrap();

        assert!(check(&tree).is_empty());
    }
}

//! Rule requiring a space between `//` and the comment text.
//!
//! # Rationale
//!
//! `//A comment` crams the marker into the first word; a single space
//! after the marker keeps comments readable and uniform. Two forms are
//! exempt: the bare `//` marker (an intentionally empty comment line)
//! and the doubled `////` marker that conventionally flags
//! commented-out code, which is not prose and keeps its literal
//! spacing.
//!
//! This rule reasons at the trivia level only: it reads the literal
//! text of the comment and never inspects neighboring tokens.

use style_lint_core::{
    AnalysisContext, DiagnosticSink, Rule, RuleDescriptor, Severity, Subscriptions,
};
use style_lint_syntax::{Trivia, TriviaKind};

/// Rule code for comment-lead-in.
pub const CODE: &str = "SL003";

/// Rule name for comment-lead-in.
pub const NAME: &str = "comment-lead-in";

/// The single-line comment marker.
const MARKER: &str = "//";

/// Doubled marker reserved for commented-out code.
const DISABLED_CODE_MARKER: &str = "////";

static DESCRIPTOR: RuleDescriptor = RuleDescriptor {
    code: CODE,
    name: NAME,
    title: "Single-line comments must begin with a space",
    category: "comments",
    severity: Severity::Warning,
    help_uri: "https://style-lint.dev/rules/SL003",
    message_template: "single-line comment should begin with a space after `//`",
};

/// Requires `// text`, a bare `//`, or the `////` disabled-code form.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommentLeadIn;

impl CommentLeadIn {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for CommentLeadIn {
    fn descriptor(&self) -> &'static RuleDescriptor {
        &DESCRIPTOR
    }

    fn subscriptions(&self) -> Subscriptions {
        Subscriptions::new().trivia(&[TriviaKind::SingleLineComment])
    }

    fn check_trivia(
        &self,
        trivia: Trivia<'_>,
        _ctx: &AnalysisContext<'_>,
        sink: &mut DiagnosticSink,
    ) {
        debug_assert!(
            trivia.kind() == TriviaKind::SingleLineComment,
            "comment-lead-in received {:?} trivia",
            trivia.kind()
        );

        let text = trivia.text();

        // The disabled-code exemption must win before the lead-in
        // check: `////x` also fails the marker-plus-space test.
        if text.starts_with(DISABLED_CODE_MARKER) {
            return;
        }
        if text == MARKER {
            return;
        }
        if text.starts_with("// ") {
            return;
        }
        sink.report(self.descriptor(), trivia.span(), &[]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use style_lint_core::{Analyzer, Diagnostic};
    use style_lint_syntax::{NodeKind, SyntaxTree, TokenKind, TreeBuilder};

    /// Builds a tree whose only comment has the given text.
    fn tree_with_comment(comment: &str) -> SyntaxTree {
        TreeBuilder::new()
            .open(NodeKind::Document)
            .token(TokenKind::Identifier, "x")
            .whitespace(" ")
            .comment(comment)
            .newline()
            .token(TokenKind::Identifier, "y")
            .close()
            .finish()
            .unwrap()
    }

    fn check(tree: &SyntaxTree) -> Vec<Diagnostic> {
        let analyzer = Analyzer::builder()
            .rule(CommentLeadIn::new())
            .build()
            .unwrap();
        analyzer.analyze(tree).diagnostics
    }

    #[test]
    fn missing_space_is_reported() {
        let tree = tree_with_comment("//A single-line comment.");
        let diagnostics = check(&tree);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].code, CODE);
    }

    #[test]
    fn leading_space_is_clean() {
        let tree = tree_with_comment("// A single-line comment.");
        assert!(check(&tree).is_empty());
    }

    #[test]
    fn disabled_code_marker_is_exempt() {
        let tree = tree_with_comment("////int x = 2;");
        assert!(check(&tree).is_empty());
    }

    #[test]
    fn bare_marker_is_exempt() {
        let tree = tree_with_comment("//");
        assert!(check(&tree).is_empty());
    }

    #[test]
    fn extra_spaces_after_the_marker_are_clean() {
        let tree = tree_with_comment("//   aligned note");
        assert!(check(&tree).is_empty());
    }

    #[test]
    fn leading_comments_are_checked_too() {
        let tree = TreeBuilder::new()
            .open(NodeKind::Document)
            .comment("//missing space")
            .newline()
            .token(TokenKind::Identifier, "x")
            .close()
            .finish()
            .unwrap();
        assert_eq!(check(&tree).len(), 1);
    }

    #[test]
    fn doc_comment_trivia_is_never_routed_here() {
        let tree = TreeBuilder::new()
            .open(NodeKind::Document)
            .doc_comment("///no space, different kind")
            .newline()
            .token(TokenKind::Identifier, "x")
            .close()
            .finish()
            .unwrap();
        assert!(check(&tree).is_empty());
    }

    #[test]
    fn the_span_points_at_the_comment() {
        let tree = tree_with_comment("//A");
        let diagnostics = check(&tree);
        let trivia_text =
            &tree.text()[diagnostics[0].span.start..diagnostics[0].span.start + diagnostics[0].span.len];
        assert_eq!(trivia_text, "//A");
    }
}

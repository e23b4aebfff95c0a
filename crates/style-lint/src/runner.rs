//! Convenience runners over one or many trees.

use rayon::prelude::*;
use style_lint_core::{AnalysisResult, Analyzer, AnalyzerError, CancellationToken};
use style_lint_rules::default_rules;
use style_lint_syntax::SyntaxTree;

/// Analyzes one tree with the default rule set.
///
/// # Errors
///
/// Returns [`AnalyzerError::DuplicateRule`] if the default rule set is
/// ever made inconsistent; with the shipped rules this cannot happen.
pub fn analyze_tree(tree: &SyntaxTree) -> Result<AnalysisResult, AnalyzerError> {
    let analyzer = Analyzer::builder().rules(default_rules()).build()?;
    Ok(analyzer.analyze(tree))
}

/// Analyzes many trees in parallel against one shared analyzer.
///
/// Each tree is independent and read-only, and the registry is
/// immutable once built, so the trees fan out across the rayon pool
/// with no locking. Results come back in input order, one per tree.
/// Cancellation is per-tree granular: trees already being analyzed
/// finish their current top-level visit and return partial results;
/// trees not yet started return empty cancelled results.
#[must_use]
pub fn analyze_trees(
    analyzer: &Analyzer,
    trees: &[&SyntaxTree],
    cancel: &CancellationToken,
) -> Vec<AnalysisResult> {
    trees
        .par_iter()
        .map(|tree| analyzer.analyze_with_cancellation(tree, cancel))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use style_lint_syntax::{NodeKind, TokenKind, TreeBuilder};

    fn spaced_bracket_tree() -> SyntaxTree {
        TreeBuilder::new()
            .open(NodeKind::Document)
            .open(NodeKind::Expression)
            .token(TokenKind::Identifier, "x")
            .whitespace(" ")
            .token(TokenKind::OpenBracket, "[")
            .token(TokenKind::Identifier, "i")
            .token(TokenKind::CloseBracket, "]")
            .close()
            .close()
            .finish()
            .unwrap()
    }

    fn clean_tree() -> SyntaxTree {
        TreeBuilder::new()
            .open(NodeKind::Document)
            .token(TokenKind::Identifier, "x")
            .close()
            .finish()
            .unwrap()
    }

    #[test]
    fn analyze_tree_runs_the_default_rules() {
        let tree = spaced_bracket_tree();
        let result = analyze_tree(&tree).unwrap();
        assert_eq!(result.codes(), vec!["SL001"]);
    }

    #[test]
    fn analyze_trees_returns_results_in_input_order() {
        let analyzer = Analyzer::builder()
            .rules(default_rules())
            .build()
            .unwrap();
        let dirty = spaced_bracket_tree();
        let clean = clean_tree();
        let trees = [&dirty, &clean, &dirty];

        let results = analyze_trees(&analyzer, &trees, &CancellationToken::new());

        assert_eq!(results.len(), 3);
        assert!(results[0].has_diagnostics());
        assert!(!results[1].has_diagnostics());
        assert!(results[2].has_diagnostics());
    }

    #[test]
    fn cancelled_batch_reports_incomplete_passes() {
        let analyzer = Analyzer::builder()
            .rules(default_rules())
            .build()
            .unwrap();
        let tree = spaced_bracket_tree();
        let cancel = CancellationToken::new();
        cancel.cancel();

        let results = analyze_trees(&analyzer, &[&tree, &tree], &cancel);

        assert!(results.iter().all(|r| !r.is_complete()));
        assert!(results.iter().all(|r| r.diagnostics.is_empty()));
    }
}

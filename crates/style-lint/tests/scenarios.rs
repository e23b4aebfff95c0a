//! End-to-end scenarios through the default rule set, one per
//! documented rule behavior.

use style_lint::syntax::{LineIndex, NodeKind, SyntaxTree, TokenKind, TreeBuilder};
use style_lint::AnalysisResult;

fn analyze(tree: &SyntaxTree) -> AnalysisResult {
    style_lint::analyze_tree(tree).unwrap()
}

#[test]
fn indented_bracket_after_a_condition_line() {
    // if (x != y)
    //   [foo]
    let tree = TreeBuilder::new()
        .open(NodeKind::Document)
        .open(NodeKind::Statement)
        .token(TokenKind::Keyword, "if")
        .whitespace(" ")
        .token(TokenKind::OpenParen, "(")
        .token(TokenKind::Identifier, "x")
        .whitespace(" ")
        .token(TokenKind::Operator, "!=")
        .whitespace(" ")
        .token(TokenKind::Identifier, "y")
        .token(TokenKind::CloseParen, ")")
        .newline()
        .whitespace("  ")
        .open(NodeKind::Expression)
        .token(TokenKind::OpenBracket, "[")
        .token(TokenKind::Identifier, "foo")
        .token(TokenKind::CloseBracket, "]")
        .close()
        .close()
        .close()
        .finish()
        .unwrap();

    let result = analyze(&tree);
    assert_eq!(result.codes(), vec!["SL001"]);
    assert_eq!(result.diagnostics[0].arguments, vec!["preceded".to_string()]);

    // The diagnostic lands on the bracket, line 2 column 3.
    let position = LineIndex::new(tree.text()).line_col(result.diagnostics[0].span.start);
    assert_eq!((position.line, position.column), (2, 3));
}

#[test]
fn bracket_at_column_zero_is_clean() {
    // a
    // [x]
    let tree = TreeBuilder::new()
        .open(NodeKind::Document)
        .token(TokenKind::Identifier, "a")
        .newline()
        .open(NodeKind::Expression)
        .token(TokenKind::OpenBracket, "[")
        .token(TokenKind::Identifier, "x")
        .token(TokenKind::CloseBracket, "]")
        .close()
        .close()
        .finish()
        .unwrap();

    assert!(!analyze(&tree).has_diagnostics());
}

#[test]
fn comment_lead_in_scenarios() {
    let cases: &[(&str, usize)] = &[
        ("//A single-line comment.", 1),
        ("// A single-line comment.", 0),
        ("////int x = 2;", 0),
        ("//", 0),
    ];

    for &(comment, expected) in cases {
        let tree = TreeBuilder::new()
            .open(NodeKind::Document)
            .token(TokenKind::Identifier, "x")
            .whitespace(" ")
            .comment(comment)
            .newline()
            .token(TokenKind::Identifier, "y")
            .close()
            .finish()
            .unwrap();

        let result = analyze(&tree);
        assert_eq!(
            result.diagnostics.len(),
            expected,
            "unexpected diagnostics for {comment:?}"
        );
    }
}

#[test]
fn attribute_bracket_scenarios() {
    // [ Obsolete] - a space after the bracket, not at end of line.
    let spaced = TreeBuilder::new()
        .open(NodeKind::Document)
        .open(NodeKind::AttributeList)
        .token(TokenKind::OpenBracket, "[")
        .whitespace(" ")
        .token(TokenKind::Identifier, "Obsolete")
        .token(TokenKind::CloseBracket, "]")
        .close()
        .close()
        .finish()
        .unwrap();
    assert_eq!(analyze(&spaced).codes(), vec!["SL002"]);

    // [Obsolete]
    let flush = TreeBuilder::new()
        .open(NodeKind::Document)
        .open(NodeKind::AttributeList)
        .token(TokenKind::OpenBracket, "[")
        .token(TokenKind::Identifier, "Obsolete")
        .token(TokenKind::CloseBracket, "]")
        .close()
        .close()
        .finish()
        .unwrap();
    assert!(!analyze(&flush).has_diagnostics());

    // The bracket is the last character on its line.
    let wrapped = TreeBuilder::new()
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
    assert!(!analyze(&wrapped).has_diagnostics());
}

#[test]
fn one_snippet_can_trip_every_rule() {
    // [ Obsolete]
    // x [i];  //todo
    let tree = TreeBuilder::new()
        .open(NodeKind::Document)
        .open(NodeKind::AttributeList)
        .token(TokenKind::OpenBracket, "[")
        .whitespace(" ")
        .token(TokenKind::Identifier, "Obsolete")
        .token(TokenKind::CloseBracket, "]")
        .close()
        .newline()
        .open(NodeKind::Statement)
        .open(NodeKind::Expression)
        .token(TokenKind::Identifier, "x")
        .whitespace(" ")
        .token(TokenKind::OpenBracket, "[")
        .token(TokenKind::Identifier, "i")
        .token(TokenKind::CloseBracket, "]")
        .close()
        .token(TokenKind::Semicolon, ";")
        .whitespace("  ")
        .comment("//todo")
        .newline()
        .close()
        .close()
        .finish()
        .unwrap();

    let result = analyze(&tree);
    assert!(result.is_complete());
    assert_eq!(result.codes(), vec!["SL002", "SL001", "SL003"]);
}

//! # style-lint
//!
//! Token/trivia style checker for concrete syntax trees.
//!
//! This is the main facade crate that re-exports the engine, the
//! syntax substrate, and the built-in rules.
//!
//! ## Quick Start
//!
//! ```
//! use style_lint::syntax::{NodeKind, TokenKind, TreeBuilder};
//!
//! // Trees come from a host parser; tests build them directly.
//! let tree = TreeBuilder::new()
//!     .open(NodeKind::Document)
//!     .token(TokenKind::Identifier, "x")
//!     .whitespace(" ")
//!     .token(TokenKind::OpenBracket, "[")
//!     .token(TokenKind::Identifier, "i")
//!     .token(TokenKind::CloseBracket, "]")
//!     .close()
//!     .finish()
//!     .unwrap();
//!
//! let result = style_lint::analyze_tree(&tree).unwrap();
//! assert_eq!(result.codes(), vec!["SL001"]);
//! ```
//!
//! ## Programmatic Usage
//!
//! ```ignore
//! use style_lint::{Analyzer, CancellationToken};
//! use style_lint::rules::default_rules;
//!
//! let analyzer = Analyzer::builder()
//!     .rules(default_rules())
//!     .build()?;
//!
//! let results = style_lint::analyze_trees(&analyzer, &trees, &CancellationToken::new());
//! ```

#![forbid(unsafe_code)]

// Re-export core types and traits
pub use style_lint_core::*;

/// The concrete syntax tree substrate.
pub mod syntax {
    pub use style_lint_syntax::*;
}

/// Built-in rules and rule sets.
pub mod rules {
    pub use style_lint_rules::*;
}

mod runner;

pub use runner::{analyze_tree, analyze_trees};

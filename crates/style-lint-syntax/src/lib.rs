//! # style-lint-syntax
//!
//! Concrete syntax tree substrate consumed by the style-lint engine.
//!
//! This crate provides the immutable tree representation the rule engine
//! reads: tokens carrying leading/trailing trivia, interior nodes, and
//! full navigation (parent, children, previous/next token). Tokens and
//! trivia together reconstruct the original source text losslessly.
//!
//! Trees are materialized by a host (typically a parser living outside
//! this workspace) through [`TreeBuilder`], which writes tokens and
//! trivia in source order and handles trivia attachment:
//!
//! - trivia up to and including the first end-of-line after a token
//!   attaches to that token's *trailing* list;
//! - remaining trivia (e.g. the next line's indentation) attaches to the
//!   following token's *leading* list.
//!
//! ## Example
//!
//! ```
//! use style_lint_syntax::{NodeKind, TokenKind, TreeBuilder};
//!
//! let tree = TreeBuilder::new()
//!     .open(NodeKind::Document)
//!     .token(TokenKind::Identifier, "x")
//!     .whitespace(" ")
//!     .token(TokenKind::OpenBracket, "[")
//!     .token(TokenKind::Identifier, "i")
//!     .token(TokenKind::CloseBracket, "]")
//!     .close()
//!     .finish()?;
//!
//! assert_eq!(tree.text(), "x [i]");
//! # Ok::<(), style_lint_syntax::BuildError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod builder;
mod kind;
mod line_index;
mod span;
mod tree;

pub use builder::{BuildError, TreeBuilder};
pub use kind::{NodeKind, TokenKind, TriviaKind};
pub use line_index::{LineCol, LineIndex};
pub use span::Span;
pub use tree::{Node, SyntaxElement, SyntaxTree, Token, Trivia};

//! Linear construction of syntax trees.
//!
//! A host writes nodes, tokens, and trivia in source order; the builder
//! accumulates the source text, computes spans, and attaches trivia to
//! tokens. Attachment rule: after a token, trivia up to and including
//! the first end-of-line belongs to that token's trailing list, and
//! whatever follows (the next line's indentation, comments) becomes the
//! next token's leading list. Trivia before the first token is wholly
//! leading; trivia after the last token is wholly trailing.

use crate::kind::{NodeKind, TokenKind, TriviaKind};
use crate::span::Span;
use crate::tree::{Element, NodeData, NodeId, SyntaxTree, TokenData, TokenId, TriviaData, TriviaId};
use thiserror::Error;

/// Errors raised when a builder sequence cannot form a valid tree.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// `close` was called with no node open.
    #[error("`close` called with no open node")]
    UnbalancedClose,

    /// `finish` was called while a node was still open.
    #[error("unclosed {0:?} node at end of input")]
    UnclosedNode(NodeKind),

    /// A token was written before any node was opened.
    #[error("{0:?} token written outside any node")]
    TokenOutsideNode(TokenKind),

    /// A second root node was opened after the first was closed.
    #[error("more than one root node")]
    MultipleRoots,

    /// `finish` was called without any node.
    #[error("tree has no root node")]
    Empty,

    /// Trivia was written but no token exists to own it.
    #[error("trivia written with no token to own it")]
    DanglingTrivia,
}

/// Builds a [`SyntaxTree`] from a linear sequence of writes.
///
/// All writer methods consume and return the builder so construction
/// chains. The first error is latched and reported by [`finish`];
/// subsequent writes are ignored once an error is recorded.
///
/// [`finish`]: TreeBuilder::finish
#[derive(Default)]
pub struct TreeBuilder {
    text: String,
    nodes: Vec<NodeData>,
    tokens: Vec<TokenData>,
    trivias: Vec<TriviaData>,
    stack: Vec<NodeId>,
    pending: Vec<(TriviaKind, Span)>,
    error: Option<BuildError>,
}

impl TreeBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens an interior node; children are written until [`close`].
    ///
    /// [`close`]: TreeBuilder::close
    #[must_use]
    pub fn open(mut self, kind: NodeKind) -> Self {
        if self.error.is_some() {
            return self;
        }
        if self.stack.is_empty() && !self.nodes.is_empty() {
            self.error = Some(BuildError::MultipleRoots);
            return self;
        }
        let id = NodeId(self.nodes.len());
        let parent = self.stack.last().copied();
        self.nodes.push(NodeData {
            kind,
            parent,
            children: Vec::new(),
        });
        if let Some(parent) = parent {
            self.nodes[parent.0].children.push(Element::Node(id));
        }
        self.stack.push(id);
        self
    }

    /// Closes the most recently opened node.
    #[must_use]
    pub fn close(mut self) -> Self {
        if self.error.is_some() {
            return self;
        }
        if self.stack.pop().is_none() {
            self.error = Some(BuildError::UnbalancedClose);
        }
        self
    }

    /// Writes a token into the currently open node, attaching any
    /// pending trivia on the way.
    #[must_use]
    pub fn token(mut self, kind: TokenKind, text: &str) -> Self {
        if self.error.is_some() {
            return self;
        }
        let Some(&parent) = self.stack.last() else {
            self.error = Some(BuildError::TokenOutsideNode(kind));
            return self;
        };
        let id = TokenId(self.tokens.len());
        let leading = self.attach_pending(id);
        let span = self.push_text(text);
        self.tokens.push(TokenData {
            kind,
            span,
            parent,
            leading,
            trailing: Vec::new(),
        });
        self.nodes[parent.0].children.push(Element::Token(id));
        self
    }

    /// Writes whitespace trivia (spaces, tabs).
    #[must_use]
    pub fn whitespace(self, text: &str) -> Self {
        self.push_pending(TriviaKind::Whitespace, text)
    }

    /// Writes a `\n` end-of-line trivia.
    #[must_use]
    pub fn newline(self) -> Self {
        self.push_pending(TriviaKind::EndOfLine, "\n")
    }

    /// Writes a single-line comment. `text` is the full comment
    /// including the `//` marker, without the line break.
    #[must_use]
    pub fn comment(self, text: &str) -> Self {
        self.push_pending(TriviaKind::SingleLineComment, text)
    }

    /// Writes a `/* ... */` comment.
    #[must_use]
    pub fn multi_line_comment(self, text: &str) -> Self {
        self.push_pending(TriviaKind::MultiLineComment, text)
    }

    /// Writes a `///` documentation comment line.
    #[must_use]
    pub fn doc_comment(self, text: &str) -> Self {
        self.push_pending(TriviaKind::DocumentationComment, text)
    }

    /// Writes a region open/close marker line.
    #[must_use]
    pub fn region_marker(self, text: &str) -> Self {
        self.push_pending(TriviaKind::RegionMarker, text)
    }

    /// Finalizes the tree.
    ///
    /// Trivia still pending is attached to the last token's trailing
    /// list, whatever it contains.
    ///
    /// # Errors
    ///
    /// Returns the first structural error recorded during construction,
    /// or [`BuildError::Empty`] / [`BuildError::UnclosedNode`] /
    /// [`BuildError::DanglingTrivia`] for end-of-input defects.
    pub fn finish(mut self) -> Result<SyntaxTree, BuildError> {
        if let Some(error) = self.error {
            return Err(error);
        }
        if let Some(&open) = self.stack.last() {
            return Err(BuildError::UnclosedNode(self.nodes[open.0].kind));
        }
        if self.nodes.is_empty() {
            return Err(BuildError::Empty);
        }
        if !self.pending.is_empty() {
            let Some(last) = self.tokens.len().checked_sub(1) else {
                return Err(BuildError::DanglingTrivia);
            };
            let last = TokenId(last);
            let pending = std::mem::take(&mut self.pending);
            for (kind, span) in pending {
                let id = self.push_trivia(kind, span, last, true);
                self.tokens[last.0].trailing.push(id);
            }
        }
        Ok(SyntaxTree {
            text: self.text,
            nodes: self.nodes,
            tokens: self.tokens,
            trivias: self.trivias,
            root: NodeId(0),
        })
    }

    fn push_pending(mut self, kind: TriviaKind, text: &str) -> Self {
        if self.error.is_some() {
            return self;
        }
        let span = self.push_text(text);
        self.pending.push((kind, span));
        self
    }

    fn push_text(&mut self, text: &str) -> Span {
        let start = self.text.len();
        self.text.push_str(text);
        Span::new(start, text.len())
    }

    /// Distributes pending trivia between the previous token's trailing
    /// list and the upcoming token's leading list, splitting after the
    /// first end-of-line.
    fn attach_pending(&mut self, next: TokenId) -> Vec<TriviaId> {
        let pending = std::mem::take(&mut self.pending);
        if pending.is_empty() {
            return Vec::new();
        }
        let Some(prev_index) = self.tokens.len().checked_sub(1) else {
            // File-leading trivia belongs wholly to the first token.
            let mut leading = Vec::new();
            for (kind, span) in pending {
                leading.push(self.push_trivia(kind, span, next, false));
            }
            return leading;
        };
        let prev = TokenId(prev_index);
        let split = pending
            .iter()
            .position(|&(kind, _)| kind == TriviaKind::EndOfLine)
            .map_or(pending.len(), |i| i + 1);
        let mut leading = Vec::new();
        for (index, (kind, span)) in pending.into_iter().enumerate() {
            if index < split {
                let id = self.push_trivia(kind, span, prev, true);
                self.tokens[prev.0].trailing.push(id);
            } else {
                leading.push(self.push_trivia(kind, span, next, false));
            }
        }
        leading
    }

    fn push_trivia(&mut self, kind: TriviaKind, span: Span, owner: TokenId, trailing: bool) -> TriviaId {
        let id = TriviaId(self.trivias.len());
        self.trivias.push(TriviaData {
            kind,
            span,
            owner,
            trailing,
        });
        id
    }
}

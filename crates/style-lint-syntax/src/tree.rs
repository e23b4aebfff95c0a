//! Immutable syntax tree with token/trivia navigation.
//!
//! The tree is arena-backed: nodes, tokens, and trivia live in flat
//! vectors owned by [`SyntaxTree`], and the public surface hands out
//! cheap `Copy` handles ([`Node`], [`Token`], [`Trivia`]) that borrow
//! the tree. Tokens are stored in source order, so previous/next token
//! navigation is index arithmetic.

use crate::kind::{NodeKind, TokenKind, TriviaKind};
use crate::span::Span;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NodeId(pub(crate) usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TokenId(pub(crate) usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TriviaId(pub(crate) usize);

#[derive(Debug, Clone, Copy)]
pub(crate) enum Element {
    Node(NodeId),
    Token(TokenId),
}

#[derive(Debug)]
pub(crate) struct NodeData {
    pub(crate) kind: NodeKind,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<Element>,
}

#[derive(Debug)]
pub(crate) struct TokenData {
    pub(crate) kind: TokenKind,
    pub(crate) span: Span,
    pub(crate) parent: NodeId,
    pub(crate) leading: Vec<TriviaId>,
    pub(crate) trailing: Vec<TriviaId>,
}

#[derive(Debug)]
pub(crate) struct TriviaData {
    pub(crate) kind: TriviaKind,
    pub(crate) span: Span,
    pub(crate) owner: TokenId,
    pub(crate) trailing: bool,
}

/// An immutable concrete syntax tree over a source text.
///
/// Produced once by [`TreeBuilder`](crate::TreeBuilder) and read-only
/// afterwards. The engine holds a shared reference for the duration of
/// an analysis pass; nothing mutates the tree after construction.
#[derive(Debug)]
pub struct SyntaxTree {
    pub(crate) text: String,
    pub(crate) nodes: Vec<NodeData>,
    pub(crate) tokens: Vec<TokenData>,
    pub(crate) trivias: Vec<TriviaData>,
    pub(crate) root: NodeId,
}

impl SyntaxTree {
    /// The root node.
    #[must_use]
    pub fn root(&self) -> Node<'_> {
        Node {
            tree: self,
            id: self.root,
        }
    }

    /// The full source text the tree was built from.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// All tokens in source order.
    pub fn tokens(&self) -> impl Iterator<Item = Token<'_>> {
        (0..self.tokens.len()).map(move |i| Token {
            tree: self,
            id: TokenId(i),
        })
    }

    /// Number of tokens in the tree.
    #[must_use]
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    fn node_data(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.0]
    }

    fn token_data(&self, id: TokenId) -> &TokenData {
        &self.tokens[id.0]
    }

    fn trivia_data(&self, id: TriviaId) -> &TriviaData {
        &self.trivias[id.0]
    }
}

/// A child of an interior node: either a nested node or a token leaf.
#[derive(Clone, Copy)]
pub enum SyntaxElement<'a> {
    /// An interior node.
    Node(Node<'a>),
    /// A token leaf.
    Token(Token<'a>),
}

/// Handle to an interior node.
#[derive(Clone, Copy)]
pub struct Node<'a> {
    tree: &'a SyntaxTree,
    id: NodeId,
}

impl<'a> Node<'a> {
    /// Kind tag of this node.
    #[must_use]
    pub fn kind(self) -> NodeKind {
        self.tree.node_data(self.id).kind
    }

    /// Parent node, `None` for the root.
    #[must_use]
    pub fn parent(self) -> Option<Node<'a>> {
        self.tree
            .node_data(self.id)
            .parent
            .map(|id| Node {
                tree: self.tree,
                id,
            })
    }

    /// Children in source order.
    pub fn children(self) -> impl Iterator<Item = SyntaxElement<'a>> + 'a {
        let tree = self.tree;
        tree.node_data(self.id)
            .children
            .iter()
            .map(move |element| match *element {
                Element::Node(id) => SyntaxElement::Node(Node { tree, id }),
                Element::Token(id) => SyntaxElement::Token(Token { tree, id }),
            })
    }
}

impl PartialEq for Node<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl std::fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Node({:?})", self.kind())
    }
}

/// Handle to a token leaf.
#[derive(Clone, Copy)]
pub struct Token<'a> {
    pub(crate) tree: &'a SyntaxTree,
    pub(crate) id: TokenId,
}

impl<'a> Token<'a> {
    /// Kind tag of this token.
    #[must_use]
    pub fn kind(self) -> TokenKind {
        self.tree.token_data(self.id).kind
    }

    /// Text span of the token itself (trivia excluded).
    #[must_use]
    pub fn span(self) -> Span {
        self.tree.token_data(self.id).span
    }

    /// The token's literal text.
    #[must_use]
    pub fn text(self) -> &'a str {
        let span = self.span();
        &self.tree.text[span.start..span.end()]
    }

    /// The interior node that owns this token.
    #[must_use]
    pub fn parent(self) -> Node<'a> {
        Node {
            tree: self.tree,
            id: self.tree.token_data(self.id).parent,
        }
    }

    /// The previous token in source order, if any.
    #[must_use]
    pub fn prev_token(self) -> Option<Token<'a>> {
        let index = self.id.0.checked_sub(1)?;
        Some(Token {
            tree: self.tree,
            id: TokenId(index),
        })
    }

    /// The next token in source order, if any.
    #[must_use]
    pub fn next_token(self) -> Option<Token<'a>> {
        let index = self.id.0 + 1;
        if index < self.tree.tokens.len() {
            Some(Token {
                tree: self.tree,
                id: TokenId(index),
            })
        } else {
            None
        }
    }

    /// Leading trivia in source order.
    pub fn leading_trivia(self) -> impl Iterator<Item = Trivia<'a>> + 'a {
        let tree = self.tree;
        tree.token_data(self.id)
            .leading
            .iter()
            .map(move |&id| Trivia { tree, id })
    }

    /// Trailing trivia in source order.
    pub fn trailing_trivia(self) -> impl Iterator<Item = Trivia<'a>> + 'a {
        let tree = self.tree;
        tree.token_data(self.id)
            .trailing
            .iter()
            .map(move |&id| Trivia { tree, id })
    }

    /// Returns true if the token has any leading trivia.
    #[must_use]
    pub fn has_leading_trivia(self) -> bool {
        !self.tree.token_data(self.id).leading.is_empty()
    }

    /// Returns true if the token has any trailing trivia.
    #[must_use]
    pub fn has_trailing_trivia(self) -> bool {
        !self.tree.token_data(self.id).trailing.is_empty()
    }
}

impl PartialEq for Token<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl std::fmt::Debug for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token({:?} {:?} @ {})", self.kind(), self.text(), self.span())
    }
}

/// Handle to a trivia item.
#[derive(Clone, Copy)]
pub struct Trivia<'a> {
    pub(crate) tree: &'a SyntaxTree,
    pub(crate) id: TriviaId,
}

impl<'a> Trivia<'a> {
    /// Kind tag of this trivia item.
    #[must_use]
    pub fn kind(self) -> TriviaKind {
        self.tree.trivia_data(self.id).kind
    }

    /// Text span of the trivia.
    #[must_use]
    pub fn span(self) -> Span {
        self.tree.trivia_data(self.id).span
    }

    /// The trivia's literal text.
    #[must_use]
    pub fn text(self) -> &'a str {
        let span = self.span();
        &self.tree.text[span.start..span.end()]
    }

    /// The token whose leading or trailing list contains this trivia.
    #[must_use]
    pub fn owner(self) -> Token<'a> {
        Token {
            tree: self.tree,
            id: self.tree.trivia_data(self.id).owner,
        }
    }

    /// Returns true if the trivia sits in its owner's trailing list.
    #[must_use]
    pub fn is_trailing(self) -> bool {
        self.tree.trivia_data(self.id).trailing
    }

    /// Returns true if the trivia sits in its owner's leading list.
    #[must_use]
    pub fn is_leading(self) -> bool {
        !self.is_trailing()
    }
}

impl PartialEq for Trivia<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl std::fmt::Debug for Trivia<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Trivia({:?} {:?} @ {})", self.kind(), self.text(), self.span())
    }
}

#[cfg(test)]
mod tests {
    use crate::builder::TreeBuilder;
    use crate::kind::{NodeKind, TokenKind, TriviaKind};

    #[test]
    fn navigation_over_a_small_tree() {
        let tree = TreeBuilder::new()
            .open(NodeKind::Document)
            .token(TokenKind::Identifier, "x")
            .whitespace(" ")
            .token(TokenKind::Operator, "=")
            .whitespace(" ")
            .token(TokenKind::Literal, "1")
            .token(TokenKind::Semicolon, ";")
            .close()
            .finish()
            .unwrap();

        assert_eq!(tree.text(), "x = 1;");
        assert_eq!(tree.token_count(), 4);

        let tokens: Vec<_> = tree.tokens().collect();
        assert_eq!(tokens[0].text(), "x");
        assert_eq!(tokens[3].text(), ";");
        assert_eq!(tokens[1].prev_token().unwrap().text(), "x");
        assert_eq!(tokens[1].next_token().unwrap().text(), "1");
        assert!(tokens[0].prev_token().is_none());
        assert!(tokens[3].next_token().is_none());
        assert_eq!(tokens[0].parent().kind(), NodeKind::Document);
    }

    #[test]
    fn trivia_ownership_and_slots() {
        let tree = TreeBuilder::new()
            .open(NodeKind::Document)
            .token(TokenKind::Identifier, "a")
            .whitespace(" ")
            .token(TokenKind::Identifier, "b")
            .close()
            .finish()
            .unwrap();

        let a = tree.tokens().next().unwrap();
        let trailing: Vec<_> = a.trailing_trivia().collect();
        assert_eq!(trailing.len(), 1);
        assert_eq!(trailing[0].kind(), TriviaKind::Whitespace);
        assert_eq!(trailing[0].text(), " ");
        assert!(trailing[0].is_trailing());
        assert_eq!(trailing[0].owner(), a);
    }

    #[test]
    fn text_reconstructs_losslessly() {
        let tree = TreeBuilder::new()
            .open(NodeKind::Document)
            .comment("// header")
            .newline()
            .token(TokenKind::Keyword, "if")
            .whitespace(" ")
            .token(TokenKind::OpenParen, "(")
            .token(TokenKind::Identifier, "x")
            .token(TokenKind::CloseParen, ")")
            .newline()
            .close()
            .finish()
            .unwrap();

        let mut rebuilt = String::new();
        for token in tree.tokens() {
            for trivia in token.leading_trivia() {
                rebuilt.push_str(trivia.text());
            }
            rebuilt.push_str(token.text());
            for trivia in token.trailing_trivia() {
                rebuilt.push_str(trivia.text());
            }
        }
        assert_eq!(rebuilt, tree.text());
        assert_eq!(rebuilt, "// header\nif (x)\n");
    }
}

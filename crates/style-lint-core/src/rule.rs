//! Rule traits and registration metadata.

use crate::cancel::CancellationToken;
use crate::diagnostics::{DiagnosticSink, Severity};
use style_lint_syntax::{SyntaxTree, Token, TokenKind, Trivia, TriviaKind};

/// Static metadata describing a rule.
///
/// The engine treats every field except `severity` as an opaque string
/// passed through to diagnostics unmodified; only the sink interprets
/// `message_template`, substituting positional `{0}`/`{1}` arguments.
#[derive(Debug, Clone, Copy)]
pub struct RuleDescriptor {
    /// Stable short code (e.g. "SL001").
    pub code: &'static str,
    /// Kebab-case rule name (e.g. "bracket-spacing").
    pub name: &'static str,
    /// Human-readable title.
    pub title: &'static str,
    /// Category grouping related rules (e.g. "spacing").
    pub category: &'static str,
    /// Default severity for diagnostics from this rule.
    pub severity: Severity,
    /// Link to the rule's documentation.
    pub help_uri: &'static str,
    /// Message template with positional `{0}`/`{1}` placeholders.
    pub message_template: &'static str,
}

/// The traversal granularities a rule subscribes to.
///
/// A rule may observe the whole tree once, individual tokens by kind,
/// individual trivia items by kind, or any combination. An empty
/// subscription set is legal; such a rule is never invoked.
#[derive(Debug, Clone, Default)]
pub struct Subscriptions {
    tree_once: bool,
    token_kinds: Vec<TokenKind>,
    trivia_kinds: Vec<TriviaKind>,
}

impl Subscriptions {
    /// Creates an empty subscription set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribes to one whole-tree callback per analysis pass.
    #[must_use]
    pub fn tree_once(mut self) -> Self {
        self.tree_once = true;
        self
    }

    /// Subscribes to every token of the given kinds.
    #[must_use]
    pub fn tokens(mut self, kinds: &[TokenKind]) -> Self {
        self.token_kinds.extend_from_slice(kinds);
        self
    }

    /// Subscribes to every trivia item of the given kinds.
    #[must_use]
    pub fn trivia(mut self, kinds: &[TriviaKind]) -> Self {
        self.trivia_kinds.extend_from_slice(kinds);
        self
    }

    /// Whether the rule wants the whole-tree callback.
    #[must_use]
    pub fn wants_tree(&self) -> bool {
        self.tree_once
    }

    /// Whether the rule wants tokens of `kind`.
    #[must_use]
    pub fn wants_token(&self, kind: TokenKind) -> bool {
        self.token_kinds.contains(&kind)
    }

    /// Whether the rule wants trivia of `kind`.
    #[must_use]
    pub fn wants_trivia(&self, kind: TriviaKind) -> bool {
        self.trivia_kinds.contains(&kind)
    }

    /// Whether the rule subscribed to anything at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.tree_once && self.token_kinds.is_empty() && self.trivia_kinds.is_empty()
    }
}

/// Per-pass context handed to every rule callback.
///
/// Carries the tree under analysis and the pass's cancellation token.
/// The tree is read-only for the whole pass; rules never observe a
/// mutation.
#[derive(Debug, Clone, Copy)]
pub struct AnalysisContext<'a> {
    tree: &'a SyntaxTree,
    cancel: &'a CancellationToken,
}

impl<'a> AnalysisContext<'a> {
    /// Creates a context for one pass.
    #[must_use]
    pub fn new(tree: &'a SyntaxTree, cancel: &'a CancellationToken) -> Self {
        Self { tree, cancel }
    }

    /// The tree under analysis.
    #[must_use]
    pub fn tree(&self) -> &'a SyntaxTree {
        self.tree
    }

    /// The pass's cancellation token.
    #[must_use]
    pub fn cancellation(&self) -> &'a CancellationToken {
        self.cancel
    }
}

/// A style rule.
///
/// Implementations are pure functions of local token/trivia context:
/// they read the tree, never mutate it, and report findings through the
/// sink parameter. Rules must be `Send + Sync`; the registry is shared
/// read-only across concurrently analyzed trees.
///
/// Override only the callbacks matching the granularities declared in
/// [`subscriptions`]; the dispatcher never invokes the others.
///
/// # Example
///
/// ```ignore
/// use style_lint_core::{Rule, RuleDescriptor, Subscriptions};
///
/// struct NoColonTokens;
///
/// impl Rule for NoColonTokens {
///     fn descriptor(&self) -> &'static RuleDescriptor { &DESCRIPTOR }
///
///     fn subscriptions(&self) -> Subscriptions {
///         Subscriptions::new().tokens(&[TokenKind::Colon])
///     }
///
///     fn check_token(&self, token: Token<'_>, _ctx: &AnalysisContext<'_>, sink: &mut DiagnosticSink) {
///         sink.report(self.descriptor(), token.span(), &[]);
///     }
/// }
/// ```
///
/// [`subscriptions`]: Rule::subscriptions
pub trait Rule: Send + Sync {
    /// Returns this rule's static metadata.
    fn descriptor(&self) -> &'static RuleDescriptor;

    /// Declares which tree elements this rule observes.
    fn subscriptions(&self) -> Subscriptions;

    /// Called once per pass if subscribed via [`Subscriptions::tree_once`].
    fn check_tree(&self, ctx: &AnalysisContext<'_>, sink: &mut DiagnosticSink) {
        let _ = (ctx, sink);
    }

    /// Called for every subscribed token, in source order.
    fn check_token(&self, token: Token<'_>, ctx: &AnalysisContext<'_>, sink: &mut DiagnosticSink) {
        let _ = (token, ctx, sink);
    }

    /// Called for every subscribed trivia item, in source order.
    fn check_trivia(&self, trivia: Trivia<'_>, ctx: &AnalysisContext<'_>, sink: &mut DiagnosticSink) {
        let _ = (trivia, ctx, sink);
    }
}

/// Type alias for boxed rule trait objects.
pub type RuleBox = Box<dyn Rule>;

//! Rule registry and single-pass dispatcher.
//!
//! The [`Analyzer`] owns the registered rules and runs one depth-first
//! traversal per tree, routing every token and trivia item to every
//! subscribed rule in registration order. Invariants upheld here:
//!
//! - each token and trivia item is delivered to each subscribed rule
//!   exactly once, in source order;
//! - rule order at a given element equals registration order;
//! - a failing (panicking) rule is isolated: it is disabled for the
//!   rest of the pass, recorded as a [`RuleFailure`], and every other
//!   rule keeps running;
//! - cancellation is polled between top-level children of the root, so
//!   a cancelled pass returns the diagnostics produced so far with an
//!   explicit incomplete status.

use crate::cancel::CancellationToken;
use crate::diagnostics::{AnalysisResult, AnalysisStatus, DiagnosticSink, RuleFailure};
use crate::rule::{AnalysisContext, Rule, RuleBox, Subscriptions};
use std::any::Any;
use std::collections::HashSet;
use std::panic::{catch_unwind, AssertUnwindSafe};
use style_lint_syntax::{Span, SyntaxElement, SyntaxTree, Token, Trivia};
use thiserror::Error;

/// Errors raised while assembling an analyzer.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// Two registered rules share a code; identifiers must be unique.
    #[error("duplicate rule code `{code}` registered by `{name}`")]
    DuplicateRule {
        /// The contested rule code.
        code: String,
        /// Name of the rule registered second.
        name: String,
    },
}

/// Builder collecting rules for an [`Analyzer`].
#[derive(Default)]
pub struct AnalyzerBuilder {
    rules: Vec<RuleBox>,
}

impl AnalyzerBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a rule. Dispatch order follows registration order.
    #[must_use]
    pub fn rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Registers a boxed rule.
    #[must_use]
    pub fn rule_box(mut self, rule: RuleBox) -> Self {
        self.rules.push(rule);
        self
    }

    /// Registers every rule from an iterator, preserving order.
    #[must_use]
    pub fn rules(mut self, rules: impl IntoIterator<Item = RuleBox>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Validates the rule set and builds the analyzer.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyzerError::DuplicateRule`] if two rules declare
    /// the same code.
    pub fn build(self) -> Result<Analyzer, AnalyzerError> {
        let mut seen = HashSet::new();
        for rule in &self.rules {
            let descriptor = rule.descriptor();
            if !seen.insert(descriptor.code) {
                return Err(AnalyzerError::DuplicateRule {
                    code: descriptor.code.to_string(),
                    name: descriptor.name.to_string(),
                });
            }
        }
        Ok(Analyzer { rules: self.rules })
    }
}

/// The dispatcher: routes tree elements to subscribed rules.
///
/// Immutable once built; safe to share across threads analyzing
/// different trees concurrently (rules are `Send + Sync` and the pass
/// state lives on the stack of each `analyze` call).
pub struct Analyzer {
    rules: Vec<RuleBox>,
}

impl std::fmt::Debug for Analyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Analyzer")
            .field("rules", &self.rules.len())
            .finish()
    }
}

impl Analyzer {
    /// Creates a new builder.
    #[must_use]
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    /// Number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Analyzes a tree to completion.
    #[must_use]
    pub fn analyze(&self, tree: &SyntaxTree) -> AnalysisResult {
        self.analyze_with_cancellation(tree, &CancellationToken::new())
    }

    /// Analyzes a tree, polling `cancel` between top-level visits.
    ///
    /// On cancellation the diagnostics produced so far are returned
    /// with [`AnalysisStatus::Cancelled`]; nothing is rolled back.
    #[must_use]
    pub fn analyze_with_cancellation(
        &self,
        tree: &SyntaxTree,
        cancel: &CancellationToken,
    ) -> AnalysisResult {
        tracing::info!(
            rules = self.rules.len(),
            tokens = tree.token_count(),
            "starting analysis pass"
        );

        let mut pass = Pass {
            rules: &self.rules,
            subscriptions: self.rules.iter().map(|rule| rule.subscriptions()).collect(),
            disabled: vec![false; self.rules.len()],
            ctx: AnalysisContext::new(tree, cancel),
            sink: DiagnosticSink::new(),
            failures: Vec::new(),
        };
        let status = pass.run(tree);

        tracing::info!(
            diagnostics = pass.sink.len(),
            failures = pass.failures.len(),
            ?status,
            "analysis pass finished"
        );

        AnalysisResult {
            diagnostics: pass.sink.into_diagnostics(),
            failures: pass.failures,
            status,
        }
    }
}

/// Mutable state of one traversal.
struct Pass<'a> {
    rules: &'a [RuleBox],
    /// Subscription sets, queried once at pass start; the registry is
    /// immutable while a pass runs.
    subscriptions: Vec<Subscriptions>,
    disabled: Vec<bool>,
    ctx: AnalysisContext<'a>,
    sink: DiagnosticSink,
    failures: Vec<RuleFailure>,
}

impl Pass<'_> {
    fn run(&mut self, tree: &SyntaxTree) -> AnalysisStatus {
        if self.ctx.cancellation().is_cancelled() {
            return AnalysisStatus::Cancelled;
        }

        // Whole-tree callbacks first, in registration order.
        for index in 0..self.rules.len() {
            if self.subscriptions[index].wants_tree() {
                self.invoke(index, None, |rule, ctx, sink| rule.check_tree(ctx, sink));
            }
        }

        for element in tree.root().children() {
            if self.ctx.cancellation().is_cancelled() {
                return AnalysisStatus::Cancelled;
            }
            self.visit(element);
        }
        AnalysisStatus::Complete
    }

    fn visit(&mut self, element: SyntaxElement<'_>) {
        match element {
            SyntaxElement::Node(node) => {
                for child in node.children() {
                    self.visit(child);
                }
            }
            SyntaxElement::Token(token) => self.dispatch_token(token),
        }
    }

    fn dispatch_token(&mut self, token: Token<'_>) {
        for trivia in token.leading_trivia() {
            self.dispatch_trivia(trivia);
        }
        for index in 0..self.rules.len() {
            if self.subscriptions[index].wants_token(token.kind()) {
                self.invoke(index, Some(token.span()), |rule, ctx, sink| {
                    rule.check_token(token, ctx, sink);
                });
            }
        }
        for trivia in token.trailing_trivia() {
            self.dispatch_trivia(trivia);
        }
    }

    fn dispatch_trivia(&mut self, trivia: Trivia<'_>) {
        for index in 0..self.rules.len() {
            if self.subscriptions[index].wants_trivia(trivia.kind()) {
                self.invoke(index, Some(trivia.span()), |rule, ctx, sink| {
                    rule.check_trivia(trivia, ctx, sink);
                });
            }
        }
    }

    /// Runs one rule callback, isolating panics to that rule.
    fn invoke<F>(&mut self, index: usize, span: Option<Span>, callback: F)
    where
        F: FnOnce(&dyn Rule, &AnalysisContext<'_>, &mut DiagnosticSink),
    {
        if self.disabled[index] {
            return;
        }
        let rule = self.rules[index].as_ref();
        let ctx = &self.ctx;
        let sink = &mut self.sink;
        let outcome = catch_unwind(AssertUnwindSafe(|| callback(rule, ctx, sink)));
        if let Err(payload) = outcome {
            let detail = panic_detail(payload.as_ref());
            tracing::warn!(
                rule = rule.descriptor().code,
                detail = %detail,
                "rule failed; disabled for the rest of this pass"
            );
            self.disabled[index] = true;
            self.failures.push(RuleFailure {
                rule: rule.descriptor().code.to_string(),
                span,
                detail,
            });
        }
    }
}

fn panic_detail(payload: &(dyn Any + Send)) -> String {
    if let Some(text) = payload.downcast_ref::<&str>() {
        (*text).to_string()
    } else if let Some(text) = payload.downcast_ref::<String>() {
        text.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

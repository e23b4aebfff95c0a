//! # style-lint-core
//!
//! Core framework for token/trivia style linting over concrete syntax
//! trees.
//!
//! This crate provides the foundational traits and types for building
//! style checkers. It includes:
//!
//! - [`Rule`] trait and [`RuleDescriptor`] metadata for style rules
//! - [`Subscriptions`] declaring which tokens/trivia a rule observes
//! - [`Analyzer`] performing one dispatch pass per tree
//! - [`Diagnostic`] and [`DiagnosticSink`] for reporting findings
//! - [`CancellationToken`] for cooperative, per-tree cancellation
//!
//! ## Example
//!
//! ```ignore
//! use style_lint_core::Analyzer;
//!
//! let analyzer = Analyzer::builder()
//!     .rule(MyRule::default())
//!     .build()?;
//!
//! let result = analyzer.analyze(&tree);
//! assert!(result.is_complete());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod cancel;
mod diagnostics;
mod rule;

pub use analyzer::{Analyzer, AnalyzerBuilder, AnalyzerError};
pub use cancel::CancellationToken;
pub use diagnostics::{
    AnalysisResult, AnalysisStatus, Diagnostic, DiagnosticReport, DiagnosticSink, RuleFailure,
    Severity,
};
pub use rule::{AnalysisContext, Rule, RuleBox, RuleDescriptor, Subscriptions};

//! Diagnostic types and the reporting contract.
//!
//! Rules never format or display anything themselves: they call
//! [`DiagnosticSink::report`] with their descriptor, a span, and
//! positional message arguments. The sink expands the descriptor's
//! message template and appends a [`Diagnostic`]. Appending is the only
//! side effect reporting has.

use crate::rule::RuleDescriptor;
use miette::{Diagnostic as MietteDiagnostic, SourceSpan};
use serde::{Deserialize, Serialize};
use style_lint_syntax::Span;

/// Severity level for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational message, does not fail a check.
    Info,
    /// Warning that should be addressed.
    Warning,
    /// Error that must be fixed.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// A style violation reported by a rule.
///
/// Produced through [`DiagnosticSink::report`], never mutated
/// afterwards. The span is a byte range into the analyzed text; a host
/// maps it to line/column with the text-position service when
/// displaying.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Rule code (e.g. "SL001").
    pub code: String,
    /// Rule name (e.g. "bracket-spacing").
    pub name: String,
    /// Severity of this diagnostic.
    pub severity: Severity,
    /// Byte span of the offending token or trivia.
    pub span: Span,
    /// Positional arguments the message was built from.
    pub arguments: Vec<String>,
    /// Message with template placeholders substituted.
    pub message: String,
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} [{}] {}",
            self.span, self.severity, self.code, self.message
        )
    }
}

/// Append-only collector rules report into.
///
/// One sink lives for the duration of a pass; the diagnostics come out
/// in exactly the order they were reported, which the dispatcher
/// guarantees is source order with registration order breaking ties.
#[derive(Debug, Default)]
pub struct DiagnosticSink {
    items: Vec<Diagnostic>,
}

impl DiagnosticSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reports one diagnostic for `descriptor` at `span`.
    ///
    /// `args` fill the descriptor's positional `{0}`/`{1}` template
    /// placeholders. A rule may report zero, one, or many diagnostics
    /// for the same token.
    pub fn report(&mut self, descriptor: &RuleDescriptor, span: Span, args: &[&str]) {
        let message = expand_template(descriptor.message_template, args);
        self.items.push(Diagnostic {
            code: descriptor.code.to_string(),
            name: descriptor.name.to_string(),
            severity: descriptor.severity,
            span,
            arguments: args.iter().map(ToString::to_string).collect(),
            message,
        });
    }

    /// Number of diagnostics reported so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if nothing has been reported.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The diagnostics reported so far, in emission order.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.items
    }

    pub(crate) fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.items
    }
}

/// Substitutes positional `{0}`..`{9}` placeholders with `args`.
///
/// Placeholders without a matching argument are left as written.
fn expand_template(template: &str, args: &[&str]) -> String {
    let mut message = String::with_capacity(template.len());
    let mut chars = template.char_indices().peekable();
    while let Some((start, ch)) = chars.next() {
        if ch != '{' {
            message.push(ch);
            continue;
        }
        let mut end = None;
        for (offset, inner) in chars.clone() {
            match inner {
                '0'..='9' => {}
                '}' if offset > start + 1 => {
                    end = Some(offset);
                    break;
                }
                _ => break,
            }
        }
        let Some(end) = end else {
            message.push(ch);
            continue;
        };
        let index: usize = template[start + 1..end].parse().unwrap_or(usize::MAX);
        if let Some(arg) = args.get(index) {
            message.push_str(arg);
            while let Some(&(offset, _)) = chars.peek() {
                if offset > end {
                    break;
                }
                chars.next();
            }
        } else {
            message.push(ch);
        }
    }
    message
}

/// Internal engine record of a rule that failed mid-pass.
///
/// Distinct from rule diagnostics: a failure means the rule's callback
/// could not complete, not that the source violated a style rule. The
/// failing rule is disabled for the remainder of that pass; every other
/// rule keeps running.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleFailure {
    /// Code of the failing rule.
    pub rule: String,
    /// Span of the token or trivia being dispatched when the rule
    /// failed, if any.
    pub span: Option<Span>,
    /// Failure detail (panic payload text).
    pub detail: String,
}

impl std::fmt::Display for RuleFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "rule {} failed", self.rule)?;
        if let Some(span) = self.span {
            write!(f, " at {span}")?;
        }
        write!(f, ": {}", self.detail)
    }
}

/// Completion status of an analysis pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisStatus {
    /// Every token and trivia item was dispatched.
    Complete,
    /// The pass was cancelled; diagnostics are a valid prefix of a full
    /// run, not a clean pass.
    Cancelled,
}

/// Everything one analysis pass produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Diagnostics in emission order.
    pub diagnostics: Vec<Diagnostic>,
    /// Rules that failed during the pass.
    pub failures: Vec<RuleFailure>,
    /// Whether the pass ran to completion.
    pub status: AnalysisStatus,
}

impl AnalysisResult {
    /// Returns true if the pass was not cancelled.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.status == AnalysisStatus::Complete
    }

    /// Returns true if any rule reported a diagnostic.
    #[must_use]
    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Returns true if any rule failed mid-pass.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Rule codes of the diagnostics, in emission order.
    #[must_use]
    pub fn codes(&self) -> Vec<&str> {
        self.diagnostics.iter().map(|d| d.code.as_str()).collect()
    }

    /// Diagnostics reported under the given rule code.
    #[must_use]
    pub fn by_code(&self, code: &str) -> Vec<&Diagnostic> {
        self.diagnostics.iter().filter(|d| d.code == code).collect()
    }

    /// Formats the result as a human-readable report.
    #[must_use]
    pub fn format_report(&self) -> String {
        use std::fmt::Write;

        let mut report = String::new();
        for diagnostic in &self.diagnostics {
            let _ = writeln!(report, "{diagnostic}");
        }
        for failure in &self.failures {
            let _ = writeln!(report, "{failure}");
        }
        let _ = writeln!(
            report,
            "{} diagnostic(s), {} rule failure(s){}",
            self.diagnostics.len(),
            self.failures.len(),
            if self.is_complete() {
                ""
            } else {
                " (incomplete: cancelled)"
            }
        );
        report
    }
}

/// Converts a [`Diagnostic`] into a miette diagnostic for rich
/// terminal display.
#[derive(Debug, thiserror::Error, MietteDiagnostic)]
#[error("{message}")]
pub struct DiagnosticReport {
    message: String,
    #[help]
    help: Option<String>,
    #[label("{label_message}")]
    span: SourceSpan,
    label_message: String,
}

impl DiagnosticReport {
    /// Attaches a help text (typically the rule's help link).
    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

impl From<&Diagnostic> for DiagnosticReport {
    fn from(diagnostic: &Diagnostic) -> Self {
        Self {
            message: format!("[{}] {}", diagnostic.code, diagnostic.message),
            help: None,
            span: SourceSpan::from((diagnostic.span.start, diagnostic.span.len)),
            label_message: diagnostic.name.clone(),
        }
    }
}

//! # style-lint-rules
//!
//! Built-in rules for style-lint.
//!
//! ## Available Rules
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | SL001 | `bracket-spacing` | Forbids spaces adjacent to opening square brackets |
//! | SL002 | `attribute-bracket-spacing` | Forbids a space after an attribute list's opening bracket |
//! | SL003 | `comment-lead-in` | Requires a space between `//` and the comment text |
//!
//! ## Usage
//!
//! ```ignore
//! use style_lint_core::Analyzer;
//! use style_lint_rules::default_rules;
//!
//! let analyzer = Analyzer::builder()
//!     .rules(default_rules())
//!     .build()?;
//! let result = analyzer.analyze(&tree);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod adjacency;
pub mod boundaries;

mod attribute_bracket_spacing;
mod bracket_spacing;
mod comment_lead_in;
mod presets;

pub use attribute_bracket_spacing::AttributeBracketSpacing;
pub use bracket_spacing::BracketSpacing;
pub use comment_lead_in::CommentLeadIn;
pub use presets::default_rules;

/// Re-export core types for convenience.
pub use style_lint_core::{Rule, RuleBox, RuleDescriptor, Severity};

//! # sharpstyle-base
//!
//! Core library for C# style analysis: lossless parsing, ordering and
//! placement rules, and code fixes.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! analyzer  → Dispatch table, per-tree checks, parallel multi-file checks
//!   ↓
//! fix       → Path-copying fixes for reported diagnostics
//!   ↓
//! rules     → Rule identities, ordering comparator, placement predicate
//!   ↓
//! diagnostics / config → Diagnostic values and wire records, options
//!   ↓
//! parser    → Logos lexer, recursive-descent parser, typed AST
//!   ↓
//! base      → Primitives (Position, Span, LineIndex, TextRange)
//! ```
//!
//! ## Example
//!
//! ```
//! use sharpstyle::{Analyzer, RuleId};
//!
//! let source = "using static System.Math;\nusing static System.Array;\n";
//! let analyzer = Analyzer::default();
//! let diagnostics = analyzer.check_source(source);
//!
//! assert_eq!(diagnostics.len(), 1);
//! assert_eq!(diagnostics[0].rule, RuleId::StaticUsingOrder);
//! assert_eq!(diagnostics[0].args, ["System.Math", "System.Array"]);
//! ```

// ============================================================================
// MODULES (dependency order: base → parser → rules → fix → analyzer)
// ============================================================================

/// Foundation types: Position, Span, LineIndex, TextRange
pub mod base;

/// Parser: Logos lexer, recursive-descent parser, typed AST
pub mod parser;

/// Diagnostic values, severities and the serialized record form
pub mod diagnostics;

/// Analyzer options and configuration errors
pub mod config;

/// Style rules and the comparator/predicate library they share
pub mod rules;

/// Code fixes for reported diagnostics
pub mod fix;

/// Rule dispatch over syntax trees
pub mod analyzer;

// Re-export foundation types
pub use base::{LineIndex, Position, Span, TextRange, TextSize};

// Re-export the main API
pub use analyzer::Analyzer;
pub use config::{AnalyzerOptions, ConfigError};
pub use diagnostics::{Diagnostic, DiagnosticCollector, DiagnosticRecord, Severity};
pub use fix::FixError;
pub use parser::{Parse, SyntaxError, SyntaxKind, SyntaxNode, parse};
pub use rules::{OrderKey, Rule, RuleId};

//! Style violation reporting.
//!
//! A [`Diagnostic`] is an immutable value naming the rule, where it fired and
//! the arguments substituted into the rule's message template. The
//! [`DiagnosticRecord`] form is the stable wire shape handed to hosts.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::base::{Position, Span, TextRange};
use crate::rules::RuleId;

// ============================================================================
// DIAGNOSTIC TYPES
// ============================================================================

/// Severity level of a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
    Hint,
}

/// A style violation with location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// The rule that produced this diagnostic.
    pub rule: RuleId,
    /// Severity level.
    pub severity: Severity,
    /// 1-based line/column span of the anchor.
    pub span: Span,
    /// Byte range of the anchor, used by fixes to find it again.
    pub range: TextRange,
    /// Arguments substituted into the message template, in order.
    pub args: Vec<SmolStr>,
}

impl Diagnostic {
    /// Create a diagnostic with the rule's default severity and no arguments.
    pub fn new(rule: RuleId, range: TextRange, span: Span) -> Self {
        Self {
            rule,
            severity: rule.default_severity(),
            span,
            range,
            args: Vec::new(),
        }
    }

    /// Set the message arguments.
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SmolStr>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Override the severity.
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Start position of the anchor.
    pub fn location(&self) -> Position {
        self.span.start
    }

    /// The rendered message.
    pub fn message(&self) -> String {
        self.rule.render(&self.args)
    }

    pub fn to_record(&self) -> DiagnosticRecord {
        DiagnosticRecord {
            rule_id: self.rule,
            location: self.location(),
            message_arguments: self.args.iter().map(|a| a.to_string()).collect(),
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}: {}", self.location(), self.rule, self.message())
    }
}

/// Wire form of a diagnostic:
/// `{ "ruleId": "SA1217", "location": { "line": 5, "column": 5 }, "messageArguments": [...] }`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticRecord {
    pub rule_id: RuleId,
    pub location: Position,
    pub message_arguments: Vec<String>,
}

// ============================================================================
// DIAGNOSTIC COLLECTOR
// ============================================================================

/// Collects diagnostics while rules run over a tree.
#[derive(Clone, Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    /// Create a new empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a diagnostic.
    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Get all diagnostics.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Diagnostics produced by one rule.
    pub fn diagnostics_for_rule(&self, rule: RuleId) -> Vec<&Diagnostic> {
        self.diagnostics.iter().filter(|d| d.rule == rule).collect()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Get the number of errors.
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count()
    }

    /// Get the number of warnings.
    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .count()
    }

    /// Take all diagnostics, leaving the collector empty.
    pub fn take(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }
}

//! Error types for fix application.

use thiserror::Error;

use crate::rules::RuleId;

/// Errors that can occur when applying a fix.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FixError {
    /// The diagnostic no longer matches the tree (already fixed, edited, or
    /// raised against a different tree).
    #[error("{rule}: fix not applicable: {reason}")]
    NotApplicable { rule: RuleId, reason: String },

    /// The rule that produced the diagnostic is not enabled.
    #[error("{0}: rule is disabled")]
    RuleDisabled(RuleId),
}

impl FixError {
    /// Create a not-applicable error.
    pub fn not_applicable(rule: RuleId, reason: impl Into<String>) -> Self {
        Self::NotApplicable {
            rule,
            reason: reason.into(),
        }
    }

    pub fn is_not_applicable(&self) -> bool {
        matches!(self, Self::NotApplicable { .. })
    }
}

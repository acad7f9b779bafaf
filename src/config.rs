//! Analyzer options

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::diagnostics::Severity;
use crate::rules::{OrderKey, RuleId};

/// Errors raised while reading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Malformed JSON, unknown field, or unknown rule id in a rule table.
    #[error("invalid configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// A rule id that names no known rule.
    #[error("unknown rule id: {0}")]
    UnknownRule(String),
}

impl ConfigError {
    /// Create an unknown rule error.
    pub fn unknown_rule(id: impl Into<String>) -> Self {
        Self::UnknownRule(id.into())
    }
}

/// Options controlling which rules run and how they report
///
/// ```json
/// {
///   "disabledRules": ["SA1210"],
///   "severityOverrides": { "SA1112": "error" },
///   "aliasOrderKey": "target"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct AnalyzerOptions {
    /// Rules that are not run
    pub disabled_rules: FxHashSet<RuleId>,
    /// Severity to report instead of a rule's default
    pub severity_overrides: FxHashMap<RuleId, Severity>,
    /// Sort key for alias directives (SA1211)
    pub alias_order_key: OrderKey,
}

impl Default for AnalyzerOptions {
    fn default() -> Self {
        Self {
            disabled_rules: FxHashSet::default(),
            severity_overrides: FxHashMap::default(),
            alias_order_key: OrderKey::AliasName,
        }
    }
}

impl AnalyzerOptions {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn is_enabled(&self, rule: RuleId) -> bool {
        !self.disabled_rules.contains(&rule)
    }

    /// Effective severity for diagnostics of `rule`
    pub fn severity(&self, rule: RuleId) -> Severity {
        self.severity_overrides
            .get(&rule)
            .copied()
            .unwrap_or_else(|| rule.default_severity())
    }

    /// Disable a rule
    pub fn disable(mut self, rule: RuleId) -> Self {
        self.disabled_rules.insert(rule);
        self
    }

    /// Report `rule` with `severity`
    pub fn with_severity(mut self, rule: RuleId, severity: Severity) -> Self {
        self.severity_overrides.insert(rule, severity);
        self
    }

    /// Sort alias directives by `key`
    pub fn with_alias_order_key(mut self, key: OrderKey) -> Self {
        self.alias_order_key = key;
        self
    }
}

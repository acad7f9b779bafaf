//! Style rules.
//!
//! The rule set is closed: [`Rule`] has one case per rule identity and each
//! case declares the syntax kinds it wants to see. The analyzer builds a
//! kind → rules table from [`Rule::interests`] and calls [`Rule::check`] once
//! per matching node.
//!
//! ## Rule catalogue
//!
//! | Id     | Checks                                                        |
//! |--------|---------------------------------------------------------------|
//! | SA1112 | empty parameter/argument list closed on a later line          |
//! | SA1210 | plain `using` directives out of alphabetical order            |
//! | SA1211 | `using Alias = ...` directives out of alphabetical order      |
//! | SA1217 | `using static` directives out of alphabetical order           |

mod closing_parenthesis;
mod ordering;
mod using_order;

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::base::{LineIndex, Span, TextRange};
use crate::config::{AnalyzerOptions, ConfigError};
use crate::diagnostics::{Diagnostic, DiagnosticCollector, Severity};
use crate::fix::{self, FixError};
use crate::parser::{SyntaxKind, SyntaxNode};

pub use closing_parenthesis::is_misplaced;
pub use ordering::{Inversion, OrderKey, UsingBucket, UsingOrdering};

// ============================================================================
// RULE IDENTITY
// ============================================================================

/// Stable identity of a rule, serialized as its catalogue code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RuleId {
    #[serde(rename = "SA1112")]
    ClosingParenthesisPlacement,
    #[serde(rename = "SA1210")]
    NamespaceUsingOrder,
    #[serde(rename = "SA1211")]
    AliasUsingOrder,
    #[serde(rename = "SA1217")]
    StaticUsingOrder,
}

impl RuleId {
    pub const ALL: [RuleId; 4] = [
        RuleId::ClosingParenthesisPlacement,
        RuleId::NamespaceUsingOrder,
        RuleId::AliasUsingOrder,
        RuleId::StaticUsingOrder,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RuleId::ClosingParenthesisPlacement => "SA1112",
            RuleId::NamespaceUsingOrder => "SA1210",
            RuleId::AliasUsingOrder => "SA1211",
            RuleId::StaticUsingOrder => "SA1217",
        }
    }

    /// Short human-readable title
    pub fn title(&self) -> &'static str {
        match self {
            RuleId::ClosingParenthesisPlacement => {
                "Closing parenthesis must be on line of opening parenthesis"
            }
            RuleId::NamespaceUsingOrder => {
                "Using directives must be ordered alphabetically by namespace"
            }
            RuleId::AliasUsingOrder => "Using alias directives must be ordered alphabetically",
            RuleId::StaticUsingOrder => "Using static directives must be ordered alphabetically",
        }
    }

    /// Message template; `{0}`, `{1}` are replaced by the diagnostic arguments
    pub fn message_format(&self) -> &'static str {
        match self {
            RuleId::ClosingParenthesisPlacement => {
                "Closing parenthesis must be on line of opening parenthesis"
            }
            RuleId::NamespaceUsingOrder => {
                "Using directive for '{0}' must appear after directive for '{1}'"
            }
            RuleId::AliasUsingOrder => {
                "Using alias directive for '{0}' must appear after using alias directive for '{1}'"
            }
            RuleId::StaticUsingOrder => {
                "The using static directive for '{0}' must appear after \
                 the using static directive for '{1}'"
            }
        }
    }

    pub fn render(&self, args: &[SmolStr]) -> String {
        let mut message = self.message_format().to_string();
        for (idx, arg) in args.iter().enumerate() {
            message = message.replace(&format!("{{{idx}}}"), arg);
        }
        message
    }

    pub fn default_severity(&self) -> Severity {
        Severity::Warning
    }
}

impl std::fmt::Display for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RuleId {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RuleId::ALL
            .into_iter()
            .find(|id| id.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConfigError::unknown_rule(s))
    }
}

// ============================================================================
// RULE CONTEXT
// ============================================================================

/// Per-tree information shared by all rules during one check.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub line_index: &'a LineIndex,
}

impl<'a> RuleContext<'a> {
    pub fn new(line_index: &'a LineIndex) -> Self {
        Self { line_index }
    }

    pub fn span(&self, range: TextRange) -> Span {
        self.line_index.span(range)
    }
}

// ============================================================================
// RULES
// ============================================================================

const USING_SCOPE_KINDS: &[SyntaxKind] = &[
    SyntaxKind::SOURCE_FILE,
    SyntaxKind::NAMESPACE_BODY,
    SyntaxKind::FILE_SCOPED_NAMESPACE_DECL,
];

const LIST_OWNER_KINDS: &[SyntaxKind] = &[
    SyntaxKind::METHOD_DECL,
    SyntaxKind::CONSTRUCTOR_DECL,
    SyntaxKind::INDEXER_DECL,
    SyntaxKind::INVOCATION_EXPR,
    SyntaxKind::OBJECT_CREATION_EXPR,
];

/// A configured rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rule {
    NamespaceUsingOrder,
    AliasUsingOrder { key: OrderKey },
    StaticUsingOrder,
    ClosingParenthesisPlacement,
}

impl Rule {
    /// Every rule with its default settings
    pub fn all() -> Vec<Rule> {
        RuleId::ALL
            .into_iter()
            .map(|id| Rule::configured(id, &AnalyzerOptions::default()))
            .collect()
    }

    /// The rule for `id` with settings taken from `options`
    pub fn configured(id: RuleId, options: &AnalyzerOptions) -> Rule {
        match id {
            RuleId::ClosingParenthesisPlacement => Rule::ClosingParenthesisPlacement,
            RuleId::NamespaceUsingOrder => Rule::NamespaceUsingOrder,
            RuleId::AliasUsingOrder => Rule::AliasUsingOrder {
                key: options.alias_order_key,
            },
            RuleId::StaticUsingOrder => Rule::StaticUsingOrder,
        }
    }

    pub fn id(&self) -> RuleId {
        match self {
            Rule::NamespaceUsingOrder => RuleId::NamespaceUsingOrder,
            Rule::AliasUsingOrder { .. } => RuleId::AliasUsingOrder,
            Rule::StaticUsingOrder => RuleId::StaticUsingOrder,
            Rule::ClosingParenthesisPlacement => RuleId::ClosingParenthesisPlacement,
        }
    }

    /// Syntax kinds this rule is invoked on
    pub fn interests(&self) -> &'static [SyntaxKind] {
        match self {
            Rule::ClosingParenthesisPlacement => LIST_OWNER_KINDS,
            _ => USING_SCOPE_KINDS,
        }
    }

    /// The bucket and key an ordering rule compares by
    pub fn ordering(&self) -> Option<UsingOrdering> {
        match self {
            Rule::NamespaceUsingOrder => {
                Some(UsingOrdering::new(UsingBucket::Namespace, OrderKey::Target))
            }
            Rule::AliasUsingOrder { key } => Some(UsingOrdering::new(UsingBucket::Alias, *key)),
            Rule::StaticUsingOrder => {
                Some(UsingOrdering::new(UsingBucket::Static, OrderKey::Target))
            }
            Rule::ClosingParenthesisPlacement => None,
        }
    }

    pub fn check(&self, node: &SyntaxNode, ctx: &RuleContext<'_>, sink: &mut DiagnosticCollector) {
        match self.ordering() {
            Some(ordering) => using_order::check_scope(self.id(), &ordering, node, ctx, sink),
            None => closing_parenthesis::check_owner(node, ctx, sink),
        }
    }

    /// Apply this rule's fix for `diagnostic`, returning the new root
    pub fn fix(&self, root: &SyntaxNode, diagnostic: &Diagnostic) -> Result<SyntaxNode, FixError> {
        if diagnostic.rule != self.id() {
            return Err(FixError::not_applicable(
                self.id(),
                format!("diagnostic belongs to {}", diagnostic.rule),
            ));
        }
        match self.ordering() {
            Some(ordering) => fix::reorder_usings(self.id(), &ordering, root, diagnostic),
            None => fix::join_closing_delimiter(root, diagnostic),
        }
    }
}

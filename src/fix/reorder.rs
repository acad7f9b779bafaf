//! Reordering fix for the using-directive ordering rules.

use tracing::debug;

use super::{FixError, rebuild, to_green};
use crate::diagnostics::Diagnostic;
use crate::parser::{AstNode, SyntaxElement, SyntaxNode, UsingDirective};
use crate::rules::{RuleId, UsingOrdering};

/// Sort the governed directives of the diagnostic's scope.
///
/// The sort is stable and only permutes the governed directives among the
/// slots they already occupy, so other directives, blank lines and
/// indentation stay where they are. Each directive moves together with its
/// own comments.
pub(crate) fn reorder_usings(
    rule: RuleId,
    ordering: &UsingOrdering,
    root: &SyntaxNode,
    diagnostic: &Diagnostic,
) -> Result<SyntaxNode, FixError> {
    let directive = root
        .descendants()
        .filter_map(UsingDirective::cast)
        .find(|d| d.anchor_range() == diagnostic.range)
        .ok_or_else(|| {
            FixError::not_applicable(rule, "no using directive at the reported location")
        })?;

    if !ordering.governs(&directive) {
        return Err(FixError::not_applicable(rule, "directive is not governed by this rule"));
    }
    let scope = directive
        .scope()
        .ok_or_else(|| FixError::not_applicable(rule, "directive is not in a using scope"))?;

    let still_inverted = ordering
        .inversions(&scope)
        .iter()
        .any(|inversion| inversion.earlier == directive);
    if !still_inverted {
        return Err(FixError::not_applicable(rule, "directive is already in order"));
    }

    let governed = ordering.governed(&scope);
    let mut sorted: Vec<&(UsingDirective, _)> = governed.iter().collect();
    sorted.sort_by(|a, b| a.1.as_bytes().cmp(b.1.as_bytes()));

    let scope_node = scope.syntax();
    let mut replacements = sorted.into_iter().map(|(d, _)| d.syntax().clone());
    let children = scope_node
        .children_with_tokens()
        .map(|element| {
            let governed_slot = element
                .as_node()
                .is_some_and(|node| governed.iter().any(|(d, _)| d.syntax() == node));
            let element = if governed_slot {
                replacements.next().map(SyntaxElement::Node).unwrap_or(element)
            } else {
                element
            };
            to_green(&element)
        })
        .collect();

    debug!(
        "{}: reordered {} directives in {:?}",
        rule,
        governed.len(),
        scope_node.kind()
    );
    Ok(rebuild(scope_node, children))
}

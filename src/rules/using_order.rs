//! SA1210 / SA1211 / SA1217: using directives ordered within their bucket.

use tracing::trace;

use super::{RuleContext, RuleId, UsingOrdering};
use crate::diagnostics::{Diagnostic, DiagnosticCollector};
use crate::parser::{AstNode, SyntaxNode, UsingScope};

/// Report every inversion of the governed bucket in one scope, anchored at
/// the earlier directive of each pair.
pub(super) fn check_scope(
    rule: RuleId,
    ordering: &UsingOrdering,
    node: &SyntaxNode,
    ctx: &RuleContext<'_>,
    sink: &mut DiagnosticCollector,
) {
    let Some(scope) = UsingScope::cast(node.clone()) else {
        return;
    };

    let namespace = scope.namespace_name();
    for inversion in ordering.inversions(&scope) {
        let range = inversion.earlier.anchor_range();
        trace!(
            "{}: '{}' before '{}' at {:?} in {}",
            rule,
            inversion.earlier_key,
            inversion.later_key,
            range,
            namespace.as_deref().unwrap_or("<compilation unit>")
        );
        sink.add(
            Diagnostic::new(rule, range, ctx.span(range))
                .with_args([inversion.earlier_key, inversion.later_key]),
        );
    }
}

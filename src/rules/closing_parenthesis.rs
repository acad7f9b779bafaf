//! SA1112: an empty parameter or argument list keeps its closing delimiter on
//! the line of the opening delimiter.

use tracing::trace;

use super::{RuleContext, RuleId};
use crate::diagnostics::{Diagnostic, DiagnosticCollector};
use crate::parser::{DelimitedList, DelimiterPair, SyntaxNode};

/// True if the pair encloses nothing and the close delimiter sits on a later
/// line than the open delimiter.
pub fn is_misplaced(pair: &DelimiterPair) -> bool {
    if pair.has_content_between {
        return false;
    }
    let mut token = pair.open.next_token();
    while let Some(current) = token {
        if current == pair.close {
            return false;
        }
        if current.text().contains('\n') {
            return true;
        }
        token = current.next_token();
    }
    false
}

pub(super) fn check_owner(
    node: &SyntaxNode,
    ctx: &RuleContext<'_>,
    sink: &mut DiagnosticCollector,
) {
    let Some(pair) = DelimitedList::of_owner(node).and_then(|list| list.delimiters()) else {
        return;
    };
    if !is_misplaced(&pair) {
        return;
    }

    let range = pair.close.text_range();
    trace!(
        "{}: close delimiter at {:?} owned by {:?}",
        RuleId::ClosingParenthesisPlacement,
        range,
        node.kind()
    );
    sink.add(Diagnostic::new(
        RuleId::ClosingParenthesisPlacement,
        range,
        ctx.span(range),
    ));
}

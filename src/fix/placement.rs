//! Placement fix for SA1112: pull the closing delimiter up to the opening one.

use rowan::{GreenNode, GreenToken, NodeOrToken};
use tracing::debug;

use super::{FixError, GreenElement, rebuild, to_green};
use crate::diagnostics::Diagnostic;
use crate::parser::{AstNode, DelimitedList, SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken};
use crate::rules::{RuleId, is_misplaced};

const RULE: RuleId = RuleId::ClosingParenthesisPlacement;

/// Rebuild the empty list as `()` (or `[]`) on the opening line. Comments
/// that sat between the delimiters follow the closing delimiter.
pub(crate) fn join_closing_delimiter(
    root: &SyntaxNode,
    diagnostic: &Diagnostic,
) -> Result<SyntaxNode, FixError> {
    if !root.text_range().contains_range(diagnostic.range) || diagnostic.range.is_empty() {
        return Err(FixError::not_applicable(RULE, "location is outside the tree"));
    }
    let close = match root.covering_element(diagnostic.range) {
        NodeOrToken::Token(token) if token.text_range() == diagnostic.range => token,
        _ => {
            return Err(FixError::not_applicable(
                RULE,
                "no closing delimiter at the reported location",
            ));
        }
    };

    let list_node = close
        .parent()
        .ok_or_else(|| FixError::not_applicable(RULE, "delimiter has no parent"))?;
    let owner = list_node
        .parent()
        .ok_or_else(|| FixError::not_applicable(RULE, "list has no owner"))?;
    let list = DelimitedList::of_owner(&owner)
        .filter(|list| list.syntax() == &list_node)
        .ok_or_else(|| FixError::not_applicable(RULE, "delimiter does not close a checked list"))?;
    let pair = list
        .delimiters()
        .filter(|pair| pair.close == close)
        .ok_or_else(|| FixError::not_applicable(RULE, "list is not delimited"))?;
    if !is_misplaced(&pair) {
        return Err(FixError::not_applicable(RULE, "closing delimiter is already placed"));
    }

    let comments: Vec<SyntaxToken> = list_node
        .descendants_with_tokens()
        .filter_map(|e| e.into_token())
        .filter(|t| t.kind().is_comment())
        .collect();
    let indent = line_indent(&pair.open);
    let continues_on_same_line = close
        .next_token()
        .is_some_and(|next| !(next.kind() == SyntaxKind::WHITESPACE && next.text().contains('\n')));

    let joined: GreenElement = NodeOrToken::Node(GreenNode::new(
        list_node.kind().into(),
        vec![
            to_green(&SyntaxElement::Token(pair.open.clone())),
            to_green(&SyntaxElement::Token(close.clone())),
        ],
    ));

    // comments follow the list as siblings inside the owner
    let mut trailing: Vec<GreenElement> = Vec::new();
    let mut at_line_start = false;
    for (idx, comment) in comments.iter().enumerate() {
        if !at_line_start {
            trailing.push(whitespace(" "));
        }
        trailing.push(to_green(&SyntaxElement::Token(comment.clone())));
        at_line_start = false;

        let is_last = idx + 1 == comments.len();
        if comment.kind() == SyntaxKind::LINE_COMMENT && (!is_last || continues_on_same_line) {
            trailing.push(whitespace(&format!("\n{indent}")));
            at_line_start = true;
        }
    }

    let mut children: Vec<GreenElement> = Vec::new();
    for element in owner.children_with_tokens() {
        if element.as_node() == Some(&list_node) {
            children.push(joined.clone());
            children.append(&mut trailing);
        } else {
            children.push(to_green(&element));
        }
    }

    debug!(
        "{}: joined {:?} onto line of {:?}, {} comment(s) relocated",
        RULE,
        close.text_range(),
        pair.open.text_range(),
        comments.len()
    );
    Ok(rebuild(&owner, children))
}

fn whitespace(text: &str) -> GreenElement {
    NodeOrToken::Token(GreenToken::new(SyntaxKind::WHITESPACE.into(), text))
}

/// Leading whitespace of the line the token starts on
fn line_indent(token: &SyntaxToken) -> String {
    let mut first = token.clone();
    while let Some(prev) = first.prev_token() {
        if let Some(newline) = prev.text().rfind('\n') {
            return leading_blanks(&prev.text()[newline + 1..]).to_string();
        }
        first = prev;
    }
    leading_blanks(first.text()).to_string()
}

fn leading_blanks(text: &str) -> &str {
    let rest = text.trim_start_matches([' ', '\t']);
    &text[..text.len() - rest.len()]
}

//! Code fixes.
//!
//! A fix takes the tree a diagnostic was raised against and returns a new
//! root. Edits are path-copying: the edited node is rebuilt as a new green
//! node and [`rowan::SyntaxNode::replace_with`] re-creates only its
//! ancestors, every other subtree is shared with the input tree.
//!
//! Each fix re-validates its diagnostic first. A diagnostic that no longer
//! describes a violation yields [`FixError::NotApplicable`], so applying a
//! fix twice is harmless.

mod error;
mod placement;
mod reorder;

pub use error::FixError;
pub(crate) use placement::join_closing_delimiter;
pub(crate) use reorder::reorder_usings;

use rowan::{GreenNode, NodeOrToken};

use crate::parser::{SyntaxElement, SyntaxNode};

type GreenElement = NodeOrToken<GreenNode, rowan::GreenToken>;

fn to_green(element: &SyntaxElement) -> GreenElement {
    match element {
        NodeOrToken::Node(node) => NodeOrToken::Node(node.green().into_owned()),
        NodeOrToken::Token(token) => NodeOrToken::Token(token.green().to_owned()),
    }
}

/// Replace `node` with a node of the same kind built from `children` and
/// return the new root.
fn rebuild(node: &SyntaxNode, children: Vec<GreenElement>) -> SyntaxNode {
    let green = GreenNode::new(node.kind().into(), children);
    SyntaxNode::new_root(node.replace_with(green))
}

//! Prefix rendering of trees.
//!
//! A leaf renders as its value; any other node renders as
//! `( value left right )` with an absent child left out.

use std::fmt::Write;

use crate::NodeRef;

/// Renders the tree in parenthesized prefix form.
///
/// ```rust
/// use arbor_tree::{TreeArena, Side, attach_child, render::prefix};
///
/// let arena = TreeArena::new();
/// let sqr = arena.node("sqr");
/// attach_child(arena.node("2"), sqr, Side::Right).unwrap();
///
/// assert_eq!(prefix(Some(sqr)), "( sqr 2 )");
/// ```
pub fn prefix(root: Option<NodeRef<'_>>) -> String {
    render(root, |out, node| out.push_str(node.value()))
}

/// Renders the tree in parenthesized prefix form with each value followed
/// by its balance factor, e.g. `( N[1] U[0] )`.
pub fn prefix_with_balance(root: Option<NodeRef<'_>>) -> String {
    render(root, |out, node| {
        // Writing into a String cannot fail.
        let _ = write!(out, "{}[{}]", node.value(), node.balance());
    })
}

/// One step of a prefix rendering.
enum Frame<'a> {
    Node(NodeRef<'a>),
    Space,
    Close,
}

fn render<'a>(root: Option<NodeRef<'a>>, label: impl Fn(&mut String, NodeRef<'a>)) -> String {
    let mut out = String::new();
    let mut stack: Vec<Frame<'a>> = root.map(Frame::Node).into_iter().collect();

    while let Some(frame) = stack.pop() {
        match frame {
            Frame::Node(node) if node.is_leaf() => label(&mut out, node),
            Frame::Node(node) => {
                out.push_str("( ");
                label(&mut out, node);
                stack.push(Frame::Close);
                for child in [node.right(), node.left()].into_iter().flatten() {
                    stack.push(Frame::Node(child));
                    stack.push(Frame::Space);
                }
            }
            Frame::Space => out.push(' '),
            Frame::Close => out.push_str(" )"),
        }
    }
    out
}

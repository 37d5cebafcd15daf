//! Full-tree visitor over a parsed Python file.
//!
//! [`walk`] visits every node, depth first, and calls back only for the node
//! kinds that have a typed view. Everything else is passed over untouched.

use tree_sitter::Node;

use crate::node::{Assignment, ScopeNode};

pub trait Visit<'t> {
    /// Module, function, async function, or class.
    fn visit_scope(&mut self, _scope: ScopeNode<'t>) {}

    /// Any `assignment` node, including nested ones in `a = b = 1`.
    fn visit_assignment(&mut self, _assign: Assignment<'t>) {}

    /// A `#` comment.
    fn visit_comment(&mut self, _comment: Node<'t>) {}

    /// A `string` node: plain, bytes, raw or f-string, including each part
    /// of an implicit concatenation.
    fn visit_string(&mut self, _string: Node<'t>) {}
}

/// Walk the subtree under `root` with an explicit cursor, so deeply nested
/// sources don't grow the call stack.
pub fn walk<'t, V: Visit<'t> + ?Sized>(root: Node<'t>, visitor: &mut V) {
    let mut cursor = root.walk();

    loop {
        dispatch(cursor.node(), visitor);

        if cursor.goto_first_child() {
            continue;
        }
        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return;
            }
        }
    }
}

fn dispatch<'t, V: Visit<'t> + ?Sized>(node: Node<'t>, visitor: &mut V) {
    match node.kind() {
        "module" | "function_definition" | "class_definition" => {
            if let Some(scope) = ScopeNode::from_node(node) {
                visitor.visit_scope(scope);
            }
        }
        "assignment" => {
            if let Some(assign) = Assignment::from_node(node) {
                visitor.visit_assignment(assign);
            }
        }
        "comment" => visitor.visit_comment(node),
        "string" => visitor.visit_string(node),
        _ => {}
    }
}

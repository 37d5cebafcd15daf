//! Removal of bare literal statements from scope bodies.
//!
//! `"""doc"""`, `'note'`, `42` or `...` standing alone as a statement in a
//! module, function, or class body is dropped wherever it sits in the body,
//! not only in docstring position. Bodies of `if`/`for`/`while`/`with`/`try`
//! are not scopes and keep their literals.

use std::ops::Range;

use ps_ast::{Edit, Node, ScopeNode, StatementNode};

/// Record a deletion for every bare literal statement in `scope`. Returns
/// how many were found.
pub fn remove_bare_literals(scope: ScopeNode<'_>, source: &str, edits: &mut Vec<Edit>) -> usize {
    let mut removed = 0;
    for stmt in scope.statements() {
        if StatementNode::classify(stmt, source).is_bare_literal() {
            edits.push(Edit::delete(removal_range(stmt)));
            removed += 1;
        }
    }
    removed
}

/// The statement plus the `;` joining it to a neighbour on the same line.
fn removal_range(stmt: Node<'_>) -> Range<usize> {
    // `"doc"; x = 1` → `x = 1`
    if let Some(semi) = stmt.next_sibling().filter(|n| n.kind() == ";") {
        let end = match next_statement(semi) {
            Some(next) if next.start_position().row == semi.end_position().row => {
                next.start_byte()
            }
            _ => semi.end_byte(),
        };
        return stmt.start_byte()..end;
    }

    // `x = 1; "doc"` → `x = 1`
    if let Some(semi) = stmt.prev_sibling().filter(|n| n.kind() == ";") {
        return semi.start_byte()..stmt.end_byte();
    }

    stmt.byte_range()
}

fn next_statement(node: Node<'_>) -> Option<Node<'_>> {
    let mut next = node.next_named_sibling();
    while let Some(n) = next {
        if !n.is_extra() {
            return Some(n);
        }
        next = n.next_named_sibling();
    }
    None
}

//! Blanking of literal-valued assignments.
//!
//! `NAME = "long text"` → `NAME = ''`. Any literal is replaced, whatever
//! its type, so `DEBUG = True` becomes `DEBUG = ''` as well. The target and
//! the statement itself stay where they are.

use ps_ast::{Assignment, Edit, Expr};

/// Replacement for every blanked value.
pub const EMPTY_STRING: &str = "''";

/// Record the blanking of `assign`'s value if it is a literal. Annotated
/// assignments (`x: int = 1`) are left alone.
pub fn blank_literal_value(assign: Assignment<'_>, source: &str, edits: &mut Vec<Edit>) -> bool {
    if assign.is_annotated() {
        return false;
    }

    match assign.value_expr(source) {
        Some(Expr::Literal(lit)) => {
            edits.push(Edit::replace(lit.node.byte_range(), EMPTY_STRING));
            true
        }
        _ => false,
    }
}

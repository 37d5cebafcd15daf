//! Python syntax tree views for pystrip.
//!
//! Re-exports the tree-sitter node types and adds:
//! - [`SyntaxTree`]: owned source + parse tree + pending edits
//! - [`ScopeNode`], [`StatementNode`], [`Expr`]: typed views over the
//!   handful of node kinds the stripper cares about
//! - [`EditSet`]: byte-range edits applied at serialization time
//! - [`Visit`] / [`walk`]: full-tree visitor dispatching on those views

pub use tree_sitter::{Node, Tree};

use serde::{Deserialize, Serialize};

pub mod edit;
pub mod node;
pub mod tree;
pub mod visit;

pub use edit::{Edit, EditSet};
pub use node::{Assignment, Expr, LiteralConstant, LiteralKind, ScopeKind, ScopeNode, StatementNode};
pub use tree::SyntaxTree;
pub use visit::{walk, Visit};

/// File extension of the sources the driver picks up in directory mode.
pub const PYTHON_EXTENSION: &str = "py";

/// Options controlling the text-level pass that runs after serialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StripOptions {
    /// Drop lines that are empty once trailing whitespace is trimmed.
    pub remove_newlines: bool,
}

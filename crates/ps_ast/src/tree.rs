//! The owned parse of one source file.

use tree_sitter::{Node, Tree};

use crate::edit::EditSet;

/// Source text, its tree-sitter parse, and the edits recorded against it.
///
/// The tree itself is never modified: transforms push edits, and the
/// serializer applies them to the original source in one pass.
#[derive(Debug, Clone)]
pub struct SyntaxTree {
    source: String,
    tree: Tree,
    edits: EditSet,
}

impl SyntaxTree {
    pub fn new(source: String, tree: Tree) -> Self {
        Self {
            source,
            tree,
            edits: EditSet::new(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    pub fn edits(&self) -> &EditSet {
        &self.edits
    }

    pub fn edits_mut(&mut self) -> &mut EditSet {
        &mut self.edits
    }
}

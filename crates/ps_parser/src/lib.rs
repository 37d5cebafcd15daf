//! Python parser/serializer adapter for pystrip.
//!
//! Wraps tree-sitter-python:
//!
//! - [`parse`] turns source text into a [`SyntaxTree`](ps_ast::SyntaxTree),
//!   rejecting anything the grammar had to recover from.
//! - [`serialize`] turns a tree and its recorded edits back into canonical
//!   source: comments dropped, emptied bodies given a `pass`. [`render`]
//!   also reports which output lines sit inside multi-line strings.

pub mod parse;
pub mod serialize;

pub use parse::{check, is_valid, parse, ParseError};
pub use serialize::{render, serialize, Rendered};

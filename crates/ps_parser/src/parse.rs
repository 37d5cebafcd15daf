use ps_ast::{Node, SyntaxTree};
use tree_sitter::{LanguageError, Parser};

/// Longest excerpt of offending source quoted in a [`ParseError`].
const EXCERPT_LEN: usize = 40;

/// Source text that is not valid Python.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("invalid syntax at line {line}, column {column}: `{excerpt}`")]
    Syntax {
        line: usize,
        column: usize,
        excerpt: String,
    },

    #[error("expected `{expected}` at line {line}, column {column}")]
    Missing {
        line: usize,
        column: usize,
        expected: String,
    },

    #[error("parser produced no tree")]
    NoTree,

    #[error("failed to load the Python grammar: {0}")]
    Language(#[from] LanguageError),
}

impl ParseError {
    /// 1-based line of the first offending node, when there is one.
    pub fn line(&self) -> Option<usize> {
        match self {
            ParseError::Syntax { line, .. } | ParseError::Missing { line, .. } => Some(*line),
            _ => None,
        }
    }
}

fn python_parser() -> Result<Parser, ParseError> {
    let mut parser = Parser::new();
    parser.set_language(&tree_sitter_python::LANGUAGE.into())?;
    Ok(parser)
}

/// Parse a Python source string.
///
/// tree-sitter always produces a tree, recovering from bad input with
/// `ERROR` and `MISSING` nodes. Any such node makes the whole parse fail,
/// and so do the Python 2 statements the grammar still accepts.
pub fn parse(source: String) -> Result<SyntaxTree, ParseError> {
    let tree = python_parser()?
        .parse(&source, None)
        .ok_or(ParseError::NoTree)?;

    if let Some(err) = first_error(tree.root_node(), &source) {
        return Err(err);
    }

    tracing::trace!(bytes = source.len(), "parsed python source");
    Ok(SyntaxTree::new(source, tree))
}

/// Parse `source` and discard the tree.
pub fn check(source: &str) -> Result<(), ParseError> {
    let tree = python_parser()?
        .parse(source, None)
        .ok_or(ParseError::NoTree)?;

    match first_error(tree.root_node(), source) {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

pub fn is_valid(source: &str) -> bool {
    check(source).is_ok()
}

/// The first reason `root` is not valid Python 3: a node the grammar had to
/// recover from, or a construct it accepts that Python 3 does not.
fn first_error(root: Node<'_>, source: &str) -> Option<ParseError> {
    first_recovery(root, source).or_else(|| first_rejected(root, source))
}

/// Depth-first search for the first `ERROR` or `MISSING` node, descending
/// only into subtrees that contain one.
fn first_recovery(root: Node<'_>, source: &str) -> Option<ParseError> {
    if !root.has_error() {
        return None;
    }

    let mut cursor = root.walk();
    loop {
        let node = cursor.node();
        if node.is_missing() {
            let pos = node.start_position();
            return Some(ParseError::Missing {
                line: pos.row + 1,
                column: pos.column + 1,
                expected: node.kind().to_string(),
            });
        }
        if node.is_error() {
            let pos = node.start_position();
            return Some(ParseError::Syntax {
                line: pos.row + 1,
                column: pos.column + 1,
                excerpt: excerpt(source, node),
            });
        }

        let descended = node.has_error() && cursor.goto_first_child();
        if descended {
            continue;
        }
        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                // has_error() on the root but nothing found below it.
                return Some(ParseError::Syntax {
                    line: 1,
                    column: 1,
                    excerpt: excerpt(source, root),
                });
            }
        }
    }
}

/// tree-sitter-python still parses a few Python 2 forms: `print x`,
/// `exec code` and `del f()`. They are statements the interpreter rejects.
fn first_rejected(root: Node<'_>, source: &str) -> Option<ParseError> {
    let mut cursor = root.walk();
    loop {
        let node = cursor.node();
        if is_rejected(node) {
            let pos = node.start_position();
            return Some(ParseError::Syntax {
                line: pos.row + 1,
                column: pos.column + 1,
                excerpt: excerpt(source, node),
            });
        }

        if cursor.goto_first_child() {
            continue;
        }
        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return None;
            }
        }
    }
}

fn is_rejected(node: Node<'_>) -> bool {
    match node.kind() {
        "print_statement" | "exec_statement" => true,
        "delete_statement" => deletes_call(node),
        _ => false,
    }
}

/// `del f()` or `del a, f()`.
fn deletes_call(node: Node<'_>) -> bool {
    let mut cursor = node.walk();
    let targets: Vec<Node<'_>> = node.named_children(&mut cursor).collect();
    targets.into_iter().any(|target| {
        if target.kind() == "expression_list" {
            let mut cursor = target.walk();
            let found = target
                .named_children(&mut cursor)
                .any(|n| n.kind() == "call");
            found
        } else {
            target.kind() == "call"
        }
    })
}

fn excerpt(source: &str, node: Node<'_>) -> String {
    let text = source.get(node.byte_range()).unwrap_or_default();
    let line = text.lines().next().unwrap_or_default().trim();
    match line.char_indices().nth(EXCERPT_LEN) {
        Some((cut, _)) => format!("{}...", &line[..cut]),
        None => line.to_string(),
    }
}

//! Typed views over tree-sitter-python nodes.
//!
//! Only the node kinds that matter for stripping get a view; everything else
//! stays an opaque [`Node`] and is never rebuilt.

use tree_sitter::Node;

/// The construct that owns an ordered body of statements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScopeKind {
    Module,
    Function,
    AsyncFunction,
    Class,
}

/// A module, function, async function, or class together with its body.
///
/// For a module the body is the module node itself; for definitions it is
/// the `block` in the `body` field.
#[derive(Debug, Clone, Copy)]
pub struct ScopeNode<'t> {
    pub kind: ScopeKind,
    pub node: Node<'t>,
    pub body: Node<'t>,
}

impl<'t> ScopeNode<'t> {
    pub fn from_node(node: Node<'t>) -> Option<Self> {
        let kind = match node.kind() {
            "module" => {
                return Some(Self {
                    kind: ScopeKind::Module,
                    node,
                    body: node,
                })
            }
            "function_definition" if is_async(node) => ScopeKind::AsyncFunction,
            "function_definition" => ScopeKind::Function,
            "class_definition" => ScopeKind::Class,
            _ => return None,
        };
        let body = node.child_by_field_name("body")?;
        Some(Self { kind, node, body })
    }

    /// Statements of the body in source order. Comments and line
    /// continuations are extras, not statements, and are left out.
    pub fn statements(&self) -> Vec<Node<'t>> {
        let mut cursor = self.body.walk();
        let statements = self
            .body
            .named_children(&mut cursor)
            .filter(|n| !n.is_extra())
            .collect();
        statements
    }
}

fn is_async(node: Node<'_>) -> bool {
    node.child(0).is_some_and(|c| c.kind() == "async")
}

/// A statement, classified by the only two shapes the stripper acts on.
#[derive(Debug, Clone, Copy)]
pub enum StatementNode<'t> {
    /// `expr` on its own line.
    Expression { node: Node<'t>, value: Expr<'t> },
    /// `target = value`, with or without an annotation.
    Assignment(Assignment<'t>),
    Other(Node<'t>),
}

impl<'t> StatementNode<'t> {
    pub fn classify(node: Node<'t>, source: &str) -> Self {
        if node.kind() != "expression_statement" {
            return StatementNode::Other(node);
        }

        // `a, b` is also an expression_statement, with several children.
        match single_child(node) {
            Some(child) => match Assignment::from_node(child) {
                Some(assign) => StatementNode::Assignment(assign),
                None => StatementNode::Expression {
                    node,
                    value: Expr::classify(child, source),
                },
            },
            None => StatementNode::Expression {
                node,
                value: Expr::Other(node),
            },
        }
    }

    pub fn node(&self) -> Node<'t> {
        match self {
            StatementNode::Expression { node, .. } => *node,
            StatementNode::Assignment(assign) => assign.node,
            StatementNode::Other(node) => *node,
        }
    }

    /// True for an expression statement whose whole value is a literal.
    pub fn is_bare_literal(&self) -> bool {
        matches!(self, StatementNode::Expression { value, .. } if value.is_literal())
    }
}

/// An `assignment` node.
///
/// `a = b = 1` nests: the outer assignment's value is the inner assignment.
/// `x: int = 1` carries an annotation and is a different statement in
/// Python's grammar.
#[derive(Debug, Clone, Copy)]
pub struct Assignment<'t> {
    pub node: Node<'t>,
    pub target: Node<'t>,
    pub annotation: Option<Node<'t>>,
    pub value: Option<Node<'t>>,
}

impl<'t> Assignment<'t> {
    pub fn from_node(node: Node<'t>) -> Option<Self> {
        if node.kind() != "assignment" {
            return None;
        }
        Some(Self {
            node,
            target: node.child_by_field_name("left")?,
            annotation: node.child_by_field_name("type"),
            value: node.child_by_field_name("right"),
        })
    }

    pub fn is_annotated(&self) -> bool {
        self.annotation.is_some()
    }

    pub fn value_expr(&self, source: &str) -> Option<Expr<'t>> {
        self.value.map(|v| Expr::classify(v, source))
    }
}

/// The kind of constant a literal expression evaluates to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiteralKind {
    Str,
    Bytes,
    Int,
    Float,
    Bool,
    None,
    Ellipsis,
}

/// A literal constant. `node` is the outermost node of the expression, so
/// `("doc")` covers the parentheses too.
#[derive(Debug, Clone, Copy)]
pub struct LiteralConstant<'t> {
    pub node: Node<'t>,
    pub kind: LiteralKind,
}

#[derive(Debug, Clone, Copy)]
pub enum Expr<'t> {
    Literal(LiteralConstant<'t>),
    Other(Node<'t>),
}

impl<'t> Expr<'t> {
    pub fn classify(node: Node<'t>, source: &str) -> Self {
        match literal_kind(unparenthesize(node), source) {
            Some(kind) => Expr::Literal(LiteralConstant { node, kind }),
            None => Expr::Other(node),
        }
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Expr::Literal(_))
    }

    pub fn node(&self) -> Node<'t> {
        match self {
            Expr::Literal(lit) => lit.node,
            Expr::Other(node) => *node,
        }
    }
}

fn single_child(node: Node<'_>) -> Option<Node<'_>> {
    if node.child_count() == 1 {
        node.named_child(0)
    } else {
        None
    }
}

fn unparenthesize(mut node: Node<'_>) -> Node<'_> {
    while node.kind() == "parenthesized_expression" {
        match only_named_child(node) {
            Some(inner) => node = inner,
            None => break,
        }
    }
    node
}

fn only_named_child(node: Node<'_>) -> Option<Node<'_>> {
    let mut cursor = node.walk();
    let mut children = node.named_children(&mut cursor).filter(|n| !n.is_extra());
    match (children.next(), children.next()) {
        (Some(only), None) => Some(only),
        _ => None,
    }
}

fn literal_kind(node: Node<'_>, source: &str) -> Option<LiteralKind> {
    match node.kind() {
        "integer" => Some(LiteralKind::Int),
        "float" => Some(LiteralKind::Float),
        "true" | "false" => Some(LiteralKind::Bool),
        "none" => Some(LiteralKind::None),
        "ellipsis" => Some(LiteralKind::Ellipsis),
        "string" => string_kind(node, source),
        "concatenated_string" => {
            let mut cursor = node.walk();
            let mut kind = None;
            for part in node.named_children(&mut cursor).filter(|n| !n.is_extra()) {
                kind = Some(string_kind(part, source)?);
            }
            kind
        }
        _ => None,
    }
}

/// Plain and bytes strings are constants; f-strings (and t-strings) are not,
/// even without any `{}` placeholder.
fn string_kind(node: Node<'_>, source: &str) -> Option<LiteralKind> {
    if node.kind() != "string" {
        return None;
    }

    let mut cursor = node.walk();
    if node
        .children(&mut cursor)
        .any(|c| c.kind() == "interpolation")
    {
        return None;
    }

    let text = source.get(node.byte_range())?;
    let prefix = &text[..text.find(['\'', '"'])?];
    if prefix.contains(['f', 'F', 't', 'T']) {
        None
    } else if prefix.contains(['b', 'B']) {
        Some(LiteralKind::Bytes)
    } else {
        Some(LiteralKind::Str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_python(source: &str) -> tree_sitter::Tree {
        let mut parser = tree_sitter::Parser::new();
        parser
            .set_language(&tree_sitter_python::LANGUAGE.into())
            .unwrap();
        parser.parse(source, None).unwrap()
    }

    fn first_statement<'t>(tree: &'t tree_sitter::Tree, source: &str) -> StatementNode<'t> {
        let node = tree.root_node().named_child(0).unwrap();
        StatementNode::classify(node, source)
    }

    fn literal_of(source: &str) -> Option<LiteralKind> {
        let tree = parse_python(source);
        match first_statement(&tree, source) {
            StatementNode::Expression {
                value: Expr::Literal(lit),
                ..
            } => Some(lit.kind),
            _ => None,
        }
    }

    #[test]
    fn literal_kinds() {
        assert_eq!(literal_of("'doc'\n"), Some(LiteralKind::Str));
        assert_eq!(literal_of("r'''raw'''\n"), Some(LiteralKind::Str));
        assert_eq!(literal_of("b'raw'\n"), Some(LiteralKind::Bytes));
        assert_eq!(literal_of("42\n"), Some(LiteralKind::Int));
        assert_eq!(literal_of("4.2\n"), Some(LiteralKind::Float));
        assert_eq!(literal_of("True\n"), Some(LiteralKind::Bool));
        assert_eq!(literal_of("None\n"), Some(LiteralKind::None));
        assert_eq!(literal_of("...\n"), Some(LiteralKind::Ellipsis));
        assert_eq!(literal_of("('a' 'b')\n"), Some(LiteralKind::Str));
    }

    #[test]
    fn non_literals() {
        assert_eq!(literal_of("f'{x}'\n"), None);
        assert_eq!(literal_of("f'plain'\n"), None);
        assert_eq!(literal_of("'a' f'{b}'\n"), None);
        assert_eq!(literal_of("-1\n"), None);
        assert_eq!(literal_of("1, 2\n"), None);
        assert_eq!(literal_of("(1, 2)\n"), None);
        assert_eq!(literal_of("print('x')\n"), None);
        assert_eq!(literal_of("name\n"), None);
    }

    #[test]
    fn assignment_views() {
        let source = "x: int = 5\n";
        let tree = parse_python(source);
        match first_statement(&tree, source) {
            StatementNode::Assignment(assign) => {
                assert!(assign.is_annotated());
                assert!(assign.value_expr(source).unwrap().is_literal());
            }
            other => panic!("expected assignment, got {other:?}"),
        }

        let source = "a = b = 'x'\n";
        let tree = parse_python(source);
        match first_statement(&tree, source) {
            StatementNode::Assignment(assign) => {
                assert!(!assign.is_annotated());
                let value = assign.value.unwrap();
                assert_eq!(value.kind(), "assignment");
                assert!(!assign.value_expr(source).unwrap().is_literal());
            }
            other => panic!("expected assignment, got {other:?}"),
        }
    }

    #[test]
    fn scope_kinds_and_statements() {
        let source = "async def f():\n    'doc'\n    # note\n    return 1\n";
        let tree = parse_python(source);
        let def = tree.root_node().named_child(0).unwrap();
        let scope = ScopeNode::from_node(def).unwrap();
        assert_eq!(scope.kind, ScopeKind::AsyncFunction);

        let statements = scope.statements();
        assert_eq!(statements.len(), 2);
        assert!(StatementNode::classify(statements[0], source).is_bare_literal());
        assert_eq!(statements[1].kind(), "return_statement");
    }

    #[test]
    fn non_scope_nodes() {
        let source = "if x:\n    'a'\n";
        let tree = parse_python(source);
        let stmt = tree.root_node().named_child(0).unwrap();
        assert!(ScopeNode::from_node(stmt).is_none());
        assert_eq!(
            ScopeNode::from_node(tree.root_node()).unwrap().kind,
            ScopeKind::Module
        );
    }
}

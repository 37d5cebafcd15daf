//! Top-level stripping entry point.

use ps_ast::{walk, Assignment, Edit, ScopeNode, SyntaxTree, Visit};

use crate::docstring::remove_bare_literals;
use crate::literal::blank_literal_value;

/// Strip docstrings and literal assignment values from `tree`.
///
/// Never fails: it only deletes statements and replaces literals, and the
/// serializer takes care of bodies left empty.
pub fn strip(mut tree: SyntaxTree) -> SyntaxTree {
    let (edits, removed, blanked) = {
        let mut stripper = Stripper::new(tree.source());
        walk(tree.root(), &mut stripper);
        (stripper.edits, stripper.removed, stripper.blanked)
    };

    tracing::debug!(removed, blanked, "stripped syntax tree");
    tree.edits_mut().extend(edits);
    tree
}

struct Stripper<'s> {
    source: &'s str,
    edits: Vec<Edit>,
    removed: usize,
    blanked: usize,
}

impl<'s> Stripper<'s> {
    fn new(source: &'s str) -> Self {
        Self {
            source,
            edits: Vec::new(),
            removed: 0,
            blanked: 0,
        }
    }
}

impl<'t> Visit<'t> for Stripper<'_> {
    fn visit_scope(&mut self, scope: ScopeNode<'t>) {
        self.removed += remove_bare_literals(scope, self.source, &mut self.edits);
    }

    fn visit_assignment(&mut self, assign: Assignment<'t>) {
        if blank_literal_value(assign, self.source, &mut self.edits) {
            self.blanked += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use ps_parser::{is_valid, parse, serialize};

    fn run(source: &str) -> String {
        serialize(&strip(parse(source.to_string()).unwrap()))
    }

    #[test]
    fn docstring_and_literal_assignment() {
        let out = run("\"hello\"\nx = 5\n");
        assert_eq!(out, "\nx = ''\n");
    }

    #[test]
    fn call_statement_is_kept() {
        let out = run("setup()\n'note'\n");
        assert_eq!(out, "setup()\n\n");
    }

    #[test]
    fn emptied_function_gets_pass() {
        let out = run("def f():\n    \"\"\"Only a docstring.\"\"\"\n");
        assert_eq!(out, "def f():\n    pass\n");
        assert!(is_valid(&out));
    }

    #[test]
    fn emptied_one_liner_class_gets_pass() {
        let out = run("class A: 'doc'; 'more'\n");
        assert_eq!(out, "class A: pass\n");
        assert!(is_valid(&out));
    }

    #[test]
    fn emptied_body_with_comments() {
        let out = run("class A:\n    # about A\n    'doc'  # trailing\n    ...\n");
        assert!(is_valid(&out), "invalid output:\n{out}");
        assert!(out.contains("pass"));
        assert!(!out.contains('#'));
    }

    #[test]
    fn nested_scopes_are_independent() {
        let source = "class A:\n    'a'\n    def f(self):\n        'f'\n        def g():\n            'g'\n            return 1\n        return g\n";
        let out = run(source);
        assert!(is_valid(&out));
        assert!(!out.contains('\''));
        assert!(out.contains("return 1"));
        assert!(out.contains("return g"));
    }

    #[test]
    fn untouched_source_has_no_edits() {
        let tree = strip(parse("print(1)\n".to_string()).unwrap());
        assert!(tree.edits().is_empty());
    }
}

use std::ops::Range;

use ps_ast::{walk, Edit, EditSet, Node, ScopeKind, ScopeNode, SyntaxTree, Visit};

/// Serialized source plus the lines whose text belongs to a string literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub text: String,
    /// 0-based indices of output lines whose line break sits inside a
    /// surviving multi-line string. Line-level cleanup must leave them as
    /// they are, or the string's value changes.
    pub verbatim_lines: Vec<Range<usize>>,
}

/// Render `tree` as source text with its edits applied.
///
/// On top of the recorded edits, the canonical form:
/// - drops every `#` comment along with the blanks in front of it
/// - puts a `pass` at the start of any function or class body whose
///   statements were all deleted, since Python has no empty blocks
///
/// Total for any tree that came out of [`parse`](crate::parse) and only had
/// statements deleted or literals replaced.
pub fn serialize(tree: &SyntaxTree) -> String {
    render(tree).text
}

/// [`serialize`], also reporting where multi-line strings landed.
pub fn render(tree: &SyntaxTree) -> Rendered {
    let mut canonical = Canonicalize {
        source: tree.source(),
        edits: tree.edits(),
        extra: Vec::new(),
        multiline_strings: Vec::new(),
    };
    walk(tree.root(), &mut canonical);

    let mut edits = tree.edits().clone();
    edits.extend(canonical.extra);
    let text = edits.apply(tree.source());

    let breaks: Vec<usize> = text.match_indices('\n').map(|(at, _)| at).collect();
    let line_of = |offset: usize| breaks.partition_point(|&at| at < offset);
    let verbatim_lines = canonical
        .multiline_strings
        .into_iter()
        .filter_map(|range| edits.map_range(range))
        .map(|range| line_of(range.start)..line_of(range.end))
        .collect();

    Rendered {
        text,
        verbatim_lines,
    }
}

struct Canonicalize<'a> {
    source: &'a str,
    edits: &'a EditSet,
    extra: Vec<Edit>,
    multiline_strings: Vec<Range<usize>>,
}

impl<'t> Visit<'t> for Canonicalize<'_> {
    fn visit_scope(&mut self, scope: ScopeNode<'t>) {
        // An empty module is valid Python.
        if scope.kind == ScopeKind::Module {
            return;
        }

        let statements = scope.statements();
        let Some(first) = statements.first() else {
            return;
        };
        if statements.iter().all(|s| self.edits.deletes(s.byte_range())) {
            self.extra.push(Edit::insert(first.start_byte(), "pass"));
        }
    }

    fn visit_comment(&mut self, comment: Node<'t>) {
        let start = leading_blanks_start(self.source, comment.start_byte());
        self.extra.push(Edit::delete(start..comment.end_byte()));
    }

    fn visit_string(&mut self, string: Node<'t>) {
        if string.start_position().row != string.end_position().row {
            self.multiline_strings.push(string.byte_range());
        }
    }
}

/// Walk back from `pos` over spaces and tabs on the same line.
fn leading_blanks_start(source: &str, pos: usize) -> usize {
    let before = &source.as_bytes()[..pos];
    let blanks = before
        .iter()
        .rev()
        .take_while(|&&b| b == b' ' || b == b'\t')
        .count();
    pos - blanks
}

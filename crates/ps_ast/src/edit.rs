//! Byte-range edits recorded against the original source of a [`SyntaxTree`].
//!
//! tree-sitter trees are immutable, so "mutating" the tree means recording
//! edits here and applying them all at once when the tree is serialized.
//!
//! [`SyntaxTree`]: crate::SyntaxTree

use std::borrow::Cow;
use std::ops::Range;

/// Replace `range` of the original source with `replacement`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    pub range: Range<usize>,
    pub replacement: Cow<'static, str>,
}

impl Edit {
    pub fn delete(range: Range<usize>) -> Self {
        Self {
            range,
            replacement: Cow::Borrowed(""),
        }
    }

    pub fn replace(range: Range<usize>, replacement: impl Into<Cow<'static, str>>) -> Self {
        Self {
            range,
            replacement: replacement.into(),
        }
    }

    pub fn insert(at: usize, text: impl Into<Cow<'static, str>>) -> Self {
        Self::replace(at..at, text)
    }

    pub fn is_deletion(&self) -> bool {
        self.replacement.is_empty() && !self.range.is_empty()
    }
}

/// An unordered batch of edits.
///
/// Edits may overlap. When they do, the edit that starts first (the longest
/// one on a tie) wins: an edit fully inside it is dropped, and one that runs
/// past its end extends it. An insertion at the start of a deletion is kept
/// and lands before the deleted text.
#[derive(Debug, Clone, Default)]
pub struct EditSet {
    edits: Vec<Edit>,
}

impl EditSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, edit: Edit) {
        debug_assert!(edit.range.start <= edit.range.end);
        self.edits.push(edit);
    }

    pub fn len(&self) -> usize {
        self.edits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Edit> {
        self.edits.iter()
    }

    /// True if `range` lies entirely inside text removed by deletions.
    pub fn deletes(&self, range: Range<usize>) -> bool {
        let mut deletions: Vec<&Range<usize>> = self
            .edits
            .iter()
            .filter(|e| e.is_deletion())
            .map(|e| &e.range)
            .collect();
        deletions.sort_by_key(|r| r.start);

        let mut covered_to = range.start;
        for deleted in deletions {
            if deleted.start > covered_to {
                break;
            }
            covered_to = covered_to.max(deleted.end);
            if covered_to >= range.end {
                return true;
            }
        }
        false
    }

    /// Apply every edit to `source` and return the rewritten text.
    pub fn apply(&self, source: &str) -> String {
        let mut out = String::with_capacity(source.len());
        let mut cursor = 0;

        for (range, replacement) in self.merged() {
            out.push_str(&source[cursor..range.start]);
            out.push_str(replacement);
            cursor = range.end;
        }
        out.push_str(&source[cursor..]);

        out
    }

    /// Where `range` of the source ends up in the output of [`apply`], or
    /// `None` if any edit touches it.
    ///
    /// [`apply`]: EditSet::apply
    pub fn map_range(&self, range: Range<usize>) -> Option<Range<usize>> {
        let mut removed = 0;
        let mut added = 0;
        for (edited, replacement) in self.merged() {
            if edited.end <= range.start {
                removed += edited.len();
                added += replacement.len();
            } else if edited.start >= range.end {
                break;
            } else {
                return None;
            }
        }
        Some(range.start - removed + added..range.end - removed + added)
    }

    /// Sorted, non-overlapping view of the edits.
    fn merged(&self) -> Vec<(Range<usize>, &str)> {
        let mut sorted: Vec<&Edit> = self.edits.iter().collect();
        sorted.sort_by(|a, b| {
            a.range
                .start
                .cmp(&b.range.start)
                .then(b.range.is_empty().cmp(&a.range.is_empty()))
                .then(b.range.end.cmp(&a.range.end))
        });

        let mut merged: Vec<(Range<usize>, &str)> = Vec::with_capacity(sorted.len());
        for edit in sorted {
            if let Some((last, _)) = merged.last_mut() {
                if edit.range.start < last.end || edit.range == *last {
                    last.end = last.end.max(edit.range.end);
                    continue;
                }
            }
            merged.push((edit.range.clone(), edit.replacement.as_ref()));
        }
        merged
    }
}

impl Extend<Edit> for EditSet {
    fn extend<I: IntoIterator<Item = Edit>>(&mut self, iter: I) {
        for edit in iter {
            self.push(edit);
        }
    }
}

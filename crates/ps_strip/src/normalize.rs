//! Text-level cleanup of serialized output.

use std::ops::Range;

use ps_ast::StripOptions;

/// Right-trim every line and, with `remove_newlines`, drop the lines left
/// empty. Trailing empty lines always go. Lines are joined with `\n`; there
/// is no trailing newline.
///
/// Lines listed in `verbatim` continue a string literal and are kept as
/// they are, blank or not.
pub fn normalize_lines(text: &str, verbatim: &[Range<usize>], options: &StripOptions) -> String {
    let mut kept: Vec<&str> = Vec::new();
    for (index, line) in text.split('\n').enumerate() {
        if verbatim.iter().any(|lines| lines.contains(&index)) {
            kept.push(line);
            continue;
        }
        let line = line.trim_end();
        if options.remove_newlines && line.is_empty() {
            continue;
        }
        kept.push(line);
    }

    while kept.last().is_some_and(|line| line.is_empty()) {
        kept.pop();
    }
    kept.join("\n")
}

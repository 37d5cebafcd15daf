//! Per-source pipeline: parse → strip → serialize → normalize → re-parse.

use std::fs;
use std::path::Path;

use ps_ast::StripOptions;
use ps_parser::{check, parse, render};

use crate::error::StripError;
use crate::normalize::normalize_lines;
use crate::strip::strip;

/// Result of processing one source.
#[derive(Debug)]
pub enum ProcessingOutcome {
    Transformed(String),
    /// The source was empty or whitespace only; nothing to write.
    Skipped,
    Failed(StripError),
}

impl ProcessingOutcome {
    pub fn is_skipped(&self) -> bool {
        matches!(self, ProcessingOutcome::Skipped)
    }
}

impl From<Result<Option<String>, StripError>> for ProcessingOutcome {
    fn from(result: Result<Option<String>, StripError>) -> Self {
        match result {
            Ok(Some(text)) => ProcessingOutcome::Transformed(text),
            Ok(None) => ProcessingOutcome::Skipped,
            Err(err) => ProcessingOutcome::Failed(err),
        }
    }
}

pub fn process_source(source: &str, options: &StripOptions) -> ProcessingOutcome {
    strip_source(source, options).into()
}

/// Read `path` as UTF-8 and run [`process_source`] on it.
pub fn process_file(path: &Path, options: &StripOptions) -> ProcessingOutcome {
    match fs::read_to_string(path) {
        Ok(source) => process_source(&source, options),
        Err(err) => ProcessingOutcome::Failed(StripError::io(path, err)),
    }
}

/// The fallible core of [`process_source`]. `Ok(None)` means the source was
/// blank and parsing was never attempted.
pub fn strip_source(source: &str, options: &StripOptions) -> Result<Option<String>, StripError> {
    if source.trim().is_empty() {
        return Ok(None);
    }

    let tree = parse(source.to_string())?;
    let rendered = render(&strip(tree));
    let cleaned = normalize_lines(&rendered.text, &rendered.verbatim_lines, options);
    validate(&cleaned)?;

    Ok(Some(cleaned))
}

/// Re-parse stripped output. Failing here means the transform broke the file.
pub fn validate(cleaned: &str) -> Result<(), StripError> {
    check(cleaned).map_err(StripError::Validation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn opts(remove_newlines: bool) -> StripOptions {
        StripOptions { remove_newlines }
    }

    fn stripped(source: &str, remove_newlines: bool) -> String {
        match process_source(source, &opts(remove_newlines)) {
            ProcessingOutcome::Transformed(text) => text,
            other => panic!("expected transformed output, got {other:?}"),
        }
    }

    #[test]
    fn blank_source_is_skipped() {
        assert!(process_source("", &opts(false)).is_skipped());
        assert!(process_source("  \n\t\n", &opts(true)).is_skipped());
    }

    #[test]
    fn invalid_source_fails_with_parse_error() {
        let outcome = process_source("def (:\n", &opts(false));
        assert!(matches!(
            outcome,
            ProcessingOutcome::Failed(StripError::Parse(_))
        ));
    }

    #[test]
    fn module_docstring_and_constants() {
        let source = r#""""Module docs."""

VERSION = "1.0"  # bumped by release
LIMIT = 10


def run():
    """Run it."""
    return LIMIT
"#;
        assert_eq!(
            stripped(source, false),
            "\n\nVERSION = ''\nLIMIT = ''\n\n\ndef run():\n\n    return LIMIT"
        );
        assert_eq!(
            stripped(source, true),
            "VERSION = ''\nLIMIT = ''\ndef run():\n    return LIMIT"
        );
    }

    #[test]
    fn remove_newlines_flag() {
        let source = "x = f()\n\ny = g()\n";
        assert_eq!(stripped(source, false), "x = f()\n\ny = g()");
        assert_eq!(stripped(source, true), "x = f()\ny = g()");
    }

    #[test]
    fn comment_only_file_becomes_empty() {
        assert_eq!(stripped("# just a comment\n", true), "");
    }

    #[test]
    fn output_is_idempotent() {
        let source = "class A:\n    'doc'\n    x = 1  # one\n\n    def f(self):\n        'f'\n";
        for remove_newlines in [false, true] {
            let once = stripped(source, remove_newlines);
            let twice = stripped(&once, remove_newlines);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn trailing_literal_converges_in_one_pass() {
        let once = stripped("setup()\n'note'\n", false);
        assert_eq!(once, "setup()");
        assert_eq!(stripped(&once, false), once);
    }

    #[test]
    fn multiline_string_argument_is_untouched() {
        let source = "def usage():\n    print(\"\"\"Usage:   \n\n    pystrip PATH\n\"\"\")\n";
        assert_eq!(
            stripped(source, true),
            "def usage():\n    print(\"\"\"Usage:   \n\n    pystrip PATH\n\"\"\")"
        );
    }

    #[test]
    fn python2_source_is_rejected() {
        let outcome = process_source("print \"hello\"\nexec \"x = 1\"\n", &opts(false));
        assert!(matches!(
            outcome,
            ProcessingOutcome::Failed(StripError::Parse(_))
        ));
        let outcome = process_source("del f()\n", &opts(false));
        assert!(matches!(
            outcome,
            ProcessingOutcome::Failed(StripError::Parse(_))
        ));
    }

    #[test]
    fn validate_rejects_broken_output() {
        let err = validate("def f():\n").unwrap_err();
        assert_eq!(err.kind(), "validation");
    }

    #[test]
    fn missing_file_is_io_error() {
        let outcome = process_file(Path::new("/nonexistent/pystrip/input.py"), &opts(false));
        match outcome {
            ProcessingOutcome::Failed(err) => assert_eq!(err.kind(), "io"),
            other => panic!("expected io failure, got {other:?}"),
        }
    }
}

//! Comment and docstring stripping for Python sources.
//!
//! Transforms:
//! - bare literal statements in module, `def`, `async def` and `class`
//!   bodies are removed (docstrings, but also any other lone literal)
//! - `name = <literal>` has its value replaced with `''`
//!
//! [`process_source`] runs the whole pipeline for one file:
//! parse → strip → serialize → normalize lines → re-parse.

pub mod docstring;
pub mod error;
pub mod literal;
pub mod normalize;
pub mod process;
pub mod strip;

pub use error::StripError;
pub use normalize::normalize_lines;
pub use process::{process_file, process_source, strip_source, validate, ProcessingOutcome};
pub use strip::strip;

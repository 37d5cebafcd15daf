//! File and directory driver for pystrip.
//!
//! Decides where output goes, mirrors directory trees, runs the stripping
//! pipeline per file and collects a [`RunReport`]. A failure in one file of
//! a directory never stops the others.

pub mod driver;
pub mod paths;
pub mod report;

pub use driver::{process_directory, process_single_file, run};
pub use paths::{has_python_extension, stripped_dir_path, stripped_file_path, STRIPPED_SUFFIX};
pub use report::{FileReport, FileStatus, Mode, RunReport};

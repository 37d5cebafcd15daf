//! Entry points for single files and directory trees.

use std::fs;
use std::path::{Path, PathBuf};

use ps_ast::StripOptions;
use ps_strip::{process_file, ProcessingOutcome, StripError};
use rayon::prelude::*;
use walkdir::WalkDir;

use crate::paths::{has_python_extension, stripped_dir_path, stripped_file_path};
use crate::report::{FileReport, FileStatus, Mode, RunReport};

/// Strip `path`, which may be a file or a directory.
///
/// Errors only when `path` does not exist, when the output directory name
/// can't be derived, or when a single file fails. Per-file failures in a
/// directory are recorded in the report instead.
pub fn run(path: &Path, options: &StripOptions) -> Result<RunReport, StripError> {
    if path.is_dir() {
        let target = stripped_dir_path(path).map_err(|e| StripError::io(path, e))?;
        Ok(process_directory(path, &target, options))
    } else if path.is_file() {
        process_single_file(path, options)
    } else {
        Err(StripError::PathNotFound(path.to_path_buf()))
    }
}

/// Strip one file into its `_stripped` sibling. A failure is returned as
/// the error; nothing is written in that case.
pub fn process_single_file(path: &Path, options: &StripOptions) -> Result<RunReport, StripError> {
    let target = stripped_file_path(path);
    let report = strip_to(path, &target, options);

    let report = match report.status {
        FileStatus::Failed(err) => return Err(err),
        status => FileReport { status, ..report },
    };

    Ok(RunReport {
        input: path.to_path_buf(),
        output: target,
        mode: Mode::File,
        files: vec![report],
    })
}

/// Strip every `.py` file under `root` into the same relative location
/// under `target_root`, creating every sub-directory along the way.
///
/// Files are processed in parallel; the returned report is sorted by source
/// path.
pub fn process_directory(root: &Path, target_root: &Path, options: &StripOptions) -> RunReport {
    let mut files = Vec::new();
    let mut jobs = Vec::new();

    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                let source = err.path().unwrap_or(root).to_path_buf();
                let target = mirrored(root, target_root, &source);
                tracing::debug!(path = %source.display(), error = %err, "walk error");
                files.push(FileReport {
                    status: FileStatus::Failed(StripError::io(&source, err.into())),
                    source,
                    target,
                });
                continue;
            }
        };

        let target = mirrored(root, target_root, entry.path());
        if entry.file_type().is_dir() {
            // Safe to race: create_dir_all succeeds if the directory exists.
            if let Err(err) = fs::create_dir_all(&target) {
                files.push(FileReport {
                    source: entry.path().to_path_buf(),
                    status: FileStatus::Failed(StripError::io(&target, err)),
                    target,
                });
            }
        } else if has_python_extension(entry.path()) && entry.path().is_file() {
            jobs.push((entry.into_path(), target));
        }
    }

    tracing::debug!(
        root = %root.display(),
        files = jobs.len(),
        "processing directory"
    );

    let processed: Vec<FileReport> = jobs
        .par_iter()
        .map(|(source, target)| strip_to(source, target, options))
        .collect();
    files.extend(processed);
    files.sort_by(|a, b| a.source.cmp(&b.source));

    RunReport {
        input: root.to_path_buf(),
        output: target_root.to_path_buf(),
        mode: Mode::Directory,
        files,
    }
}

fn mirrored(root: &Path, target_root: &Path, path: &Path) -> PathBuf {
    match path.strip_prefix(root) {
        Ok(relative) if relative.as_os_str().is_empty() => target_root.to_path_buf(),
        Ok(relative) => target_root.join(relative),
        Err(_) => target_root.to_path_buf(),
    }
}

/// Run the pipeline on `source` and write the result to `target`. Output is
/// written only once the stripped text has been re-validated.
fn strip_to(source: &Path, target: &Path, options: &StripOptions) -> FileReport {
    let status = match process_file(source, options) {
        ProcessingOutcome::Transformed(text) => match fs::write(target, text) {
            Ok(()) => {
                tracing::debug!(source = %source.display(), target = %target.display(), "wrote stripped file");
                FileStatus::Written
            }
            Err(err) => FileStatus::Failed(StripError::io(target, err)),
        },
        ProcessingOutcome::Skipped => {
            tracing::debug!(source = %source.display(), "skipped blank file");
            FileStatus::Skipped
        }
        ProcessingOutcome::Failed(err) => {
            tracing::debug!(source = %source.display(), error = %err, "failed to strip file");
            FileStatus::Failed(err)
        }
    };

    FileReport {
        source: source.to_path_buf(),
        target: target.to_path_buf(),
        status,
    }
}

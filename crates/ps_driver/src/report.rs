//! Per-file outcomes of a run, and how they are shown to the user.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use ps_strip::StripError;
use serde::{Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    File,
    Directory,
}

#[derive(Debug)]
pub enum FileStatus {
    Written,
    /// Blank source; no output file was created.
    Skipped,
    Failed(StripError),
}

#[derive(Debug)]
pub struct FileReport {
    pub source: PathBuf,
    pub target: PathBuf,
    pub status: FileStatus,
}

impl FileReport {
    pub fn is_failed(&self) -> bool {
        matches!(self.status, FileStatus::Failed(_))
    }
}

/// Everything one invocation did, sorted by source path.
#[derive(Debug)]
pub struct RunReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub mode: Mode,
    pub files: Vec<FileReport>,
}

impl RunReport {
    pub fn written(&self) -> impl Iterator<Item = &FileReport> {
        self.files
            .iter()
            .filter(|f| matches!(f.status, FileStatus::Written))
    }

    pub fn skipped(&self) -> impl Iterator<Item = &FileReport> {
        self.files
            .iter()
            .filter(|f| matches!(f.status, FileStatus::Skipped))
    }

    pub fn failures(&self) -> impl Iterator<Item = (&Path, &StripError)> {
        self.files.iter().filter_map(|f| match &f.status {
            FileStatus::Failed(err) => Some((f.source.as_path(), err)),
            _ => None,
        })
    }

    pub fn has_failures(&self) -> bool {
        self.files.iter().any(FileReport::is_failed)
    }

    /// Verbose output: one line per skipped file on `out`, one per failure
    /// on `err`, then the confirmation line on `out`.
    pub fn write_verbose(&self, out: &mut impl Write, err: &mut impl Write) -> io::Result<()> {
        for file in &self.files {
            match &file.status {
                FileStatus::Written => {}
                FileStatus::Skipped => writeln!(
                    out,
                    "Skipped writing empty or ignored file: {}",
                    file.target.display()
                )?,
                FileStatus::Failed(e) => {
                    writeln!(err, "Error processing {}: {e}", file.source.display())?
                }
            }
        }
        writeln!(
            out,
            "{} has been processed by the \"comment stripper\" successfully!",
            self.input.display()
        )
    }
}

#[derive(Serialize)]
struct FileRecord<'a> {
    source: &'a Path,
    target: &'a Path,
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error_kind: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Serialize)]
struct RunRecord<'a> {
    input: &'a Path,
    output: &'a Path,
    mode: Mode,
    written: usize,
    skipped: usize,
    failed: usize,
    files: Vec<FileRecord<'a>>,
}

impl Serialize for RunReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let files: Vec<FileRecord<'_>> = self
            .files
            .iter()
            .map(|f| {
                let (status, error_kind, error) = match &f.status {
                    FileStatus::Written => ("written", None, None),
                    FileStatus::Skipped => ("skipped", None, None),
                    FileStatus::Failed(e) => ("failed", Some(e.kind()), Some(e.to_string())),
                };
                FileRecord {
                    source: &f.source,
                    target: &f.target,
                    status,
                    error_kind,
                    error,
                }
            })
            .collect();

        RunRecord {
            input: &self.input,
            output: &self.output,
            mode: self.mode,
            written: self.written().count(),
            skipped: self.skipped().count(),
            failed: self.failures().count(),
            files,
        }
        .serialize(serializer)
    }
}

//! Output path naming.

use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

use ps_ast::PYTHON_EXTENSION;

pub const STRIPPED_SUFFIX: &str = "_stripped";

/// `pkg/mod.py` → `pkg/mod_stripped.py`; `tool` → `tool_stripped`.
pub fn stripped_file_path(path: &Path) -> PathBuf {
    let mut name = path.file_stem().map(OsString::from).unwrap_or_default();
    name.push(STRIPPED_SUFFIX);
    if let Some(ext) = path.extension() {
        name.push(".");
        name.push(ext);
    }
    path.with_file_name(name)
}

/// Sibling of `dir` named `<dir>_stripped`, as an absolute path.
///
/// `.`, `src/` and `../src` all resolve to the directory's real name first.
pub fn stripped_dir_path(dir: &Path) -> io::Result<PathBuf> {
    let absolute: PathBuf = std::path::absolute(dir)?.components().collect();
    let absolute = if absolute.file_name().is_some() {
        absolute
    } else {
        // Ends in `..`; let the filesystem resolve it.
        dir.canonicalize()?
    };

    let Some(name) = absolute.file_name() else {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("cannot name an output directory for {}", dir.display()),
        ));
    };
    let mut name = name.to_os_string();
    name.push(STRIPPED_SUFFIX);
    Ok(absolute.with_file_name(name))
}

pub fn has_python_extension(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == PYTHON_EXTENSION)
}

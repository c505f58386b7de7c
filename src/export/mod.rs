//! Export of structure text to disk
//!
//! The primitive is [`write_structure`]: write text to a path, failing if
//! the parent directory is missing. [`export_structure`] layers the
//! default-file-name and conflict policy on top of it.

use crate::fs::FileSystem;
use crate::types::{StructifyError, StructureText};
use std::path::{Path, PathBuf};

/// File name used when exporting into a scanned directory
pub const DEFAULT_FILE_NAME: &str = "folder_structure.txt";

/// What to do when the export target already exists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConflictPolicy {
    /// Replace the existing file
    Overwrite,

    /// Write `folder_structure (N).txt` with the first free N >= 1
    #[default]
    Number,

    /// Leave everything untouched
    Cancel,
}

/// Result of an export attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// Text was written to `path`
    Written { path: PathBuf, replaced: bool },

    /// Target existed and the policy was to cancel
    Cancelled { existing: PathBuf },
}

/// Path of the N-th numbered copy inside `dir`
pub fn numbered_path(dir: &Path, n: usize) -> PathBuf {
    let stem = DEFAULT_FILE_NAME.trim_end_matches(".txt");
    dir.join(format!("{stem} ({n}).txt"))
}

/// First numbered copy path that does not exist yet
pub fn next_free_path<F: FileSystem + ?Sized>(fs: &F, dir: &Path) -> PathBuf {
    (1..)
        .map(|n| numbered_path(dir, n))
        .find(|candidate| !fs.exists(candidate))
        .unwrap_or_else(|| dir.join(DEFAULT_FILE_NAME))
}

/// Write structure text to `path`
///
/// Trailing whitespace is trimmed and exactly one newline is appended.
///
/// # Errors
/// * `EmptyStructure` when the text is blank
/// * `WriteFailure` when the file cannot be written (e.g. parent missing)
pub fn write_structure<F: FileSystem + ?Sized>(
    fs: &F,
    path: &Path,
    text: &StructureText,
) -> Result<(), StructifyError> {
    if text.is_blank() {
        return Err(StructifyError::EmptyStructure);
    }

    let contents = format!("{}\n", text.as_str().trim_end());
    fs.write_string(path, &contents)
        .map_err(|source| StructifyError::WriteFailure {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::debug!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}

/// Export text as `folder_structure.txt` inside `dir`, resolving conflicts
///
/// When no file is in the way the policy is not consulted.
pub fn export_structure<F: FileSystem + ?Sized>(
    fs: &F,
    dir: &Path,
    text: &StructureText,
    policy: ConflictPolicy,
) -> Result<ExportOutcome, StructifyError> {
    if text.is_blank() {
        return Err(StructifyError::EmptyStructure);
    }

    let target = dir.join(DEFAULT_FILE_NAME);
    if !fs.exists(&target) {
        write_structure(fs, &target, text)?;
        return Ok(ExportOutcome::Written {
            path: target,
            replaced: false,
        });
    }

    match policy {
        ConflictPolicy::Overwrite => {
            write_structure(fs, &target, text)?;
            Ok(ExportOutcome::Written {
                path: target,
                replaced: true,
            })
        }
        ConflictPolicy::Number => {
            let path = next_free_path(fs, dir);
            write_structure(fs, &path, text)?;
            Ok(ExportOutcome::Written {
                path,
                replaced: false,
            })
        }
        ConflictPolicy::Cancel => Ok(ExportOutcome::Cancelled { existing: target }),
    }
}

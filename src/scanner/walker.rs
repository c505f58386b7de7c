//! Sequential directory walker

use super::ExcludeFilter;
use crate::fs::{DirEntry, FileSystem};
use crate::types::{PathNode, StructifyError};
use std::path::{Path, PathBuf};

/// Options controlling a scan
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanOptions {
    /// Descend into subdirectories; otherwise only the root's children are listed
    pub recursive: bool,

    /// Glob patterns for directories to leave out (with their subtrees)
    pub exclude_patterns: Vec<String>,

    /// Treat symlinks to directories as directories
    pub follow_symlinks: bool,
}

impl ScanOptions {
    /// Full recursive scan with no filtering
    pub fn recursive() -> Self {
        Self {
            recursive: true,
            ..Self::default()
        }
    }

    /// Immediate child directories only
    pub fn flat() -> Self {
        Self::default()
    }
}

/// Scan a directory and return its directory hierarchy as nodes
///
/// Produces a pre-order sequence: every directory is followed by its own
/// subdirectories before its next sibling. Siblings are sorted by name in
/// codepoint order, so `["b", "a", "C"]` always comes out as
/// `["C", "a", "b"]`. The root itself is never emitted; its children sit at
/// depth 0. Files are never emitted.
///
/// # Arguments
/// * `fs` - Filesystem to read from
/// * `root_path` - Directory to scan
/// * `options` - Recursion, exclude patterns and symlink handling
///
/// # Errors
/// * `NotADirectory` if `root_path` is missing or not a directory
/// * `ReadFailure` if the root itself cannot be listed
/// * `InvalidPattern` if an exclude glob does not compile
///
/// Subdirectories that cannot be listed are logged and kept as leaves; the
/// scan continues with the remaining entries.
pub fn scan<F: FileSystem + ?Sized>(
    fs: &F,
    root_path: &Path,
    options: &ScanOptions,
) -> Result<Vec<PathNode>, StructifyError> {
    if !fs.is_dir(root_path) {
        return Err(StructifyError::NotADirectory {
            path: root_path.to_path_buf(),
        });
    }

    let filter = ExcludeFilter::new(&options.exclude_patterns)?;
    let entries = fs
        .read_dir(root_path)
        .map_err(|source| StructifyError::ReadFailure {
            path: root_path.to_path_buf(),
            source,
        })?;

    let mut walker = Walker {
        fs,
        options,
        filter,
        ancestors: Vec::new(),
        nodes: Vec::new(),
    };

    if options.follow_symlinks {
        if let Ok(canonical) = fs.canonicalize(root_path) {
            walker.ancestors.push(canonical);
        }
    }

    walker.visit_entries(root_path, "", 0, entries);

    tracing::debug!(
        "Scanned {}: {} directories",
        root_path.display(),
        walker.nodes.len()
    );
    Ok(walker.nodes)
}

struct Walker<'a, F: FileSystem + ?Sized> {
    fs: &'a F,
    options: &'a ScanOptions,
    filter: ExcludeFilter,
    /// Canonical paths of the directories currently being descended
    ancestors: Vec<PathBuf>,
    nodes: Vec<PathNode>,
}

impl<F: FileSystem + ?Sized> Walker<'_, F> {
    fn visit_entries(&mut self, dir: &Path, relative: &str, depth: usize, entries: Vec<DirEntry>) {
        let mut names: Vec<String> = entries
            .into_iter()
            .filter(|entry| self.is_wanted_dir(entry))
            .map(|entry| entry.name)
            .collect();
        names.sort();

        for name in names {
            let child_relative = if relative.is_empty() {
                name.clone()
            } else {
                format!("{relative}/{name}")
            };

            if self.filter.is_excluded(&name, &child_relative) {
                tracing::debug!("Excluded {}", child_relative);
                continue;
            }

            let child_path = dir.join(&name);
            self.nodes.push(PathNode::new(depth, name));

            if self.options.recursive {
                self.descend(&child_path, &child_relative, depth + 1);
            }
        }
    }

    fn descend(&mut self, dir: &Path, relative: &str, depth: usize) {
        let guard = if self.options.follow_symlinks {
            match self.fs.canonicalize(dir) {
                Ok(canonical) if self.ancestors.contains(&canonical) => {
                    tracing::warn!(
                        "Not descending into {}: symlink loop back to {}",
                        dir.display(),
                        canonical.display()
                    );
                    return;
                }
                Ok(canonical) => Some(canonical),
                Err(_) => None,
            }
        } else {
            None
        };

        let entries = match self.fs.read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(
                    "Failed to list {}: {}. Its subdirectories will be missing from the structure.",
                    dir.display(),
                    e
                );
                return;
            }
        };

        let pushed = guard.is_some();
        if let Some(canonical) = guard {
            self.ancestors.push(canonical);
        }
        self.visit_entries(dir, relative, depth, entries);
        if pushed {
            self.ancestors.pop();
        }
    }

    fn is_wanted_dir(&self, entry: &DirEntry) -> bool {
        entry.is_plain_dir() || (self.options.follow_symlinks && entry.is_dir_symlink())
    }
}

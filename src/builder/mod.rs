//! Tree builder - materializes a node sequence as directories

mod plan;

pub use plan::plan_directories;

use crate::fs::FileSystem;
use crate::types::{PathNode, StructifyError};
use std::io::{Error, ErrorKind};
use std::path::{Path, PathBuf};

/// Outcome of a successful build
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// Directories ensured, one per node
    pub ensured: usize,
    /// Directories that did not exist before this build
    pub created: usize,
    /// Ensured paths, in node order
    pub paths: Vec<PathBuf>,
}

impl BuildReport {
    /// Directories that were already present
    pub fn existing(&self) -> usize {
        self.ensured - self.created
    }
}

/// Create the directories described by `nodes` under `destination`
///
/// Nesting follows [`plan_directories`]. Creation is idempotent: a
/// directory that already exists counts as ensured, not as an error, so
/// building the same nodes twice leaves the same tree.
///
/// # Errors
/// * `BuildFailed` for the destination itself when it is not a directory
/// * `BuildFailed` for the first path that cannot be created. Processing
///   stops there; directories created before it are left in place.
pub fn build<F: FileSystem + ?Sized>(
    fs: &F,
    destination: &Path,
    nodes: &[PathNode],
) -> Result<BuildReport, StructifyError> {
    if !fs.is_dir(destination) {
        return Err(StructifyError::BuildFailed {
            path: destination.to_path_buf(),
            source: Error::new(ErrorKind::NotFound, "destination is not an existing directory"),
        });
    }

    let mut report = BuildReport::default();

    for path in plan_directories(destination, nodes) {
        let existed = fs.is_dir(&path);
        fs.create_dir_all(&path)
            .map_err(|source| StructifyError::BuildFailed {
                path: path.clone(),
                source,
            })?;

        report.ensured += 1;
        if !existed {
            report.created += 1;
            tracing::debug!("Created {}", path.display());
        }
        report.paths.push(path);
    }

    tracing::debug!(
        "Built {} directories under {} ({} new)",
        report.ensured,
        destination.display(),
        report.created
    );
    Ok(report)
}

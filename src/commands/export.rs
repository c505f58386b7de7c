//! `export` command: save the structure of a directory next to it

use crate::codec::encode;
use crate::config::OnConflict;
use crate::export::{export_structure, ConflictPolicy, ExportOutcome, DEFAULT_FILE_NAME};
use crate::fs::{FileSystem, StdFileSystem};
use crate::scanner::{scan, ScanOptions};
use crate::types::StructifyError;
use crate::ui::ask_conflict_policy;
use std::path::Path;

pub fn run(root: &Path, options: &ScanOptions, on_conflict: OnConflict) -> Result<(), StructifyError> {
    let fs = StdFileSystem;
    let nodes = scan(&fs, root, options)?;
    let text = encode(&nodes);
    if text.is_blank() {
        return Err(StructifyError::EmptyStructure);
    }

    let policy = resolve_policy(&fs, root, on_conflict)?;
    let outcome = export_structure(&fs, root, &text, policy)?;
    println!("{}", format_outcome(&outcome));
    Ok(())
}

/// Pick the conflict policy, prompting only when a file is actually in the way
fn resolve_policy<F: FileSystem + ?Sized>(
    fs: &F,
    root: &Path,
    on_conflict: OnConflict,
) -> Result<ConflictPolicy, StructifyError> {
    if let Some(policy) = on_conflict.policy() {
        return Ok(policy);
    }
    let target = root.join(DEFAULT_FILE_NAME);
    if !fs.exists(&target) {
        return Ok(ConflictPolicy::default());
    }
    ask_conflict_policy(&target)
}

fn format_outcome(outcome: &ExportOutcome) -> String {
    match outcome {
        ExportOutcome::Written {
            path,
            replaced: true,
        } => format!("Overwrote {}", path.display()),
        ExportOutcome::Written { path, .. } => format!("Exported structure to {}", path.display()),
        ExportOutcome::Cancelled { existing } => {
            format!("Export cancelled; {} left unchanged", existing.display())
        }
    }
}

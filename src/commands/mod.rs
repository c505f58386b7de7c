//! Subcommand implementations
//!
//! Each command wires the core (scanner, codec, builder, differ, export)
//! to the native filesystem and the terminal.

pub mod diff;
pub mod export;
pub mod import;
pub mod replicate;
pub mod scan;

use crate::codec::{decode_report, DecodeMode};
use crate::config::{Cli, Command, Config};
use crate::fs::FileSystem;
use crate::scanner::{scan as scan_tree, ScanOptions};
use crate::types::{PathNode, StructifyError};
use std::path::Path;

/// Dispatch a parsed command line
pub fn run(cli: Cli) -> Result<(), StructifyError> {
    let config = Config::try_from(&cli)?;
    tracing::debug!("Running with {:?}", config);

    match cli.command {
        Command::Scan { root, scan } => scan::run(&root, &scan.to_options()),
        Command::Export {
            root,
            scan,
            on_conflict,
        } => export::run(&root, &scan.to_options(), on_conflict),
        Command::Import { file, format } => import::run(&file, format.decode_mode()),
        Command::Replicate {
            source,
            destination,
            dry_run,
            scan,
            format,
        } => replicate::run(
            &source,
            &destination,
            &scan.to_options(),
            format.decode_mode(),
            dry_run,
        ),
        Command::Diff {
            left,
            right,
            scan,
            format,
        } => diff::run(
            &config,
            left,
            right,
            &scan.to_options(),
            format.decode_mode(),
        ),
    }
}

/// Load a structure from a directory (scanned) or a structure file (decoded)
///
/// Structure files are decoded with `mode`; in curated mode `#` comment
/// lines are ignored. Decode warnings are logged and never fatal.
pub fn load_structure<F: FileSystem + ?Sized>(
    fs: &F,
    source: &Path,
    options: &ScanOptions,
    mode: DecodeMode,
) -> Result<Vec<PathNode>, StructifyError> {
    if fs.is_dir(source) {
        return scan_tree(fs, source, options);
    }
    read_structure_file(fs, source, mode)
}

/// Read and decode a structure file
pub fn read_structure_file<F: FileSystem + ?Sized>(
    fs: &F,
    path: &Path,
    mode: DecodeMode,
) -> Result<Vec<PathNode>, StructifyError> {
    let text = fs
        .read_to_string(path)
        .map_err(|source| StructifyError::ReadFailure {
            path: path.to_path_buf(),
            source,
        })?;

    let report = decode_report(&text, mode);
    for warning in &report.warnings {
        tracing::warn!("{}: {}", path.display(), warning);
    }
    Ok(report.nodes)
}

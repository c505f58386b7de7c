//! `replicate` command: recreate a structure under a destination

use super::load_structure;
use crate::builder::{build, plan_directories, BuildReport};
use crate::codec::DecodeMode;
use crate::fs::StdFileSystem;
use crate::scanner::ScanOptions;
use crate::types::StructifyError;
use std::path::{Path, PathBuf};

pub fn run(
    source: &Path,
    destination: &Path,
    options: &ScanOptions,
    mode: DecodeMode,
    dry_run: bool,
) -> Result<(), StructifyError> {
    let fs = StdFileSystem;
    let nodes = load_structure(&fs, source, options, mode)?;
    if nodes.is_empty() {
        return Err(StructifyError::EmptyStructure);
    }

    if dry_run {
        println!("{}", format_dry_run(&plan_directories(destination, &nodes)));
        println!("Dry-run mode: no changes were made.");
        return Ok(());
    }

    let report = build(&fs, destination, &nodes)?;
    println!("{}", format_build_report(&report, destination));
    Ok(())
}

fn format_dry_run(planned: &[PathBuf]) -> String {
    let mut lines = Vec::with_capacity(planned.len() + 1);
    lines.push("Dry-run directories:".to_string());
    for path in planned {
        lines.push(format!("  MKDIR     {}", path.display()));
    }
    lines.join("\n")
}

fn format_build_report(report: &BuildReport, destination: &Path) -> String {
    format!(
        "Replicated {} directories in {} ({} new, {} already present)",
        report.ensured,
        destination.display(),
        report.created,
        report.existing()
    )
}

//! `scan` command: print the structure of a directory

use crate::codec::encode;
use crate::fs::StdFileSystem;
use crate::scanner::{scan, ScanOptions};
use crate::types::StructifyError;
use std::path::Path;

pub fn run(root: &Path, options: &ScanOptions) -> Result<(), StructifyError> {
    let nodes = scan(&StdFileSystem, root, options)?;
    if nodes.is_empty() {
        tracing::info!("{} has no subdirectories", root.display());
        return Ok(());
    }
    println!("{}", encode(&nodes));
    Ok(())
}

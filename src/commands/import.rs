//! `import` command: read a curated structure file and print it normalized

use super::read_structure_file;
use crate::codec::{encode, DecodeMode};
use crate::fs::StdFileSystem;
use crate::types::StructifyError;
use std::path::Path;

pub fn run(file: &Path, mode: DecodeMode) -> Result<(), StructifyError> {
    let nodes = read_structure_file(&StdFileSystem, file, mode)?;
    if nodes.is_empty() {
        tracing::info!("{} contains no entries", file.display());
        return Ok(());
    }
    println!("{}", encode(&nodes));
    Ok(())
}

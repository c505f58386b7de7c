//! `diff` command: compare two structures level by level

use super::load_structure;
use crate::codec::DecodeMode;
use crate::config::{Config, JsonSettingsStore, Settings, SettingsStore};
use crate::diff::compare_structures;
use crate::fs::StdFileSystem;
use crate::scanner::ScanOptions;
use crate::types::{Side, Sides, StructifyError};
use crate::ui::{format_diff_summary, render_diff};
use std::path::PathBuf;

pub fn run(
    config: &Config,
    left: Option<PathBuf>,
    right: Option<PathBuf>,
    options: &ScanOptions,
    mode: DecodeMode,
) -> Result<(), StructifyError> {
    let fs = StdFileSystem;
    let store = JsonSettingsStore::new(fs, &config.settings_path);
    let mut settings = store.load();
    tracing::debug!("Loaded settings from {}", store.path().display());

    let sources = resolve_sources(Sides::new(left, right), &settings)?;
    let structures = sources
        .clone()
        .try_map(|_, path| load_structure(&fs, &path, options, mode))?;

    let diff = compare_structures(&structures.left, &structures.right);
    let rendered = render_diff(&diff, config.use_color());
    if !rendered.is_empty() {
        println!("{rendered}");
        println!();
    }
    println!("{}", format_diff_summary(&diff.stats));

    let mut changed = false;
    for side in Side::BOTH {
        changed |= settings.remember(side, sources.get(side));
    }
    if changed {
        if let Err(e) = store.save(&settings) {
            tracing::warn!("{}", e);
        }
    }
    Ok(())
}

/// Fill in missing sides from the remembered paths
fn resolve_sources(
    given: Sides<Option<PathBuf>>,
    settings: &Settings,
) -> Result<Sides<PathBuf>, StructifyError> {
    given.try_map(|side, path| {
        path.or_else(|| settings.last_path(side).map(PathBuf::from))
            .ok_or_else(|| {
                StructifyError::Config(format!(
                    "No {side} structure given and none remembered from a previous run"
                ))
            })
    })
}

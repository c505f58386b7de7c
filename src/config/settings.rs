//! Remembered paths, persisted between runs

use crate::fs::FileSystem;
use crate::types::{Side, Sides, StructifyError};
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// State carried from one run to the next
///
/// Stored as `{"left": "...", "right": "..."}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(flatten)]
    pub last_paths: Sides<Option<PathBuf>>,
}

impl Settings {
    pub fn last_path(&self, side: Side) -> Option<&Path> {
        self.last_paths.get(side).as_deref()
    }

    /// Record a path for a side; returns true when the value changed
    pub fn remember(&mut self, side: Side, path: &Path) -> bool {
        let slot = self.last_paths.get_mut(side);
        if slot.as_deref() == Some(path) {
            return false;
        }
        *slot = Some(path.to_path_buf());
        true
    }

    /// Forget remembered paths that no longer point at something on disk
    pub fn prune_missing<F: FileSystem + ?Sized>(&mut self, fs: &F) {
        for side in Side::BOTH {
            let slot = self.last_paths.get_mut(side);
            if slot.as_deref().is_some_and(|p| !fs.exists(p)) {
                tracing::debug!("Dropping stale {} path {:?}", side, slot);
                *slot = None;
            }
        }
    }
}

/// Loads settings at startup and saves them when they change
pub trait SettingsStore {
    /// Load settings; unreadable or missing state yields defaults
    fn load(&self) -> Settings;

    fn save(&self, settings: &Settings) -> Result<(), StructifyError>;
}

/// Settings stored as a JSON file
#[derive(Debug, Clone)]
pub struct JsonSettingsStore<F> {
    fs: F,
    path: PathBuf,
}

impl<F: FileSystem> JsonSettingsStore<F> {
    pub fn new(fs: F, path: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<F: FileSystem> SettingsStore for JsonSettingsStore<F> {
    fn load(&self) -> Settings {
        let raw = match self.fs.read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Settings::default(),
            Err(e) => {
                tracing::warn!("Ignoring settings file {}: {}", self.path.display(), e);
                return Settings::default();
            }
        };

        let mut settings: Settings = match serde_json::from_str(&raw) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!(
                    "Settings file {} is not valid JSON ({}); starting fresh",
                    self.path.display(),
                    e
                );
                return Settings::default();
            }
        };

        settings.prune_missing(&self.fs);
        settings
    }

    fn save(&self, settings: &Settings) -> Result<(), StructifyError> {
        let json = serde_json::to_string_pretty(settings)
            .map_err(|e| StructifyError::Settings(format!("Failed to serialize settings: {e}")))?;
        self.fs.write_string(&self.path, &json).map_err(|e| {
            StructifyError::Settings(format!(
                "Failed to write {}: {}",
                self.path.display(),
                e
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::StdFileSystem;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_loads_defaults() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = JsonSettingsStore::new(StdFileSystem, temp_dir.path().join("s.json"));
        assert_eq!(store.load(), Settings::default());
    }

    #[test]
    fn test_corrupt_file_loads_defaults() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("s.json");
        fs::write(&path, "{not json").expect("seed");
        let store = JsonSettingsStore::new(StdFileSystem, &path);
        assert_eq!(store.load(), Settings::default());
    }

    #[test]
    fn test_save_then_load_keeps_existing_paths() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let left = temp_dir.path().join("left");
        fs::create_dir(&left).expect("create left");
        let store = JsonSettingsStore::new(StdFileSystem, temp_dir.path().join("s.json"));

        let mut settings = Settings::default();
        assert!(settings.remember(Side::Left, &left));
        assert!(!settings.remember(Side::Left, &left));
        store.save(&settings).expect("save");

        let loaded = store.load();
        assert_eq!(loaded.last_path(Side::Left), Some(left.as_path()));
        assert_eq!(loaded.last_path(Side::Right), None);
    }

    #[test]
    fn test_load_drops_vanished_paths() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("s.json");
        let kept = temp_dir.path().to_path_buf();
        let json = serde_json::json!({
            "left": kept,
            "right": temp_dir.path().join("gone"),
        });
        fs::write(&path, json.to_string()).expect("seed");

        let loaded = JsonSettingsStore::new(StdFileSystem, &path).load();
        assert_eq!(loaded.last_path(Side::Left), Some(kept.as_path()));
        assert_eq!(loaded.last_path(Side::Right), None);
    }

    #[test]
    fn test_json_uses_left_right_keys() {
        let mut settings = Settings::default();
        settings.remember(Side::Right, Path::new("/r"));
        let value = serde_json::to_value(&settings).expect("serialize");
        assert_eq!(value["right"], "/r");
        assert!(value["left"].is_null());
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = JsonSettingsStore::new(StdFileSystem, temp_dir.path().join("no/s.json"));
        let result = store.save(&Settings::default());
        assert!(matches!(result, Err(StructifyError::Settings(_))));
    }
}

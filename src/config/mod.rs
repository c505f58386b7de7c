//! Configuration management

mod cli;
mod settings;

pub use cli::{
    Cli, ColorMode, Command, LogLevel, OnConflict, ScanArgs, SourceArgs, DEFAULT_SETTINGS_FILE,
};
pub use settings::{JsonSettingsStore, Settings, SettingsStore};

use crate::types::StructifyError;
use std::path::PathBuf;

/// Global configuration shared by every command
#[derive(Debug, Clone)]
pub struct Config {
    /// Where remembered paths are stored
    pub settings_path: PathBuf,

    /// Whether diff output is colored
    pub color: ColorMode,

    /// Diagnostic verbosity
    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            settings_path: PathBuf::from(DEFAULT_SETTINGS_FILE),
            color: ColorMode::Auto,
            log_level: LogLevel::Warn,
        }
    }
}

impl Config {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), StructifyError> {
        if self.settings_path.as_os_str().is_empty() {
            return Err(StructifyError::Config(
                "Settings path cannot be empty".to_string(),
            ));
        }

        if self.settings_path.is_dir() {
            return Err(StructifyError::Config(format!(
                "Settings path is a directory: {}",
                self.settings_path.display()
            )));
        }

        Ok(())
    }

    /// Resolve `--color auto` against the terminal stdout is attached to
    pub fn use_color(&self) -> bool {
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => console::colors_enabled(),
        }
    }
}

impl TryFrom<&Cli> for Config {
    type Error = StructifyError;

    fn try_from(cli: &Cli) -> Result<Self, Self::Error> {
        let config = Config {
            settings_path: cli.settings.clone(),
            color: cli.color,
            log_level: cli.log_level,
        };
        config.validate()?;
        Ok(config)
    }
}

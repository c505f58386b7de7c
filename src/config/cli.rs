//! Command-line interface definition

use crate::codec::DecodeMode;
use crate::export::ConflictPolicy;
use crate::scanner::ScanOptions;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Default location of the remembered-paths file
pub const DEFAULT_SETTINGS_FILE: &str = "structify_last_paths.json";

/// Capture, replicate and compare directory hierarchies as indented text
#[derive(Debug, Parser)]
#[command(name = "structify", version, about, long_about = None)]
pub struct Cli {
    /// Diagnostic output level (written to stderr)
    #[arg(long, value_enum, default_value_t = LogLevel::Warn, global = true)]
    pub log_level: LogLevel,

    /// File remembering the last compared left/right paths
    #[arg(long, value_name = "FILE", default_value = DEFAULT_SETTINGS_FILE, global = true)]
    pub settings: PathBuf,

    /// When to color diff output
    #[arg(long, value_enum, default_value_t = ColorMode::Auto, global = true)]
    pub color: ColorMode,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the directory structure of ROOT
    Scan {
        root: PathBuf,
        #[command(flatten)]
        scan: ScanArgs,
    },

    /// Write the structure of ROOT to ROOT/folder_structure.txt
    Export {
        root: PathBuf,
        #[command(flatten)]
        scan: ScanArgs,
        /// What to do if folder_structure.txt already exists
        #[arg(long, value_enum, default_value_t = OnConflict::Ask)]
        on_conflict: OnConflict,
    },

    /// Read a structure file (comment lines allowed) and print it normalized
    Import {
        file: PathBuf,
        #[command(flatten)]
        format: SourceArgs,
    },

    /// Recreate the directories of SOURCE (a directory or structure file) under DEST
    Replicate {
        source: PathBuf,
        destination: PathBuf,
        /// Print the directories that would be created without creating them
        #[arg(long)]
        dry_run: bool,
        #[command(flatten)]
        scan: ScanArgs,
        #[command(flatten)]
        format: SourceArgs,
    },

    /// Compare two structures (directories or structure files) level by level
    Diff {
        /// Defaults to the last left path used
        left: Option<PathBuf>,
        /// Defaults to the last right path used
        right: Option<PathBuf>,
        #[command(flatten)]
        scan: ScanArgs,
        #[command(flatten)]
        format: SourceArgs,
    },
}

/// Options shared by every command that scans a directory
#[derive(Debug, Clone, Default, Args)]
pub struct ScanArgs {
    /// Only list the immediate subdirectories
    #[arg(long)]
    pub flat: bool,

    /// Skip directories matching GLOB (name or relative path), repeatable
    #[arg(long, short = 'x', value_name = "GLOB")]
    pub exclude: Vec<String>,

    /// Descend into symlinked directories
    #[arg(long)]
    pub follow_symlinks: bool,
}

impl ScanArgs {
    pub fn to_options(&self) -> ScanOptions {
        ScanOptions {
            recursive: !self.flat,
            exclude_patterns: self.exclude.clone(),
            follow_symlinks: self.follow_symlinks,
        }
    }
}

/// Options for commands that read structure files
#[derive(Debug, Clone, Copy, Default, Args)]
pub struct SourceArgs {
    /// Treat `#` lines in structure files as directory names, not comments
    #[arg(long)]
    pub plain: bool,
}

impl SourceArgs {
    pub fn decode_mode(&self) -> DecodeMode {
        if self.plain {
            DecodeMode::Plain
        } else {
            DecodeMode::Curated
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum LogLevel {
    Debug,
    Info,
    #[default]
    Warn,
    Error,
    Silent,
}

impl LogLevel {
    pub fn to_tracing_level(self) -> Option<tracing::Level> {
        match self {
            LogLevel::Debug => Some(tracing::Level::DEBUG),
            LogLevel::Info => Some(tracing::Level::INFO),
            LogLevel::Warn => Some(tracing::Level::WARN),
            LogLevel::Error => Some(tracing::Level::ERROR),
            LogLevel::Silent => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Export conflict handling as chosen on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OnConflict {
    /// Prompt on the terminal
    #[default]
    Ask,
    Overwrite,
    /// Write folder_structure (N).txt
    Number,
    Cancel,
}

impl OnConflict {
    /// Policy that needs no user interaction, if any
    pub fn policy(self) -> Option<ConflictPolicy> {
        match self {
            OnConflict::Ask => None,
            OnConflict::Overwrite => Some(ConflictPolicy::Overwrite),
            OnConflict::Number => Some(ConflictPolicy::Number),
            OnConflict::Cancel => Some(ConflictPolicy::Cancel),
        }
    }
}

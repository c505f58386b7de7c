//! Error types for structify

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error types for structify operations
#[derive(Debug, Error)]
pub enum StructifyError {
    /// Standard IO error (automatically converted via #[from])
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Scan target (or a directory source) is missing or not a directory
    #[error("Not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    /// Directory enumeration or text read failed
    #[error("Failed to read {}: {source}", path.display())]
    ReadFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Directory creation failed; earlier directories stay on disk
    #[error("Failed to create directory {}: {source}", path.display())]
    BuildFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing a structure file failed
    #[error("Failed to write {}: {source}", path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Nothing to export or replicate
    #[error("Structure is empty: nothing to do")]
    EmptyStructure,

    /// Exclude glob could not be compiled
    #[error("Invalid exclude pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// Settings file could not be written
    #[error("Settings error: {0}")]
    Settings(String),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl StructifyError {
    /// Path the error is about, when there is one
    pub fn path(&self) -> Option<&Path> {
        match self {
            StructifyError::NotADirectory { path }
            | StructifyError::ReadFailure { path, .. }
            | StructifyError::BuildFailed { path, .. }
            | StructifyError::WriteFailure { path, .. } => Some(path),
            _ => None,
        }
    }

    /// Check if this error wraps a filesystem failure
    pub fn is_io_related(&self) -> bool {
        matches!(
            self,
            StructifyError::Io(_)
                | StructifyError::ReadFailure { .. }
                | StructifyError::BuildFailed { .. }
                | StructifyError::WriteFailure { .. }
        )
    }

    /// Check if this error is caused by bad input rather than the filesystem
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            StructifyError::Config(_)
                | StructifyError::InvalidPattern { .. }
                | StructifyError::NotADirectory { .. }
                | StructifyError::EmptyStructure
        )
    }

    /// Check if this error is related to permissions
    pub fn is_permission_error(&self) -> bool {
        let io_kind = match self {
            StructifyError::Io(e) => e.kind(),
            StructifyError::ReadFailure { source, .. }
            | StructifyError::BuildFailed { source, .. }
            | StructifyError::WriteFailure { source, .. } => source.kind(),
            _ => return false,
        };
        io_kind == io::ErrorKind::PermissionDenied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error as IoError, ErrorKind};

    #[test]
    fn test_io_error_automatic_conversion() {
        let io_error = IoError::new(ErrorKind::NotFound, "file not found");
        let error: StructifyError = io_error.into();

        assert!(matches!(error, StructifyError::Io(_)));
        assert!(error.to_string().contains("IO error"));
        assert!(error.is_io_related());
    }

    #[test]
    fn test_io_error_from_function() {
        fn returns_io_error() -> Result<(), StructifyError> {
            let _file = std::fs::File::open("/nonexistent/path/file.txt")?;
            Ok(())
        }

        let result = returns_io_error();
        assert!(matches!(result.unwrap_err(), StructifyError::Io(_)));
    }

    #[test]
    fn test_not_a_directory() {
        let error = StructifyError::NotADirectory {
            path: PathBuf::from("/missing/root"),
        };
        assert!(error.to_string().contains("Not a directory"));
        assert!(error.to_string().contains("/missing/root"));
        assert!(error.is_validation_error());
        assert!(!error.is_io_related());
        assert_eq!(error.path(), Some(Path::new("/missing/root")));
    }

    #[test]
    fn test_build_failed_carries_path_and_cause() {
        let error = StructifyError::BuildFailed {
            path: PathBuf::from("/out/a/b"),
            source: IoError::new(ErrorKind::PermissionDenied, "denied"),
        };
        let message = error.to_string();
        assert!(message.contains("/out/a/b"));
        assert!(message.contains("denied"));
        assert!(error.is_permission_error());
        assert!(error.is_io_related());

        use std::error::Error;
        assert!(error.source().is_some());
    }

    #[test]
    fn test_read_failure() {
        let error = StructifyError::ReadFailure {
            path: PathBuf::from("tree.txt"),
            source: IoError::new(ErrorKind::InvalidData, "stream did not contain valid UTF-8"),
        };
        assert!(error.to_string().contains("Failed to read tree.txt"));
        assert!(!error.is_permission_error());
    }

    #[test]
    fn test_invalid_pattern() {
        let error = StructifyError::InvalidPattern {
            pattern: "[".to_string(),
            message: "unclosed character class".to_string(),
        };
        assert!(error.to_string().contains("'['"));
        assert!(error.is_validation_error());
        assert_eq!(error.path(), None);
    }

    #[test]
    fn test_empty_structure() {
        let error = StructifyError::EmptyStructure;
        assert!(error.to_string().contains("empty"));
        assert!(error.is_validation_error());
    }

    #[test]
    fn test_result_propagation() {
        fn inner_function() -> Result<(), StructifyError> {
            Err(StructifyError::Config("test error".to_string()))
        }

        fn outer_function() -> Result<(), StructifyError> {
            inner_function()?;
            Ok(())
        }

        assert!(matches!(
            outer_function().unwrap_err(),
            StructifyError::Config(_)
        ));
    }
}

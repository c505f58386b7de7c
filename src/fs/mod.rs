//! Filesystem abstraction used by the scanner, builder and export
//!
//! The core never touches `std::fs` directly. Everything goes through the
//! [`FileSystem`] trait so that the operations stay testable against fakes
//! and can be pointed at other backends. [`StdFileSystem`] is the native
//! implementation.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Type of filesystem entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryType {
    File,
    Directory,
    Symlink,
    /// Sockets, pipes, devices
    Other,
}

/// A directory entry returned by [`FileSystem::read_dir`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    /// Entry name (last component of its path)
    pub name: String,
    /// Type of the entry itself, symlinks not followed
    pub entry_type: EntryType,
    /// For symlinks, whether the target is a directory
    pub symlink_target_is_dir: bool,
}

impl DirEntry {
    pub fn new(name: impl Into<String>, entry_type: EntryType) -> Self {
        Self {
            name: name.into(),
            entry_type,
            symlink_target_is_dir: false,
        }
    }

    pub fn new_symlink(name: impl Into<String>, target_is_dir: bool) -> Self {
        Self {
            name: name.into(),
            entry_type: EntryType::Symlink,
            symlink_target_is_dir: target_is_dir,
        }
    }

    /// Real directory, not a link to one
    pub fn is_plain_dir(&self) -> bool {
        self.entry_type == EntryType::Directory
    }

    /// Symlink whose target is a directory
    pub fn is_dir_symlink(&self) -> bool {
        self.entry_type == EntryType::Symlink && self.symlink_target_is_dir
    }
}

/// Filesystem operations the core depends on
pub trait FileSystem {
    /// List entries in a directory (non-recursive, unspecified order)
    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>>;

    /// Check if path is an existing directory (symlinks followed)
    fn is_dir(&self, path: &Path) -> bool;

    /// Check if anything exists at path
    fn exists(&self, path: &Path) -> bool;

    /// Create a directory and all missing parents; existing directories are fine
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Read a UTF-8 text file
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Write a text file, replacing any previous content. The parent must exist.
    fn write_string(&self, path: &Path, contents: &str) -> io::Result<()>;

    /// Absolute, symlink-resolved form of path
    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf>;
}

/// Native filesystem backed by `std::fs`
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFileSystem;

impl FileSystem for StdFileSystem {
    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(path)? {
            let entry = entry?;
            let name = match entry.file_name().into_string() {
                Ok(name) => name,
                Err(raw) => {
                    let lossy = raw.to_string_lossy().into_owned();
                    tracing::warn!(
                        "Entry name under {} is not valid UTF-8, using {:?}",
                        path.display(),
                        lossy
                    );
                    lossy
                }
            };

            let file_type = entry.file_type()?;
            let dir_entry = if file_type.is_symlink() {
                let target_is_dir = fs::metadata(entry.path())
                    .map(|m| m.is_dir())
                    .unwrap_or(false);
                DirEntry::new_symlink(name, target_is_dir)
            } else if file_type.is_dir() {
                DirEntry::new(name, EntryType::Directory)
            } else if file_type.is_file() {
                DirEntry::new(name, EntryType::File)
            } else {
                DirEntry::new(name, EntryType::Other)
            };
            entries.push(dir_entry);
        }
        Ok(entries)
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn exists(&self, path: &Path) -> bool {
        fs::symlink_metadata(path).is_ok()
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    fn write_string(&self, path: &Path, contents: &str) -> io::Result<()> {
        fs::write(path, contents)
    }

    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        fs::canonicalize(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_dir_reports_types() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let root = temp_dir.path();
        fs::create_dir(root.join("sub")).expect("Failed to create dir");
        fs::write(root.join("file.txt"), "x").expect("Failed to write file");

        let mut entries = StdFileSystem.read_dir(root).expect("read_dir should succeed");
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        assert_eq!(
            entries,
            vec![
                DirEntry::new("file.txt", EntryType::File),
                DirEntry::new("sub", EntryType::Directory),
            ]
        );
    }

    #[test]
    #[cfg(unix)]
    fn test_read_dir_marks_directory_symlinks() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let root = temp_dir.path();
        fs::create_dir(root.join("real")).expect("Failed to create dir");
        std::os::unix::fs::symlink(root.join("real"), root.join("link"))
            .expect("Failed to create symlink");

        let entries = StdFileSystem.read_dir(root).expect("read_dir should succeed");
        let link = entries
            .iter()
            .find(|e| e.name == "link")
            .expect("link entry should be listed");
        assert!(link.is_dir_symlink());
        assert!(!link.is_plain_dir());
    }

    #[test]
    fn test_read_dir_missing_path_fails() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let result = StdFileSystem.read_dir(&temp_dir.path().join("nope"));
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_write_string_requires_parent() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let target = temp_dir.path().join("missing/out.txt");
        assert!(StdFileSystem.write_string(&target, "a").is_err());
    }

    #[test]
    fn test_create_dir_all_is_idempotent() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let target = temp_dir.path().join("a/b");
        StdFileSystem.create_dir_all(&target).expect("first create");
        StdFileSystem.create_dir_all(&target).expect("second create");
        assert!(StdFileSystem.is_dir(&target));
    }
}

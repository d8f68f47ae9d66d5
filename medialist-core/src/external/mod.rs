// ============================================================================
// medialist-core/src/external/mod.rs
// ============================================================================
//
// EXTERNAL COLLABORATORS: File System Access Behind a Trait
//
// This module encapsulates every interaction with the file system. The rest
// of the library only ever sees the `DirectoryReader` trait and the plain
// handle types it returns, which keeps parsing and report logic testable
// without touching disk.
//
// KEY COMPONENTS:
// - DirectoryReader: trait for glob-filtered directory listings
// - DirHandle / FileHandle: owned snapshots of directory entries
// - GlobPattern: `?`/`*` wildcard matching against base names
// - StdDirectoryReader: std::fs backed implementation
// - MemoryDirectoryReader: in-memory implementation for tests
//
// DESIGN PHILOSOPHY:
// Dependency injection: consumers provide their own reader for testing or
// specialized behavior. The default implementation uses std::fs.

// ---- Internal crate imports ----
use crate::error::CoreResult;

// ---- External crate imports ----
use serde::Serialize;

// ---- Standard library imports ----
use std::path::{Path, PathBuf};

// ============================================================================
// SUBMODULES
// ============================================================================

/// Wildcard patterns used to filter directory listings
pub mod glob;

/// std::fs backed directory reader
pub mod filesystem;

/// In-memory directory tree for tests
#[cfg(any(test, feature = "test-mocks"))]
pub mod mocks;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use filesystem::StdDirectoryReader;
pub use glob::GlobPattern;

#[cfg(any(test, feature = "test-mocks"))]
pub use mocks::MemoryDirectoryReader;

// ============================================================================
// HANDLE TYPES
// ============================================================================

/// A directory found by a listing. Owns its name and path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirHandle {
    /// Base name of the directory
    pub name: String,
    /// Full path of the directory
    pub path: PathBuf,
}

impl DirHandle {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    /// Builds a handle from a path, using its last component as the name.
    /// Falls back to the whole path when there is no final component (e.g. `/`).
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        Self { name, path }
    }
}

/// A file found by a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileHandle {
    /// Base name of the file, extension included
    pub name: String,
    /// Full path of the file
    pub path: PathBuf,
    /// Size in bytes
    pub size: u64,
}

impl FileHandle {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>, size: u64) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            size,
        }
    }

    /// Lowercased extension including the leading dot, e.g. `".mkv"`.
    ///
    /// Returns `None` when the name has no dot or ends with one.
    #[must_use]
    pub fn extension(&self) -> Option<String> {
        let dot = self.name.rfind('.')?;
        if dot + 1 >= self.name.len() {
            return None;
        }
        Some(self.name[dot..].to_lowercase())
    }
}

// ============================================================================
// READER TRAIT
// ============================================================================

/// Glob-filtered, non-recursive directory listings.
///
/// Implementations must match `pattern` against the full base name of each
/// entry and must not descend into sub-directories.
pub trait DirectoryReader: Send + Sync {
    /// Returns true if `path` exists and is a directory.
    fn exists(&self, path: &Path) -> bool;

    /// Lists the immediate sub-directories of `path` whose names match `pattern`.
    fn list_subdirectories(&self, path: &Path, pattern: &GlobPattern) -> CoreResult<Vec<DirHandle>>;

    /// Lists the immediate files of `path` whose names match `pattern`.
    fn list_files(&self, path: &Path, pattern: &GlobPattern) -> CoreResult<Vec<FileHandle>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_is_lowercased_with_dot() {
        let file = FileHandle::new("Show - S01E02 - Two.MKV", "/tv/Show - S01E02 - Two.MKV", 1);
        assert_eq!(file.extension().as_deref(), Some(".mkv"));
    }

    #[test]
    fn extension_missing_or_trailing_dot() {
        assert_eq!(FileHandle::new("README", "/x/README", 0).extension(), None);
        assert_eq!(FileHandle::new("odd.", "/x/odd.", 0).extension(), None);
    }

    #[test]
    fn dir_handle_from_path_uses_last_component() {
        let dir = DirHandle::from_path("/media/tv/Firefly");
        assert_eq!(dir.name, "Firefly");
        assert_eq!(dir.path, PathBuf::from("/media/tv/Firefly"));
    }
}

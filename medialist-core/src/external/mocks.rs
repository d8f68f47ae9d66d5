// medialist-core/src/external/mocks.rs

// --- Mocking Infrastructure (for testing) ---

// Compiled for unit tests and when the "test-mocks" feature is enabled.

use super::{DirHandle, DirectoryReader, FileHandle, GlobPattern};
use crate::error::{CoreError, CoreResult};
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

#[derive(Debug, Default)]
struct Tree {
    dirs: BTreeSet<PathBuf>,
    files: BTreeMap<PathBuf, u64>,
}

/// In-memory directory tree implementing `DirectoryReader`.
///
/// Parent directories are created implicitly. The tree can be changed after
/// it has been handed to a `TvShow`, which is how stale-read behavior is tested.
#[derive(Debug, Default)]
pub struct MemoryDirectoryReader {
    tree: Mutex<Tree>,
}

impl MemoryDirectoryReader {
    pub fn new() -> Self {
        Default::default()
    }

    fn tree(&self) -> MutexGuard<'_, Tree> {
        self.tree.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn add_dir(&self, path: impl AsRef<Path>) -> &Self {
        let mut tree = self.tree();
        for ancestor in path.as_ref().ancestors() {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            tree.dirs.insert(ancestor.to_path_buf());
        }
        self
    }

    pub fn add_file(&self, path: impl AsRef<Path>, size: u64) -> &Self {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            self.add_dir(parent);
        }
        self.tree().files.insert(path.to_path_buf(), size);
        self
    }

    pub fn remove_file(&self, path: impl AsRef<Path>) -> &Self {
        self.tree().files.remove(path.as_ref());
        self
    }

    fn children<'a, I>(parent: &'a Path, paths: I) -> impl Iterator<Item = (String, &'a Path)> + 'a
    where
        I: Iterator<Item = &'a PathBuf> + 'a,
    {
        paths.filter_map(move |p| {
            if p.parent() != Some(parent) {
                return None;
            }
            let name = p.file_name()?.to_str()?.to_string();
            Some((name, p.as_path()))
        })
    }
}

impl DirectoryReader for MemoryDirectoryReader {
    fn exists(&self, path: &Path) -> bool {
        self.tree().dirs.contains(path)
    }

    fn list_subdirectories(&self, path: &Path, pattern: &GlobPattern) -> CoreResult<Vec<DirHandle>> {
        let tree = self.tree();
        if !tree.dirs.contains(path) {
            return Err(CoreError::PathNotFound(path.to_path_buf()));
        }
        let mut dirs: Vec<DirHandle> = Self::children(path, tree.dirs.iter())
            .filter(|(name, _)| pattern.matches(name))
            .map(|(name, p)| DirHandle::new(name, p))
            .collect();
        dirs.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(dirs)
    }

    fn list_files(&self, path: &Path, pattern: &GlobPattern) -> CoreResult<Vec<FileHandle>> {
        let tree = self.tree();
        if !tree.dirs.contains(path) {
            return Err(CoreError::PathNotFound(path.to_path_buf()));
        }
        let mut files: Vec<FileHandle> = Self::children(path, tree.files.keys())
            .filter(|(name, _)| pattern.matches(name))
            .map(|(name, p)| {
                let size = tree.files.get(p).copied().unwrap_or_default();
                FileHandle::new(name, p, size)
            })
            .collect();
        files.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(files)
    }
}

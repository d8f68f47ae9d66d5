//! `DirectoryReader` backed by `std::fs`.
//!
//! Listings are single-level and sorted by name so that callers get the same
//! order on every platform.

use super::{DirHandle, DirectoryReader, FileHandle, GlobPattern};
use crate::error::{CoreError, CoreResult};

use log::debug;
use std::fs;
use std::path::Path;

/// Reads directories straight from the host file system.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdDirectoryReader;

impl StdDirectoryReader {
    pub fn new() -> Self {
        Self
    }

    fn read_entries(&self, path: &Path) -> CoreResult<fs::ReadDir> {
        if !path.is_dir() {
            return Err(CoreError::PathNotFound(path.to_path_buf()));
        }
        Ok(fs::read_dir(path)?)
    }
}

impl DirectoryReader for StdDirectoryReader {
    fn exists(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn list_subdirectories(&self, path: &Path, pattern: &GlobPattern) -> CoreResult<Vec<DirHandle>> {
        let mut dirs = Vec::new();
        for entry in self.read_entries(path)? {
            let entry = entry?;
            let entry_path = entry.path();
            if !entry_path.is_dir() {
                continue;
            }
            let Ok(name) = entry.file_name().into_string() else {
                debug!("Skipping non UTF-8 directory name in {}", path.display());
                continue;
            };
            if pattern.matches(&name) {
                dirs.push(DirHandle::new(name, entry_path));
            }
        }
        dirs.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(dirs)
    }

    fn list_files(&self, path: &Path, pattern: &GlobPattern) -> CoreResult<Vec<FileHandle>> {
        let mut files = Vec::new();
        for entry in self.read_entries(path)? {
            let entry = entry?;
            let entry_path = entry.path();
            if !entry_path.is_file() {
                continue;
            }
            let Ok(name) = entry.file_name().into_string() else {
                debug!("Skipping non UTF-8 file name in {}", path.display());
                continue;
            };
            if !pattern.matches(&name) {
                continue;
            }
            let size = fs::metadata(&entry_path)?.len();
            files.push(FileHandle::new(name, entry_path, size));
        }
        files.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::external::glob::{ANY_PATTERN, EPISODE_FILE_PATTERN, SEASON_DIR_PATTERN};
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn lists_only_matching_entries_sorted() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let root = dir.path();
        fs::create_dir(root.join("Season 2"))?;
        fs::create_dir(root.join("Season 1"))?;
        fs::create_dir(root.join("Extras"))?;
        File::create(root.join("Season 3"))?; // a file, not a directory

        let reader = StdDirectoryReader::new();
        let dirs = reader.list_subdirectories(root, &SEASON_DIR_PATTERN)?;
        let names: Vec<_> = dirs.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Season 1", "Season 2"]);
        Ok(())
    }

    #[test]
    fn file_sizes_are_reported() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let mut file = File::create(dir.path().join("Show - S01E01 - Pilot.mkv"))?;
        file.write_all(b"twelve bytes")?;
        File::create(dir.path().join("notes.txt"))?;

        let reader = StdDirectoryReader::new();
        let files = reader.list_files(dir.path(), &EPISODE_FILE_PATTERN)?;
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].size, 12);

        let all = reader.list_files(dir.path(), &ANY_PATTERN)?;
        assert_eq!(all.len(), 2);
        Ok(())
    }

    #[test]
    fn missing_directory_is_path_not_found() {
        let reader = StdDirectoryReader::new();
        let result = reader.list_files(Path::new("surely_this_does_not_exist_42"), &ANY_PATTERN);
        assert!(matches!(result, Err(CoreError::PathNotFound(_))));
    }
}

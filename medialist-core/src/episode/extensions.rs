//! Distinct file extensions used by a show's episode files.

use crate::external::FileHandle;
use std::collections::BTreeSet;

/// Accumulates lowercased extensions (with the leading dot).
///
/// Kept in a `BTreeSet` so the joined report is sorted and stable.
#[derive(Debug, Clone, Default)]
pub struct ExtensionCollector {
    extensions: BTreeSet<String>,
}

impl ExtensionCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, file: &FileHandle) {
        if let Some(ext) = file.extension() {
            self.extensions.insert(ext);
        }
    }

    pub fn extend<'a>(&mut self, files: impl IntoIterator<Item = &'a FileHandle>) {
        for file in files {
            self.add(file);
        }
    }

    pub fn into_set(self) -> BTreeSet<String> {
        self.extensions
    }
}

//! A single movie file.

use crate::discovery::Named;
use crate::external::FileHandle;
use crate::utils::format_bytes;

use serde::Serialize;
use std::fmt;
use std::path::Path;

/// One movie, i.e. one file inside a configured movie folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Movie {
    file: FileHandle,
}

impl Movie {
    pub fn new(file: FileHandle) -> Self {
        Self { file }
    }

    /// File name, extension included.
    pub fn name(&self) -> &str {
        &self.file.name
    }

    pub fn path(&self) -> &Path {
        &self.file.path
    }

    /// Size in bytes.
    pub fn size(&self) -> u64 {
        self.file.size
    }

    /// Human readable size, e.g. `"1.50 GiB"`.
    pub fn display_size(&self) -> String {
        format_bytes(self.file.size)
    }
}

impl Named for Movie {
    fn name(&self) -> &str {
        &self.file.name
    }
}

impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.file.name)
    }
}

// ============================================================================
// medialist-core/src/config/builder.rs
// ============================================================================
//
// CONFIGURATION BUILDER: Builder Pattern for LibraryConfig
//
// This module implements the builder pattern for the LibraryConfig structure,
// providing a fluent API for assembling folder lists and exclusions one entry
// at a time.

// ---- Standard library imports ----
use std::path::PathBuf;

// ---- Internal crate imports ----
use super::{LibraryConfig, ParseFailurePolicy};

/// Builder for creating LibraryConfig instances.
///
/// # Examples
///
/// ```rust
/// use medialist_core::config::LibraryConfigBuilder;
///
/// let config = LibraryConfigBuilder::new()
///     .movie_folders(vec!["/media/movies".into(), "/media/more-movies".into()])
///     .tv_folder("/media/tv")
///     .build();
/// assert_eq!(config.movie_folders.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct LibraryConfigBuilder {
    config: LibraryConfig,
}

impl LibraryConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one movie folder.
    pub fn movie_folder(mut self, folder: impl Into<PathBuf>) -> Self {
        self.config.movie_folders.push(folder.into());
        self
    }

    /// Appends several movie folders.
    pub fn movie_folders(mut self, folders: impl IntoIterator<Item = PathBuf>) -> Self {
        self.config.movie_folders.extend(folders);
        self
    }

    /// Adds one TV folder.
    pub fn tv_folder(mut self, folder: impl Into<PathBuf>) -> Self {
        self.config.tv_folders.push(folder.into());
        self
    }

    /// Appends several TV folders.
    pub fn tv_folders(mut self, folders: impl IntoIterator<Item = PathBuf>) -> Self {
        self.config.tv_folders.extend(folders);
        self
    }

    /// Excludes a movie file name from listings.
    pub fn exclude_file(mut self, name: impl Into<String>) -> Self {
        self.config.excluded_files.insert(name.into());
        self
    }

    pub fn exclude_files<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.excluded_files.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn parse_failure_policy(mut self, policy: ParseFailurePolicy) -> Self {
        self.config.parse_failure_policy = policy;
        self
    }

    pub fn build(self) -> LibraryConfig {
        self.config
    }
}

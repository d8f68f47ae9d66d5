//! Configuration structures and constants for the medialist-core library.
//!
//! The configuration is a plain value handed to every discovery call. The
//! core never reads or writes a settings file; callers decide where the
//! folder lists come from.

mod builder;
pub mod utils;

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

pub use builder::LibraryConfigBuilder;

// Environment variable names

/// Path list (platform separator) of folders containing movie files.
pub const ENV_MOVIE_FOLDERS: &str = "MEDIALIST_MOVIE_FOLDERS";

/// Path list (platform separator) of folders containing show directories.
pub const ENV_TV_FOLDERS: &str = "MEDIALIST_TV_FOLDERS";

/// `abort` or `skip`; see [`ParseFailurePolicy`].
pub const ENV_PARSE_POLICY: &str = "MEDIALIST_PARSE_POLICY";

/// What a report does when a season folder or episode filename matches its
/// glob but cannot be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseFailurePolicy {
    /// Fail the whole report with the parse error.
    #[default]
    Abort,
    /// Log a warning and leave the offending entry out.
    Skip,
}

impl FromStr for ParseFailurePolicy {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "abort" => Ok(Self::Abort),
            "skip" => Ok(Self::Skip),
            other => Err(CoreError::Config(format!(
                "Unknown parse failure policy '{other}' (expected 'abort' or 'skip')"
            ))),
        }
    }
}

impl fmt::Display for ParseFailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Abort => f.write_str("abort"),
            Self::Skip => f.write_str("skip"),
        }
    }
}

/// Folders to index and how to treat what is found there.
///
/// # Examples
///
/// ```rust
/// use medialist_core::config::{LibraryConfigBuilder, ParseFailurePolicy};
///
/// let config = LibraryConfigBuilder::new()
///     .movie_folder("/media/movies")
///     .tv_folder("/media/tv")
///     .exclude_file("desktop.ini")
///     .parse_failure_policy(ParseFailurePolicy::Skip)
///     .build();
/// assert!(config.is_excluded("desktop.ini"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryConfig {
    /// Folders whose files are movies
    pub movie_folders: Vec<PathBuf>,

    /// Folders whose sub-directories are TV shows
    pub tv_folders: Vec<PathBuf>,

    /// Movie file names to leave out of the listing (exact match)
    pub excluded_files: BTreeSet<String>,

    /// Behavior on malformed season/episode names
    pub parse_failure_policy: ParseFailurePolicy,
}

impl LibraryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a configuration from the `MEDIALIST_*` environment variables.
    ///
    /// Unset variables leave the corresponding field at its default.
    pub fn from_env() -> CoreResult<Self> {
        let mut config = Self::default();
        config.apply_env()?;
        Ok(config)
    }

    /// Overrides fields from the `MEDIALIST_*` environment variables.
    pub fn apply_env(&mut self) -> CoreResult<()> {
        if let Some(paths) = utils::get_env_paths(ENV_MOVIE_FOLDERS) {
            self.movie_folders = paths;
        }
        if let Some(paths) = utils::get_env_paths(ENV_TV_FOLDERS) {
            self.tv_folders = paths;
        }
        if let Some(policy) = utils::get_env_opt_string(ENV_PARSE_POLICY) {
            self.parse_failure_policy = policy.parse()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_excluded(&self, file_name: &str) -> bool {
        self.excluded_files.contains(file_name)
    }

    /// Checks that no folder is listed twice in the same role.
    pub fn validate(&self) -> CoreResult<()> {
        check_unique("movie", &self.movie_folders)?;
        check_unique("TV", &self.tv_folders)?;
        Ok(())
    }
}

fn check_unique(kind: &str, folders: &[PathBuf]) -> CoreResult<()> {
    let mut seen = HashSet::new();
    for folder in folders {
        if !seen.insert(folder) {
            return Err(CoreError::Config(format!(
                "{kind} folder listed more than once: {}",
                folder.display()
            )));
        }
    }
    Ok(())
}

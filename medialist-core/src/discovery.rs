//! Library discovery: movies and TV shows under the configured folders.
//!
//! Each configured folder is read once, non-recursively. Movie folders
//! contribute their files (minus excluded names); TV folders contribute one
//! show per sub-directory. Both collections come back sorted by name.
//!
//! A configured folder that does not exist is not an error. It contributes
//! nothing and is reported once through [`DiscoveryWarning::PathNotFound`].

use crate::config::LibraryConfig;
use crate::error::{CoreError, CoreResult};
use crate::external::glob::ANY_PATTERN;
use crate::external::DirectoryReader;
use crate::movie::Movie;
use crate::show::TvShow;

use log::{info, warn};
use std::cmp::Ordering;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Anything listed and sorted by name.
pub trait Named {
    fn name(&self) -> &str;
}

/// Orders two items by name, comparing the raw strings.
pub fn compare_by_name<T: Named + ?Sized>(a: &T, b: &T) -> Ordering {
    a.name().cmp(b.name())
}

/// Sorts items in place by name.
pub fn sort_by_name<T: Named>(items: &mut [T]) {
    items.sort_by(compare_by_name);
}

/// Items whose name contains `query`, ignoring case. An empty query keeps all.
pub fn filter_by_name<'a, T: Named>(items: &'a [T], query: &str) -> Vec<&'a T> {
    let query = query.to_lowercase();
    items
        .iter()
        .filter(|item| item.name().to_lowercase().contains(&query))
        .collect()
}

/// Something the caller should hear about that did not stop discovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiscoveryWarning {
    /// The configuration lists no folders of this kind.
    NoFoldersConfigured { kind: &'static str },
    /// A configured folder does not exist.
    PathNotFound(PathBuf),
}

impl fmt::Display for DiscoveryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoFoldersConfigured { kind } => write!(f, "No {kind} folders are selected to search."),
            Self::PathNotFound(path) => write!(f, "Folder not found, skipped: {}", path.display()),
        }
    }
}

/// Sorted discovery results plus any warnings raised along the way.
#[derive(Debug)]
pub struct Discovery<T> {
    pub items: Vec<T>,
    pub warnings: Vec<DiscoveryWarning>,
}

impl<T> Default for Discovery<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            warnings: Vec::new(),
        }
    }
}

impl<T> Discovery<T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

fn check_root(
    reader: &dyn DirectoryReader,
    root: &std::path::Path,
    warnings: &mut Vec<DiscoveryWarning>,
) -> bool {
    if reader.exists(root) {
        return true;
    }
    warn!("Configured folder does not exist: {}", root.display());
    warnings.push(DiscoveryWarning::PathNotFound(root.to_path_buf()));
    false
}

/// Lists every movie file in the configured movie folders.
///
/// # Examples
///
/// ```rust,no_run
/// use medialist_core::config::LibraryConfigBuilder;
/// use medialist_core::discovery::discover_movies;
/// use medialist_core::external::StdDirectoryReader;
///
/// let config = LibraryConfigBuilder::new().movie_folder("/media/movies").build();
/// let movies = discover_movies(&config, &StdDirectoryReader::new()).unwrap();
/// for movie in &movies.items {
///     println!("{} ({})", movie.name(), movie.display_size());
/// }
/// ```
pub fn discover_movies(
    config: &LibraryConfig,
    reader: &dyn DirectoryReader,
) -> CoreResult<Discovery<Movie>> {
    let mut found = Discovery::default();
    if config.movie_folders.is_empty() {
        found
            .warnings
            .push(DiscoveryWarning::NoFoldersConfigured { kind: "movie" });
    }

    for root in &config.movie_folders {
        if !check_root(reader, root, &mut found.warnings) {
            continue;
        }
        let files = match reader.list_files(root, &ANY_PATTERN) {
            Ok(files) => files,
            // Removed between the existence check and the listing.
            Err(CoreError::PathNotFound(path)) => {
                found.warnings.push(DiscoveryWarning::PathNotFound(path));
                continue;
            }
            Err(e) => return Err(e),
        };
        found.items.extend(
            files
                .into_iter()
                .filter(|file| !config.is_excluded(&file.name))
                .map(Movie::new),
        );
    }

    sort_by_name(&mut found.items);
    info!("Found {} movie(s)", found.items.len());
    Ok(found)
}

/// Lists every show directory in the configured TV folders.
///
/// Each show shares `reader` and uses the configuration's parse failure
/// policy. No season is read until a report is requested.
pub fn discover_shows(
    config: &LibraryConfig,
    reader: Arc<dyn DirectoryReader>,
) -> CoreResult<Discovery<TvShow>> {
    let mut found = Discovery::default();
    if config.tv_folders.is_empty() {
        found
            .warnings
            .push(DiscoveryWarning::NoFoldersConfigured { kind: "TV" });
    }

    for root in &config.tv_folders {
        if !check_root(reader.as_ref(), root, &mut found.warnings) {
            continue;
        }
        let dirs = match reader.list_subdirectories(root, &ANY_PATTERN) {
            Ok(dirs) => dirs,
            Err(CoreError::PathNotFound(path)) => {
                found.warnings.push(DiscoveryWarning::PathNotFound(path));
                continue;
            }
            Err(e) => return Err(e),
        };
        found.items.extend(dirs.into_iter().map(|dir| {
            TvShow::with_reader(dir, Arc::clone(&reader)).with_policy(config.parse_failure_policy)
        }));
    }

    sort_by_name(&mut found.items);
    info!("Found {} TV show(s)", found.items.len());
    Ok(found)
}

//! Core library for indexing movie folders and TV show directories.
//!
//! This crate discovers movies and shows under configured folders and infers
//! episode metadata from filenames: the newest episode of a show, the
//! episodes missing from it and the file extensions it uses.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use medialist_core::TvShow;
//!
//! let show = TvShow::open("/media/tv/Firefly").unwrap();
//! println!("Newest:  {}", show.newest_episode().unwrap());
//! println!("Missing: {}", show.missing_episodes().unwrap());
//! println!("Formats: {}", show.extensions_used().unwrap());
//! ```

pub mod config;
pub mod discovery;
pub mod episode;
pub mod error;
pub mod external;
pub mod movie;
pub mod show;
pub mod utils;

// Re-exports for public API
pub use config::{LibraryConfig, LibraryConfigBuilder, ParseFailurePolicy};
pub use discovery::{
    Discovery, DiscoveryWarning, Named, compare_by_name, discover_movies, discover_shows,
    filter_by_name, sort_by_name,
};
pub use episode::{EpisodeKey, MissingEpisode, parse_episode_name, parse_season_folder};
pub use error::{CoreError, CoreResult};
pub use external::{DirHandle, DirectoryReader, FileHandle, GlobPattern, StdDirectoryReader};
pub use movie::Movie;
pub use show::{ShowReport, TvShow};
pub use utils::format_bytes;

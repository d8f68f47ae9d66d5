// medialist-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "MediaList: Movie and TV show library indexer",
    long_about = "Lists movies and TV shows from local folders and reports newest and missing episodes via the medialist-core library."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    /// Optional: Directory for a timestamped log file
    #[arg(long, global = true, value_name = "LOG_DIR")]
    pub log_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Reports the newest episode, missing episodes and extensions of one show
    Show(ShowArgs),
    /// Lists the TV shows found in the TV folders
    Shows(ShowsArgs),
    /// Lists the movies found in the movie folders
    Movies(MoviesArgs),
}

/// Options shared by commands that parse episode names.
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct ParseArgs {
    /// Skip malformed season folders and episode names instead of failing
    #[arg(long)]
    pub skip_bad_names: bool,
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Show directory containing "Season N" folders
    #[arg(required = true, value_name = "SHOW_DIR")]
    pub show_dir: PathBuf,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub parse: ParseArgs,
}

#[derive(Args, Debug)]
pub struct ShowsArgs {
    /// Folder whose sub-directories are TV shows (repeatable).
    /// Defaults to MEDIALIST_TV_FOLDERS when not given.
    #[arg(short = 't', long = "tv-folder", value_name = "DIR")]
    pub tv_folders: Vec<PathBuf>,

    /// Only list shows whose name contains this text (case-insensitive)
    #[arg(short, long, value_name = "TEXT")]
    pub search: Option<String>,

    /// Also report the newest episode of every listed show
    #[arg(long)]
    pub details: bool,

    /// Print the listing as JSON
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub parse: ParseArgs,
}

#[derive(Args, Debug)]
pub struct MoviesArgs {
    /// Folder whose files are movies (repeatable).
    /// Defaults to MEDIALIST_MOVIE_FOLDERS when not given.
    #[arg(short = 'm', long = "movie-folder", value_name = "DIR")]
    pub movie_folders: Vec<PathBuf>,

    /// File name to leave out of the listing (repeatable)
    #[arg(short = 'x', long = "exclude", value_name = "FILE_NAME")]
    pub excluded_files: Vec<String>,

    /// Only list movies whose name contains this text (case-insensitive)
    #[arg(short, long, value_name = "TEXT")]
    pub search: Option<String>,

    /// Print the listing as JSON
    #[arg(long)]
    pub json: bool,
}

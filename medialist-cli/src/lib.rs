// medialist-cli/src/lib.rs
//
// Library portion of the MediaList CLI application.
// Contains argument definitions and command logic.

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod output;

// Re-export items needed by the binary or integration tests
pub use cli::{Cli, Commands, MoviesArgs, ShowArgs, ShowsArgs};
pub use commands::movies::run_movies;
pub use commands::show::run_show;
pub use commands::shows::run_shows;

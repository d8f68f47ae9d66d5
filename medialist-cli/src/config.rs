// medialist-cli/src/config.rs
//
// Turns command-line arguments into a `LibraryConfig` for medialist-core.
// Environment variables supply folder lists that were not given as flags.

use crate::cli::{MoviesArgs, ParseArgs, ShowsArgs};
use medialist_core::{CoreResult, LibraryConfig, ParseFailurePolicy};

/// Prefix of log file names written to `--log-dir`.
pub const LOG_FILE_PREFIX: &str = "medialist_run";

impl ParseArgs {
    pub fn policy(self) -> ParseFailurePolicy {
        if self.skip_bad_names {
            ParseFailurePolicy::Skip
        } else {
            ParseFailurePolicy::Abort
        }
    }
}

/// Environment first, then flags: an explicit flag always wins.
fn base_config(parse: Option<ParseArgs>) -> CoreResult<LibraryConfig> {
    let mut config = LibraryConfig::from_env()?;
    if let Some(parse) = parse.filter(|p| p.skip_bad_names) {
        config.parse_failure_policy = parse.policy();
    }
    Ok(config)
}

pub fn shows_config(args: &ShowsArgs) -> CoreResult<LibraryConfig> {
    let mut config = base_config(Some(args.parse))?;
    if !args.tv_folders.is_empty() {
        config.tv_folders = args.tv_folders.clone();
    }
    config.validate()?;
    Ok(config)
}

pub fn movies_config(args: &MoviesArgs) -> CoreResult<LibraryConfig> {
    let mut config = base_config(None)?;
    if !args.movie_folders.is_empty() {
        config.movie_folders = args.movie_folders.clone();
    }
    config.excluded_files.extend(args.excluded_files.iter().cloned());
    config.validate()?;
    Ok(config)
}

// ============================================================================
// medialist-cli/src/logging.rs
// ============================================================================
//
// LOGGING SETUP: Console and File Logging for the CLI
//
// The core library only uses the `log` facade. This module picks the backend:
// - env_logger on stderr by default (RUST_LOG is honored)
// - fern when --log-dir is given, writing to stderr and a timestamped file
//
// USAGE:
// - RUST_LOG=info: discovery totals
// - RUST_LOG=debug (or -v): per-season scan details
// - RUST_LOG=warn (default): skipped folders and files only

use crate::config::LOG_FILE_PREFIX;
use log::LevelFilter;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

/// Returns the current local timestamp formatted as "YYYYMMDD_HHMMSS".
///
/// # Example
/// ```
/// let log_filename = format!("medialist_run_{}.log", medialist_cli::logging::get_timestamp());
/// assert!(log_filename.ends_with(".log"));
/// ```
pub fn get_timestamp() -> String {
    chrono::Local::now().format("%Y%m%d_%H%M%S").to_string()
}

/// Initializes the global logger.
///
/// Returns the path of the log file when one was opened.
pub fn init_logging(verbose: bool, log_dir: Option<&Path>) -> Result<Option<PathBuf>, Box<dyn Error>> {
    match log_dir {
        None => {
            let mut builder =
                env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
            if verbose {
                builder.filter_level(LevelFilter::Debug);
            }
            builder.try_init()?;
            Ok(None)
        }
        Some(dir) => {
            fs::create_dir_all(dir)?;
            let log_path = dir.join(format!("{}_{}.log", LOG_FILE_PREFIX, get_timestamp()));
            let console_level = if verbose { LevelFilter::Debug } else { LevelFilter::Warn };

            fern::Dispatch::new()
                .format(|out, message, record| {
                    out.finish(format_args!(
                        "{} {:<5} [{}] {}",
                        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                        record.level(),
                        record.target(),
                        message
                    ))
                })
                .chain(
                    fern::Dispatch::new()
                        .level(console_level)
                        .chain(std::io::stderr()),
                )
                .chain(
                    fern::Dispatch::new()
                        .level(LevelFilter::Debug)
                        .chain(fern::log_file(&log_path)?),
                )
                .apply()?;
            Ok(Some(log_path))
        }
    }
}

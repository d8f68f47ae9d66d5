// medialist-cli/src/commands/shows.rs
//
// `medialist shows`: every show directory under the TV folders, optionally
// filtered by name and annotated with each show's newest episode.

use super::{CommandResult, report_warnings};
use crate::cli::ShowsArgs;
use crate::config::shows_config;
use crate::output::{print_count, print_rows};
use log::warn;
use medialist_core::{StdDirectoryReader, TvShow, discover_shows, filter_by_name};
use serde_json::json;
use std::sync::Arc;

fn newest_or_error(show: &TvShow) -> String {
    match show.newest_episode() {
        Ok(newest) => newest.to_string(),
        Err(e) => {
            warn!("Could not read episodes of '{}': {}", show.name(), e);
            format!("error: {e}")
        }
    }
}

pub fn run_shows(args: ShowsArgs) -> CommandResult {
    let config = shows_config(&args)?;
    let discovery = discover_shows(&config, Arc::new(StdDirectoryReader::new()))?;
    report_warnings(&discovery.warnings);

    let shows = filter_by_name(&discovery.items, args.search.as_deref().unwrap_or(""));

    if args.json {
        let entries: Vec<_> = shows
            .iter()
            .map(|show| {
                let mut entry = json!({
                    "name": show.name(),
                    "path": show.path().display().to_string(),
                });
                if args.details {
                    entry["newest_episode"] = json!(newest_or_error(show));
                }
                entry
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    let rows: Vec<(String, String)> = shows
        .iter()
        .map(|show| {
            let detail = if args.details { newest_or_error(show) } else { String::new() };
            (show.name().to_string(), detail)
        })
        .collect();
    print_rows(&rows);
    print_count("Number of TV Shows", shows.len());
    Ok(())
}

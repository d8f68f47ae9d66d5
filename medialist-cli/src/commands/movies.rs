// medialist-cli/src/commands/movies.rs
//
// `medialist movies`: every file in the movie folders minus excluded names.

use super::{CommandResult, report_warnings};
use crate::cli::MoviesArgs;
use crate::config::movies_config;
use crate::output::{print_count, print_rows};
use medialist_core::{StdDirectoryReader, discover_movies, filter_by_name};
use serde_json::json;

pub fn run_movies(args: MoviesArgs) -> CommandResult {
    let config = movies_config(&args)?;
    let discovery = discover_movies(&config, &StdDirectoryReader::new())?;
    report_warnings(&discovery.warnings);

    let movies = filter_by_name(&discovery.items, args.search.as_deref().unwrap_or(""));

    if args.json {
        let entries: Vec<_> = movies
            .iter()
            .map(|movie| {
                json!({
                    "name": movie.name(),
                    "path": movie.path().display().to_string(),
                    "size": movie.size(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    let rows: Vec<(String, String)> = movies
        .iter()
        .map(|movie| (movie.name().to_string(), movie.display_size()))
        .collect();
    print_rows(&rows);
    print_count("Number of Movies", movies.len());
    Ok(())
}

// medialist-cli/src/main.rs
//
// Entry point for the `medialist` binary.
//
// Responsibilities include:
// - Parsing user-provided arguments.
// - Setting up logging to the console and, optionally, a log file.
// - Dispatching to the selected command.
// - Managing process exit codes based on success or failure.

use clap::Parser;
use log::{debug, info};
use medialist_cli::output::print_error;
use medialist_cli::{Cli, Commands, run_movies, run_show, run_shows};
use std::process;

fn main() {
    let cli = Cli::parse();

    match medialist_cli::logging::init_logging(cli.verbose, cli.log_dir.as_deref()) {
        Ok(Some(log_path)) => info!("Main log file: {}", log_path.display()),
        Ok(None) => {}
        Err(e) => {
            print_error(&format!("Failed to set up logging: {e}"));
            process::exit(1);
        }
    }

    let result = match cli.command {
        Commands::Show(args) => run_show(args),
        Commands::Shows(args) => run_shows(args),
        Commands::Movies(args) => run_movies(args),
    };

    if let Err(e) = result {
        debug!("Command failed: {:?}", e);
        print_error(&e.to_string());
        process::exit(1);
    }
}

// medialist-cli/src/commands/show.rs
//
// `medialist show <SHOW_DIR>`: the three episode reports for one show.
//
// In text mode every report is attempted even if an earlier one failed, so a
// malformed filename only blanks the reports that actually parse names.

use super::CommandResult;
use crate::cli::ShowArgs;
use crate::output::{print_error, print_heading, print_info};
use log::{debug, info};
use medialist_core::{CoreResult, TvShow};

pub fn run_show(args: ShowArgs) -> CommandResult {
    let show = TvShow::open(&args.show_dir)?.with_policy(args.parse.policy());
    info!("Reporting on show '{}' at {}", show.name(), show.path().display());

    if args.json {
        let report = show.report()?;
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_heading(show.name());
    print_info("Path", show.path().display());

    let mut failed = 0;
    let mut line = |label: &str, result: CoreResult<&str>| match result {
        Ok(value) => print_info(label, value),
        Err(e) => {
            debug!("{} failed for '{}': {}", label, show.name(), e);
            print_error(&format!("{label}: {e}"));
            failed += 1;
        }
    };

    line("Newest Episode", show.newest_episode());
    line("Missing Episodes", show.missing_episodes());
    line("Extensions Used", show.extensions_used());

    if failed > 0 {
        return Err(format!("{failed} report(s) failed for '{}'", show.name()).into());
    }
    Ok(())
}

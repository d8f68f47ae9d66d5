//! Command implementations for the CLI.
//!
//! Each submodule contains the implementation of a specific command.

/// Module containing the implementation of the `movies` command.
/// Lists movie files from the configured movie folders.
pub mod movies;

/// Module containing the implementation of the `show` command.
/// Reports the newest episode, missing episodes and extensions of one show.
pub mod show;

/// Module containing the implementation of the `shows` command.
pub mod shows;

use crate::output::print_warning;
use medialist_core::DiscoveryWarning;

/// Error returned by every command.
pub type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Surfaces discovery warnings once each.
pub(crate) fn report_warnings(warnings: &[DiscoveryWarning]) {
    for warning in warnings {
        print_warning(&warning.to_string());
    }
}

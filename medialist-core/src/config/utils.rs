//! Configuration utility functions
//!
//! This module provides helper functions for reading configuration values
//! from environment variables.

use std::path::PathBuf;

/// Get a non-empty string value from an environment variable, if set
pub fn get_env_opt_string(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|val| !val.trim().is_empty())
}

/// Parse a platform path list (`:` on Unix, `;` on Windows) from an
/// environment variable. Empty entries are dropped. Returns `None` if unset.
pub fn get_env_paths(key: &str) -> Option<Vec<PathBuf>> {
    let raw = std::env::var_os(key)?;
    Some(
        std::env::split_paths(&raw)
            .filter(|p| !p.as_os_str().is_empty())
            .collect(),
    )
}

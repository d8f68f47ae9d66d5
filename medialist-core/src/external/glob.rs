//! Wildcard patterns for directory listings.
//!
//! `?` matches exactly one character and `*` matches zero or more characters.
//! Every other character is literal. A pattern always has to match the whole
//! base name. Case sensitivity is not special-cased.

use crate::error::{CoreError, CoreResult};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Directories holding one season of a show.
pub static SEASON_DIR_PATTERN: Lazy<GlobPattern> =
    Lazy::new(|| GlobPattern::compile("Season *").expect("season glob is a valid pattern"));

/// Episode files carrying a two-character season and episode token.
pub static EPISODE_FILE_PATTERN: Lazy<GlobPattern> =
    Lazy::new(|| GlobPattern::compile("* - S??E?? - *").expect("episode glob is a valid pattern"));

/// Matches every entry.
pub static ANY_PATTERN: Lazy<GlobPattern> =
    Lazy::new(|| GlobPattern::compile("*").expect("catch-all glob is a valid pattern"));

/// A compiled wildcard pattern.
#[derive(Clone)]
pub struct GlobPattern {
    source: String,
    regex: Regex,
}

impl GlobPattern {
    /// Compiles a wildcard pattern into an anchored regular expression.
    pub fn compile(pattern: &str) -> CoreResult<Self> {
        let mut expr = String::with_capacity(pattern.len() + 8);
        expr.push_str("(?s)^");
        let mut literal = String::new();
        for ch in pattern.chars() {
            match ch {
                '?' | '*' => {
                    expr.push_str(&regex::escape(&literal));
                    literal.clear();
                    expr.push_str(if ch == '?' { "." } else { ".*" });
                }
                _ => literal.push(ch),
            }
        }
        expr.push_str(&regex::escape(&literal));
        expr.push('$');

        let regex = Regex::new(&expr)
            .map_err(|e| CoreError::Config(format!("Invalid glob pattern '{pattern}': {e}")))?;
        Ok(Self {
            source: pattern.to_string(),
            regex,
        })
    }

    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl fmt::Debug for GlobPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("GlobPattern").field(&self.source).finish()
    }
}

impl fmt::Display for GlobPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

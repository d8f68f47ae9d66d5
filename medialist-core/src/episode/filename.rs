//! Parsing of the `S<SS>E<EE>` token embedded in episode filenames.
//!
//! The parse is a fixed three-stage split, not a pattern search, so that it
//! agrees exactly with how existing libraries were named:
//!
//! 1. split on `" - S"` and keep the second segment,
//! 2. split that on `" - "` and keep the first segment,
//! 3. split that on `"E"`; the first two segments are season and episode.
//!
//! Digit counts are not checked here. Files only reach this parser after
//! matching the `* - S??E?? - *` listing glob.

use super::EpisodeKey;
use crate::error::{CoreError, CoreResult};

/// Extracts the season and episode numbers from an episode file's base name.
///
/// # Examples
///
/// ```rust
/// use medialist_core::episode::{parse_episode_name, EpisodeKey};
///
/// let key = parse_episode_name("Firefly - S01E05 - Safe.mkv").unwrap();
/// assert_eq!(key, EpisodeKey::new(1, 5));
/// ```
pub fn parse_episode_name(name: &str) -> CoreResult<EpisodeKey> {
    let invalid = |reason: &str| CoreError::InvalidEpisodeName {
        name: name.to_string(),
        reason: reason.to_string(),
    };

    let after_marker = name
        .split(" - S")
        .nth(1)
        .ok_or_else(|| invalid("no ' - S' marker"))?;
    // `split` always yields at least one segment.
    let token = after_marker.split(" - ").next().unwrap_or(after_marker);

    let mut parts = token.split('E');
    let season_text = parts.next().unwrap_or_default();
    let episode_text = parts.next().ok_or_else(|| invalid("no 'E' separator in episode token"))?;

    let season = parse_number(season_text).ok_or_else(|| invalid("season is not a number"))?;
    let episode = parse_number(episode_text).ok_or_else(|| invalid("episode is not a number"))?;
    Ok(EpisodeKey::new(season, episode))
}

// Surrounding whitespace is tolerated, signs and other junk are not.
fn parse_number(text: &str) -> Option<u32> {
    let text = text.trim();
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

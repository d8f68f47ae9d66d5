// ============================================================================
// medialist-core/src/episode/mod.rs
// ============================================================================
//
// EPISODE ANALYSIS: Filename Parsing and Season Scanning
//
// This module turns the files inside a show's season folders into numbered
// episodes.
//
// KEY COMPONENTS:
// - filename: `<prefix> - S<SS>E<EE> - <suffix>` token parsing
// - season: `Season <N>` folder parsing and per-season scans
// - extensions: distinct file extensions across scanned files
//
// Two season numbers exist side by side. The folder-derived one comes from
// the `Season <N>` directory name and the file-derived one from the token in
// each filename. See `show::TvShow` for which report uses which.

use serde::Serialize;
use std::fmt;

pub mod extensions;
pub mod filename;
pub mod season;

pub use extensions::ExtensionCollector;
pub use filename::parse_episode_name;
pub use season::{SeasonScan, SeasonScanner, parse_season_folder};

/// Season and episode numbers taken from one episode filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct EpisodeKey {
    pub season: u32,
    pub episode: u32,
}

impl EpisodeKey {
    pub const fn new(season: u32, episode: u32) -> Self {
        Self { season, episode }
    }
}

/// Formats as `S01E02`; numbers wider than two digits are not truncated.
impl fmt::Display for EpisodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S{:02}E{:02}", self.season, self.episode)
    }
}

/// One entry of a missing-episode report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MissingEpisode {
    /// A gap inside a season that has a folder.
    Episode { season: u32, episode: u32 },
    /// No folder at all for this season.
    Season { season: u32 },
}

impl fmt::Display for MissingEpisode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Episode { season, episode } => write!(f, "{}", EpisodeKey::new(*season, *episode)),
            Self::Season { season } => write!(f, "S{season:02}E**"),
        }
    }
}

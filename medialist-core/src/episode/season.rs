//! Season folders and the episode files inside them.

use super::{EpisodeKey, parse_episode_name};
use crate::config::ParseFailurePolicy;
use crate::error::{CoreError, CoreResult};
use crate::external::glob::EPISODE_FILE_PATTERN;
use crate::external::{DirHandle, DirectoryReader, FileHandle};

use log::{debug, warn};
use std::collections::BTreeSet;

/// Length of the `"Season "` prefix stripped from season folder names.
const SEASON_PREFIX_LEN: usize = 7;

/// Parses the folder-derived season number of a `Season <N>` directory.
///
/// The first seven characters are dropped without being inspected; the rest
/// must be a non-negative integer. Names of seven characters or fewer fail.
pub fn parse_season_folder(name: &str) -> CoreResult<u32> {
    let invalid = || CoreError::InvalidSeasonFolderName {
        name: name.to_string(),
    };
    let (offset, _) = name.char_indices().nth(SEASON_PREFIX_LEN).ok_or_else(invalid)?;
    let number = name[offset..].trim();
    if number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    number.parse().map_err(|_| invalid())
}

/// Episodes found in one season folder.
#[derive(Debug, Clone, Default)]
pub struct SeasonScan {
    /// Parsed episodes with the file they came from, in listing order
    pub episodes: Vec<(FileHandle, EpisodeKey)>,
}

impl SeasonScan {
    /// Episode numbers present, for gap detection.
    pub fn episode_numbers(&self) -> BTreeSet<u32> {
        self.episodes.iter().map(|(_, key)| key.episode).collect()
    }

    /// File-derived keys, for newest-episode tracking.
    pub fn keys(&self) -> impl Iterator<Item = EpisodeKey> + '_ {
        self.episodes.iter().map(|(_, key)| *key)
    }

    pub fn is_empty(&self) -> bool {
        self.episodes.is_empty()
    }
}

/// Reads season folders through a `DirectoryReader`.
pub struct SeasonScanner<'a> {
    reader: &'a dyn DirectoryReader,
    policy: ParseFailurePolicy,
}

impl<'a> SeasonScanner<'a> {
    pub fn new(reader: &'a dyn DirectoryReader, policy: ParseFailurePolicy) -> Self {
        Self { reader, policy }
    }

    /// Lists the files matching the episode glob without parsing them.
    pub fn episode_files(&self, season: &DirHandle) -> CoreResult<Vec<FileHandle>> {
        self.reader.list_files(&season.path, &EPISODE_FILE_PATTERN)
    }

    /// Lists and parses the episode files of one season folder.
    pub fn scan(&self, season: &DirHandle) -> CoreResult<SeasonScan> {
        let files = self.episode_files(season)?;
        let mut scan = SeasonScan {
            episodes: Vec::with_capacity(files.len()),
        };
        for file in files {
            match parse_episode_name(&file.name) {
                Ok(key) => scan.episodes.push((file, key)),
                Err(e) if self.policy == ParseFailurePolicy::Skip => {
                    warn!("Skipping {}: {}", file.path.display(), e);
                }
                Err(e) => return Err(e),
            }
        }
        debug!(
            "Scanned '{}': {} episode file(s)",
            season.name,
            scan.episodes.len()
        );
        Ok(scan)
    }

    /// Parses a season folder name, honoring the failure policy.
    ///
    /// Returns `Ok(None)` for a malformed name under `ParseFailurePolicy::Skip`.
    pub fn season_number(&self, season: &DirHandle) -> CoreResult<Option<u32>> {
        match parse_season_folder(&season.name) {
            Ok(number) => Ok(Some(number)),
            Err(e) if self.policy == ParseFailurePolicy::Skip => {
                warn!("Skipping {}: {}", season.path.display(), e);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::external::MemoryDirectoryReader;

    #[test]
    fn season_folder_numbers() {
        assert_eq!(parse_season_folder("Season 1").unwrap(), 1);
        assert_eq!(parse_season_folder("Season 10").unwrap(), 10);
        assert_eq!(parse_season_folder("Season 03").unwrap(), 3);
    }

    #[test]
    fn short_season_folder_names_fail() {
        assert!(matches!(
            parse_season_folder("Season "),
            Err(CoreError::InvalidSeasonFolderName { .. })
        ));
        assert!(parse_season_folder("Season").is_err());
    }

    #[test]
    fn non_numeric_season_folder_names_fail() {
        assert!(parse_season_folder("Season One").is_err());
        assert!(parse_season_folder("Season 1 (2005)").is_err());
    }

    #[test]
    fn prefix_is_not_inspected() {
        // Only the offset matters; the listing glob already checked the prefix.
        assert_eq!(parse_season_folder("XXXXXXX4").unwrap(), 4);
    }

    fn reader_with_bad_file() -> MemoryDirectoryReader {
        let reader = MemoryDirectoryReader::new();
        reader
            .add_file("/tv/Show/Season 1/Show - S01E01 - Pilot.mkv", 10)
            .add_file("/tv/Show/Season 1/Show - SxxE02 - Broken.mkv", 10)
            .add_file("/tv/Show/Season 1/Show - S01E03 - Three.mkv", 10)
            .add_file("/tv/Show/Season 1/cover.jpg", 10);
        reader
    }

    #[test]
    fn scan_aborts_on_bad_name_by_default() {
        let reader = reader_with_bad_file();
        let scanner = SeasonScanner::new(&reader, ParseFailurePolicy::Abort);
        let season = DirHandle::from_path("/tv/Show/Season 1");
        assert!(matches!(
            scanner.scan(&season),
            Err(CoreError::InvalidEpisodeName { .. })
        ));
    }

    #[test]
    fn scan_skips_bad_name_when_asked() {
        let reader = reader_with_bad_file();
        let scanner = SeasonScanner::new(&reader, ParseFailurePolicy::Skip);
        let season = DirHandle::from_path("/tv/Show/Season 1");
        let scan = scanner.scan(&season).unwrap();
        assert_eq!(scan.episode_numbers(), BTreeSet::from([1, 3]));
        assert_eq!(scanner.episode_files(&season).unwrap().len(), 3);
    }
}

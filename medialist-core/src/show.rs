// ============================================================================
// medialist-core/src/show.rs
// ============================================================================
//
// TV SHOW INDEX: Newest Episode, Missing Episodes and Extensions
//
// A `TvShow` wraps one show directory and answers three questions about it.
// Each answer is computed on first request, by listing the show's `Season *`
// folders and the `* - S??E?? - *` files inside them, and then memoized for
// the lifetime of the instance.
//
// KEY COMPONENTS:
// - TvShow: per-show handle with memoized reports
// - ShowReport: serializable bundle of all three reports
//
// MEMOIZATION:
// Each report lives in a `once_cell::sync::OnceCell`, written at most once.
// A failed computation leaves its cell empty and does not touch the others.
// Later file system changes are not picked up until `invalidate()` is called
// or a new instance is created.

// ---- Internal crate imports ----
use crate::config::ParseFailurePolicy;
use crate::discovery::Named;
use crate::episode::{EpisodeKey, ExtensionCollector, MissingEpisode, SeasonScanner};
use crate::error::{CoreError, CoreResult};
use crate::external::glob::SEASON_DIR_PATTERN;
use crate::external::{DirHandle, DirectoryReader, StdDirectoryReader};

// ---- External crate imports ----
use log::debug;
use once_cell::sync::OnceCell;
use serde::Serialize;

// ---- Standard library imports ----
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::path::Path;
use std::sync::Arc;

/// Shown when no season holds an episode with non-zero numbers.
pub const NEWEST_NOT_AVAILABLE: &str = "Not available.";

/// Shown when no episode is missing.
pub const MISSING_NONE: &str = "None";

/// Separator used when joining report entries.
const LIST_SEPARATOR: &str = ", ";

/// All three reports for one show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShowReport {
    pub name: String,
    pub path: String,
    pub newest_episode: String,
    pub missing_episodes: String,
    pub extensions_used: String,
}

/// One TV show directory.
pub struct TvShow {
    dir: DirHandle,
    reader: Arc<dyn DirectoryReader>,
    policy: ParseFailurePolicy,

    newest: OnceCell<Option<EpisodeKey>>,
    newest_text: OnceCell<String>,
    missing: OnceCell<Vec<MissingEpisode>>,
    missing_text: OnceCell<String>,
    extensions: OnceCell<BTreeSet<String>>,
    extensions_text: OnceCell<String>,
}

impl TvShow {
    /// Creates a show backed by the host file system.
    pub fn new(dir: DirHandle) -> Self {
        Self::with_reader(dir, Arc::new(StdDirectoryReader::new()))
    }

    /// Creates a show backed by the host file system from a bare path.
    pub fn open(path: impl AsRef<Path>) -> CoreResult<Self> {
        let path = path.as_ref();
        let reader = StdDirectoryReader::new();
        if !reader.exists(path) {
            return Err(CoreError::PathNotFound(path.to_path_buf()));
        }
        Ok(Self::new(DirHandle::from_path(path)))
    }

    pub fn with_reader(dir: DirHandle, reader: Arc<dyn DirectoryReader>) -> Self {
        Self {
            dir,
            reader,
            policy: ParseFailurePolicy::default(),
            newest: OnceCell::new(),
            newest_text: OnceCell::new(),
            missing: OnceCell::new(),
            missing_text: OnceCell::new(),
            extensions: OnceCell::new(),
            extensions_text: OnceCell::new(),
        }
    }

    /// Sets how malformed season folders and episode names are handled.
    pub fn with_policy(mut self, policy: ParseFailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn name(&self) -> &str {
        &self.dir.name
    }

    pub fn path(&self) -> &Path {
        &self.dir.path
    }

    pub fn dir(&self) -> &DirHandle {
        &self.dir
    }

    /// Drops every memoized report so the next request re-reads the folders.
    pub fn invalidate(&mut self) {
        self.newest.take();
        self.newest_text.take();
        self.missing.take();
        self.missing_text.take();
        self.extensions.take();
        self.extensions_text.take();
    }

    fn scanner(&self) -> SeasonScanner<'_> {
        SeasonScanner::new(self.reader.as_ref(), self.policy)
    }

    /// Season folders paired with their folder-derived numbers, ordered by
    /// number and then by name.
    fn seasons(&self) -> CoreResult<Vec<(u32, DirHandle)>> {
        let scanner = self.scanner();
        let mut seasons = Vec::new();
        for dir in self.reader.list_subdirectories(&self.dir.path, &SEASON_DIR_PATTERN)? {
            if let Some(number) = scanner.season_number(&dir)? {
                seasons.push((number, dir));
            }
        }
        seasons.sort_by(|(a, a_dir), (b, b_dir)| a.cmp(b).then_with(|| a_dir.name.cmp(&b_dir.name)));
        Ok(seasons)
    }

    // ------------------------------------------------------------------------
    // Newest episode
    // ------------------------------------------------------------------------

    /// The newest episode as a file-derived key, if any qualifies.
    ///
    /// A season folder is only scanned when its folder number is greater than
    /// the season of the episode currently held. Within a scanned season the
    /// episode with the highest number wins, compared against that season
    /// alone. The kept key is always the one read from the filename.
    pub fn newest_episode_key(&self) -> CoreResult<Option<EpisodeKey>> {
        self.newest
            .get_or_try_init(|| self.compute_newest())
            .copied()
    }

    fn compute_newest(&self) -> CoreResult<Option<EpisodeKey>> {
        let scanner = self.scanner();
        let mut newest: Option<EpisodeKey> = None;

        for (number, dir) in self.seasons()? {
            let held_season = newest.map_or(0, |key| key.season);
            if number <= held_season {
                continue;
            }
            let mut season_high = 0;
            for key in scanner.scan(&dir)?.keys() {
                if key.episode > season_high {
                    season_high = key.episode;
                    newest = Some(key);
                }
            }
        }

        let newest = newest.filter(|key| key.season > 0 && key.episode > 0);
        debug!("Newest episode of '{}': {:?}", self.dir.name, newest);
        Ok(newest)
    }

    /// `S01E02`-style newest episode, or `"Not available."`.
    pub fn newest_episode(&self) -> CoreResult<&str> {
        self.newest_text
            .get_or_try_init(|| {
                Ok(self
                    .newest_episode_key()?
                    .map_or_else(|| NEWEST_NOT_AVAILABLE.to_string(), |key| key.to_string()))
            })
            .map(String::as_str)
    }

    // ------------------------------------------------------------------------
    // Missing episodes
    // ------------------------------------------------------------------------

    /// Gaps in the show, season by season.
    ///
    /// Seasons `1..=highest folder number` are checked. A season without a
    /// folder is reported whole. Inside a season every number from 1 to the
    /// highest one present must exist. Season folders with no episode files
    /// are reported whole as well.
    pub fn missing_episode_list(&self) -> CoreResult<&[MissingEpisode]> {
        self.missing
            .get_or_try_init(|| self.compute_missing())
            .map(Vec::as_slice)
    }

    fn compute_missing(&self) -> CoreResult<Vec<MissingEpisode>> {
        let scanner = self.scanner();
        let mut by_season: BTreeMap<u32, BTreeSet<u32>> = BTreeMap::new();
        for (number, dir) in self.seasons()? {
            let episodes = scanner.scan(&dir)?.episode_numbers();
            // Folders sharing a number ("Season 1", "Season 01") are merged.
            by_season.entry(number).or_default().extend(episodes);
        }

        let highest = by_season.keys().next_back().copied().unwrap_or(0);
        let mut missing = Vec::new();
        for season in 1..=highest {
            match by_season.get(&season) {
                Some(episodes) if !episodes.is_empty() => {
                    let max = episodes.iter().next_back().copied().unwrap_or(0);
                    missing.extend(
                        (1..=max)
                            .filter(|episode| !episodes.contains(episode))
                            .map(|episode| MissingEpisode::Episode { season, episode }),
                    );
                }
                _ => missing.push(MissingEpisode::Season { season }),
            }
        }
        debug!("Missing episodes of '{}': {}", self.dir.name, missing.len());
        Ok(missing)
    }

    /// Comma-separated missing episodes, or `"None"`.
    pub fn missing_episodes(&self) -> CoreResult<&str> {
        self.missing_text
            .get_or_try_init(|| {
                let missing = self.missing_episode_list()?;
                if missing.is_empty() {
                    return Ok(MISSING_NONE.to_string());
                }
                Ok(join(missing))
            })
            .map(String::as_str)
    }

    // ------------------------------------------------------------------------
    // Extensions
    // ------------------------------------------------------------------------

    /// Distinct lowercased extensions of every episode file.
    ///
    /// Filenames are not parsed here and season folder names are not checked,
    /// so this report never fails on a malformed name.
    pub fn extension_set(&self) -> CoreResult<&BTreeSet<String>> {
        self.extensions.get_or_try_init(|| {
            let scanner = self.scanner();
            let mut collector = ExtensionCollector::new();
            for dir in self.reader.list_subdirectories(&self.dir.path, &SEASON_DIR_PATTERN)? {
                collector.extend(&scanner.episode_files(&dir)?);
            }
            Ok(collector.into_set())
        })
    }

    /// Sorted, comma-separated extensions. Empty when there are no episodes.
    pub fn extensions_used(&self) -> CoreResult<&str> {
        self.extensions_text
            .get_or_try_init(|| Ok(join(self.extension_set()?)))
            .map(String::as_str)
    }

    /// Builds all three reports.
    pub fn report(&self) -> CoreResult<ShowReport> {
        Ok(ShowReport {
            name: self.dir.name.clone(),
            path: self.dir.path.display().to_string(),
            newest_episode: self.newest_episode()?.to_string(),
            missing_episodes: self.missing_episodes()?.to_string(),
            extensions_used: self.extensions_used()?.to_string(),
        })
    }
}

fn join<T: fmt::Display>(items: impl IntoIterator<Item = T>) -> String {
    items
        .into_iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(LIST_SEPARATOR)
}

impl Named for TvShow {
    fn name(&self) -> &str {
        &self.dir.name
    }
}

impl fmt::Display for TvShow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.dir.name)
    }
}

impl fmt::Debug for TvShow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TvShow")
            .field("dir", &self.dir)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::external::MemoryDirectoryReader;
    use pretty_assertions::assert_eq;

    const ROOT: &str = "/tv/Show";

    fn show_with(files: &[(&str, &str)]) -> (Arc<MemoryDirectoryReader>, TvShow) {
        let reader = Arc::new(MemoryDirectoryReader::new());
        reader.add_dir(ROOT);
        for (season, file) in files {
            let season_dir = format!("{ROOT}/{season}");
            if file.is_empty() {
                reader.add_dir(&season_dir);
            } else {
                reader.add_file(format!("{season_dir}/{file}"), 100);
            }
        }
        let show = TvShow::with_reader(DirHandle::from_path(ROOT), reader.clone());
        (reader, show)
    }

    #[test]
    fn newest_prefers_later_season_over_higher_episode() {
        let (_, show) = show_with(&[
            ("Season 1", "Show - S01E01 - a.mkv"),
            ("Season 1", "Show - S01E02 - b.mkv"),
            ("Season 1", "Show - S01E03 - c.mkv"),
            ("Season 2", "Show - S02E01 - d.mkv"),
        ]);
        assert_eq!(show.newest_episode().unwrap(), "S02E01");
    }

    #[test]
    fn newest_without_seasons_is_not_available() {
        let (_, show) = show_with(&[]);
        assert_eq!(show.newest_episode().unwrap(), NEWEST_NOT_AVAILABLE);
        assert_eq!(show.newest_episode_key().unwrap(), None);
    }

    #[test]
    fn newest_uses_file_derived_numbers() {
        // Folder says 3, filename says 2.
        let (_, show) = show_with(&[
            ("Season 1", "Show - S01E04 - a.mkv"),
            ("Season 3", "Show - S02E07 - misfiled.mkv"),
        ]);
        assert_eq!(show.newest_episode().unwrap(), "S02E07");
    }

    #[test]
    fn newest_keeps_earlier_winner_when_later_season_is_empty() {
        let (_, show) = show_with(&[
            ("Season 1", "Show - S01E05 - a.mkv"),
            ("Season 2", ""),
        ]);
        assert_eq!(show.newest_episode().unwrap(), "S01E05");
    }

    #[test]
    fn newest_ignores_season_zero() {
        let (_, show) = show_with(&[("Season 0", "Show - S00E01 - special.mkv")]);
        assert_eq!(show.newest_episode().unwrap(), NEWEST_NOT_AVAILABLE);
    }

    #[test]
    fn newest_sorts_season_folders_numerically() {
        let (_, show) = show_with(&[
            ("Season 2", "Show - S02E01 - a.mkv"),
            ("Season 10", "Show - S10E03 - b.mkv"),
        ]);
        assert_eq!(show.newest_episode().unwrap(), "S10E03");
    }

    #[test]
    fn missing_reports_gaps_and_empty_seasons() {
        let (_, show) = show_with(&[
            ("Season 1", "Show - S01E01 - a.mkv"),
            ("Season 1", "Show - S01E03 - c.mkv"),
            ("Season 2", ""),
        ]);
        assert_eq!(show.missing_episodes().unwrap(), "S01E02, S02E**");
    }

    #[test]
    fn missing_reports_absent_season_folders() {
        let (_, show) = show_with(&[
            ("Season 1", "Show - S01E01 - a.mkv"),
            ("Season 3", "Show - S03E02 - b.mkv"),
        ]);
        assert_eq!(show.missing_episodes().unwrap(), "S02E**, S03E01");
    }

    #[test]
    fn missing_without_seasons_is_none() {
        let (_, show) = show_with(&[]);
        assert_eq!(show.missing_episodes().unwrap(), MISSING_NONE);
    }

    #[test]
    fn missing_keys_on_folder_number() {
        // Filename claims season 5 but lives in "Season 1".
        let (_, show) = show_with(&[
            ("Season 1", "Show - S05E01 - a.mkv"),
            ("Season 1", "Show - S05E02 - b.mkv"),
        ]);
        assert_eq!(show.missing_episodes().unwrap(), MISSING_NONE);
    }

    #[test]
    fn extensions_are_case_folded_and_sorted() {
        let (_, show) = show_with(&[
            ("Season 1", "Show - S01E01 - Pilot.mkv"),
            ("Season 1", "Show - S01E02 - Two.MKV"),
            ("Season 2", "Show - S02E01 - Three.avi"),
        ]);
        assert_eq!(show.extensions_used().unwrap(), ".avi, .mkv");
    }

    #[test]
    fn extensions_do_not_parse_names() {
        let (_, show) = show_with(&[
            ("Season X", "Show - SxxEyy - Odd.mp4"),
        ]);
        assert!(show.newest_episode().is_err());
        assert_eq!(show.extensions_used().unwrap(), ".mp4");
    }

    #[test]
    fn failed_report_leaves_others_intact() {
        let (_, show) = show_with(&[
            ("Season 1", "Show - S01E01 - a.mkv"),
            ("Season 1", "Show - SxxE02 - b.mkv"),
        ]);
        let err = show.missing_episodes().unwrap_err();
        assert!(err.is_name_error());
        assert_eq!(show.extensions_used().unwrap(), ".mkv");
    }

    #[test]
    fn skip_policy_tolerates_bad_names() {
        let (_, show) = show_with(&[
            ("Season 1", "Show - S01E01 - a.mkv"),
            ("Season 1", "Show - SxxE02 - b.mkv"),
            ("Season Two", "Show - S02E01 - c.mkv"),
        ]);
        let show = show.with_policy(ParseFailurePolicy::Skip);
        assert_eq!(show.newest_episode().unwrap(), "S01E01");
        assert_eq!(show.missing_episodes().unwrap(), MISSING_NONE);
    }

    #[test]
    fn reports_are_memoized_until_invalidated() {
        let (reader, mut show) = show_with(&[("Season 1", "Show - S01E01 - a.mkv")]);
        assert_eq!(show.newest_episode().unwrap(), "S01E01");

        reader.add_file(format!("{ROOT}/Season 2/Show - S02E01 - b.mkv"), 1);
        assert_eq!(show.newest_episode().unwrap(), "S01E01");
        assert_eq!(show.missing_episodes().unwrap(), MISSING_NONE);

        show.invalidate();
        assert_eq!(show.newest_episode().unwrap(), "S02E01");
    }

    #[test]
    fn report_bundles_all_fields() {
        let (_, show) = show_with(&[("Season 1", "Show - S01E02 - b.mkv")]);
        let report = show.report().unwrap();
        assert_eq!(
            report,
            ShowReport {
                name: "Show".to_string(),
                path: ROOT.to_string(),
                newest_episode: "S01E02".to_string(),
                missing_episodes: "S01E01".to_string(),
                extensions_used: ".mkv".to_string(),
            }
        );
    }
}

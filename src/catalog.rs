//! Catalog module holding the title records of the library
//!
//! This module provides the `TitleRecord` type representing a single film or
//! series episode, and the `Catalog` holding the ordered collection of all
//! records together with the derived episode-count index.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Distinguishes the two kinds of title records in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TitleKind {
    /// A standalone film
    Film,
    /// One installment of an episodic series
    Episode {
        /// Season number (1-based)
        season: u32,
        /// Episode number within the season (1-based)
        episode: u32,
    },
}

/// A single entry in the catalog: a film or a series episode
///
/// Every record carries a display title, publish year, genre and an
/// accumulated view counter. The counter starts at zero and only ever grows
/// through [`TitleRecord::record_view`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleRecord {
    /// Display title of the film or series
    pub title: String,
    /// Publish year
    pub year: i32,
    /// Genre label (free-form, e.g. "thriller")
    pub genre: String,
    /// Film or episode variant
    pub kind: TitleKind,
    /// Accumulated view count; kept private so it stays monotonic
    views: u64,
}

impl TitleRecord {
    /// Creates a film record with zero views
    pub fn film(title: impl Into<String>, year: i32, genre: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            year,
            genre: genre.into(),
            kind: TitleKind::Film,
            views: 0,
        }
    }

    /// Creates an episode record with zero views
    ///
    /// # Arguments
    ///
    /// * `title` - The series title shared by all installments
    /// * `year` - Publish year of this installment
    /// * `genre` - Genre label
    /// * `season` - Season number, must be >= 1
    /// * `episode` - Episode number within the season, must be >= 1
    pub fn episode(
        title: impl Into<String>,
        year: i32,
        genre: impl Into<String>,
        season: u32,
        episode: u32,
    ) -> Self {
        debug_assert!(season >= 1, "season numbers start at 1");
        debug_assert!(episode >= 1, "episode numbers start at 1");
        Self {
            title: title.into(),
            year,
            genre: genre.into(),
            kind: TitleKind::Episode { season, episode },
            views: 0,
        }
    }

    /// Returns true if this record is a film
    pub fn is_film(&self) -> bool {
        matches!(self.kind, TitleKind::Film)
    }

    /// Returns true if this record is a series episode
    pub fn is_episode(&self) -> bool {
        matches!(self.kind, TitleKind::Episode { .. })
    }

    /// Returns the accumulated view count
    pub fn views(&self) -> u64 {
        self.views
    }

    /// Records a play of this title, adding `amount` to the view counter
    ///
    /// The counter never decreases; callers pass 1 for a single play.
    pub fn record_view(&mut self, amount: u64) {
        self.views += amount;
    }

    /// Returns true if `candidate` matches this record's title ignoring case
    pub fn title_matches(&self, candidate: &str) -> bool {
        self.title.to_lowercase() == candidate.to_lowercase()
    }
}

impl fmt::Display for TitleRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TitleKind::Film => write!(f, "{} ({})", self.title, self.year),
            TitleKind::Episode { season, episode } => {
                write!(f, "{} S{:02}E{:02}", self.title, season, episode)
            }
        }
    }
}

/// The ordered collection of all title records in the library
///
/// Besides the records themselves, the catalog maintains a derived index
/// mapping series titles to the number of episode records carrying that exact
/// title. The index is updated whenever an episode enters the catalog, so it
/// always equals the count of matching episode records.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    records: Vec<TitleRecord>,
    episode_counts: HashMap<String, usize>,
}

impl Catalog {
    /// Creates an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from an iterator of records
    pub fn from_records(records: impl IntoIterator<Item = TitleRecord>) -> Self {
        let mut catalog = Self::new();
        catalog.extend(records);
        catalog
    }

    /// Appends a record, updating the derived episode-count index
    pub fn push(&mut self, record: TitleRecord) {
        if record.is_episode() {
            self.episode_counts
                .entry(record.title.clone())
                .and_modify(|count| *count += 1)
                .or_insert(1);
        }
        self.records.push(record);
    }

    /// Appends all records from the iterator in order
    pub fn extend(&mut self, records: impl IntoIterator<Item = TitleRecord>) {
        for record in records {
            self.push(record);
        }
    }

    /// Number of records in the catalog
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the catalog holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the record at `index`, if any
    pub fn get(&self, index: usize) -> Option<&TitleRecord> {
        self.records.get(index)
    }

    /// Iterates over all records in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &TitleRecord> {
        self.records.iter()
    }

    /// Returns all records as a slice, in insertion order
    pub fn records(&self) -> &[TitleRecord] {
        &self.records
    }

    /// Records a play of the record at `index`
    ///
    /// Adds `amount` to the record's view counter and returns the new total,
    /// or `None` if the index is out of range. This is the only mutation the
    /// catalog exposes for stored records, which keeps the episode-count
    /// index consistent with the record titles.
    pub fn record_view(&mut self, index: usize, amount: u64) -> Option<u64> {
        let record = self.records.get_mut(index)?;
        record.record_view(amount);
        Some(record.views())
    }

    /// Returns all film records, sorted ascending by case-insensitive title
    ///
    /// The sort is stable: films sharing a title keep their original relative
    /// order. The catalog itself is not modified.
    pub fn films(&self) -> Vec<&TitleRecord> {
        self.filtered_sorted(TitleRecord::is_film)
    }

    /// Returns all episode records, sorted ascending by case-insensitive title
    ///
    /// Stable like [`Catalog::films`]; installments of the same series keep
    /// their insertion order.
    pub fn episodes(&self) -> Vec<&TitleRecord> {
        self.filtered_sorted(TitleRecord::is_episode)
    }

    fn filtered_sorted(&self, keep: impl Fn(&TitleRecord) -> bool) -> Vec<&TitleRecord> {
        let mut selected: Vec<&TitleRecord> =
            self.records.iter().filter(|record| keep(record)).collect();
        selected.sort_by_key(|record| record.title.to_lowercase());
        selected
    }

    /// Finds the first record whose title matches `title` ignoring case
    ///
    /// Returns `None` when nothing matches; a miss is a normal outcome, not
    /// an error.
    pub fn find_by_title(&self, title: &str) -> Option<&TitleRecord> {
        self.records
            .iter()
            .find(|record| record.title_matches(title))
    }

    /// Number of episode records carrying exactly this title
    ///
    /// The lookup is case-sensitive against the construction-time casing.
    /// Titles never seen as an episode yield 0.
    pub fn episode_count(&self, title: &str) -> usize {
        self.episode_counts.get(title).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> Catalog {
        Catalog::from_records([
            TitleRecord::episode("Alf", 1986, "comedy", 1, 1),
            TitleRecord::film("Funny Games", 2004, "thriller"),
            TitleRecord::episode("Alf", 1986, "comedy", 1, 2),
            TitleRecord::film("Amelia", 1997, "comedy"),
        ])
    }

    #[test]
    fn test_display_film() {
        let film = TitleRecord::film("Funny Games", 2004, "thriller");
        assert_eq!(film.to_string(), "Funny Games (2004)");
    }

    #[test]
    fn test_display_episode_zero_padded() {
        let episode = TitleRecord::episode("Alf", 1986, "comedy", 1, 2);
        assert_eq!(episode.to_string(), "Alf S01E02");

        let late = TitleRecord::episode("Alf", 1989, "comedy", 4, 12);
        assert_eq!(late.to_string(), "Alf S04E12");
    }

    #[test]
    fn test_record_view_accumulates() {
        let mut film = TitleRecord::film("Amelia", 1997, "comedy");
        assert_eq!(film.views(), 0);

        film.record_view(50);
        assert_eq!(film.views(), 50);

        for _ in 0..3 {
            film.record_view(1);
        }
        assert_eq!(film.views(), 53);
    }

    #[test]
    fn test_filters_partition_the_catalog() {
        let catalog = sample_catalog();
        let films = catalog.films();
        let episodes = catalog.episodes();

        assert_eq!(films.len() + episodes.len(), catalog.len());
        assert!(films.iter().all(|record| record.is_film()));
        assert!(episodes.iter().all(|record| record.is_episode()));
    }

    #[test]
    fn test_filters_sort_case_insensitively() {
        let catalog = Catalog::from_records([
            TitleRecord::film("zodiac", 2007, "thriller"),
            TitleRecord::film("Amelia", 1997, "comedy"),
            TitleRecord::film("brazil", 1985, "sci-fi"),
        ]);

        let titles: Vec<&str> = catalog
            .films()
            .iter()
            .map(|record| record.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Amelia", "brazil", "zodiac"]);
    }

    #[test]
    fn test_filter_sort_is_stable_for_equal_titles() {
        let catalog = Catalog::from_records([
            TitleRecord::film("Solaris", 2002, "sci-fi"),
            TitleRecord::film("solaris", 1972, "sci-fi"),
        ]);

        let years: Vec<i32> = catalog.films().iter().map(|record| record.year).collect();
        // Equal case-insensitive titles keep insertion order
        assert_eq!(years, vec![2002, 1972]);
    }

    #[test]
    fn test_find_by_title_ignores_case() {
        let catalog = sample_catalog();
        let found = catalog.find_by_title("ALF").expect("Alf should be found");
        assert_eq!(found.title, "Alf");
    }

    #[test]
    fn test_find_by_title_miss_returns_none() {
        let catalog = sample_catalog();
        assert!(catalog.find_by_title("Nonexistent").is_none());
    }

    #[test]
    fn test_episode_count_tracks_constructed_episodes() {
        let catalog = sample_catalog();
        assert_eq!(catalog.episode_count("Alf"), 2);
        assert_eq!(catalog.episode_count("Funny Games"), 0);
    }

    #[test]
    fn test_episode_count_is_case_sensitive() {
        let catalog = sample_catalog();
        assert_eq!(catalog.episode_count("ALF"), 0);
    }

    #[test]
    fn test_episode_count_matches_catalog_contents() {
        let catalog = sample_catalog();
        let stored = catalog
            .iter()
            .filter(|record| record.is_episode() && record.title == "Alf")
            .count();
        assert_eq!(catalog.episode_count("Alf"), stored);
    }

    #[test]
    fn test_catalog_record_view() {
        let mut catalog = sample_catalog();
        assert_eq!(catalog.record_view(1, 50), Some(50));
        assert_eq!(catalog.get(1).map(TitleRecord::views), Some(50));
        assert_eq!(catalog.record_view(99, 1), None);
    }
}

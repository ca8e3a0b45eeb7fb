//! Fake library generation
//!
//! This module provides the data-generation collaborator used to populate a
//! catalog with plausible-looking titles. The engine only depends on the
//! [`LibraryGenerator`] trait; the shipped implementation fabricates titles
//! with the `fake` crate and draws years, seasons and episode counts from an
//! injected random number generator.

use crate::catalog::TitleRecord;
use fake::Fake;
use fake::faker::lorem::en::Words;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Genre pool the fake generator draws from
const GENRES: &[&str] = &[
    "comedy",
    "thriller",
    "drama",
    "sci-fi",
    "horror",
    "documentary",
    "romance",
    "animation",
];

/// Trait for data sources that can populate a catalog
///
/// Implementors supply ready-made title records; the engine treats them as an
/// opaque source and makes no assumption about how varied or random the
/// produced data is.
pub trait LibraryGenerator {
    /// Produces `films` film records and all episodes of `series` series
    ///
    /// Every generated series contributes at least one episode per season, so
    /// asking for a nonzero number of series always yields episode records.
    fn generate(&mut self, films: usize, series: usize) -> Vec<TitleRecord>;
}

/// Library generator fabricating titles with the `fake` crate
///
/// Titles are short capitalized lorem phrases, genres come from a fixed pool,
/// and publish years fall between 1950 and 2024. Series get one to three
/// seasons with two to six episodes each.
///
/// # Examples
///
/// ```
/// use reel_library::{Catalog, FakeLibraryGenerator, LibraryGenerator};
///
/// let mut generator = FakeLibraryGenerator::with_seed(42);
/// let catalog = Catalog::from_records(generator.generate(5, 2));
/// assert_eq!(catalog.films().len(), 5);
/// ```
pub struct FakeLibraryGenerator {
    rng: StdRng,
}

impl FakeLibraryGenerator {
    /// Creates a generator seeded from system entropy
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a generator with a fixed seed for reproducible libraries
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Fabricates a capitalized one-to-three-word title
    fn fake_title(&mut self) -> String {
        let words: Vec<String> = Words(1..4).fake_with_rng(&mut self.rng);
        words
            .iter()
            .map(|word| capitalize(word))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn fake_genre(&mut self) -> String {
        GENRES[self.rng.gen_range(0..GENRES.len())].to_string()
    }

    fn fake_year(&mut self) -> i32 {
        self.rng.gen_range(1950..=2024)
    }
}

impl Default for FakeLibraryGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl LibraryGenerator for FakeLibraryGenerator {
    fn generate(&mut self, films: usize, series: usize) -> Vec<TitleRecord> {
        let mut records = Vec::new();

        for _ in 0..films {
            let title = self.fake_title();
            let year = self.fake_year();
            let genre = self.fake_genre();
            records.push(TitleRecord::film(title, year, genre));
        }

        for _ in 0..series {
            let title = self.fake_title();
            let genre = self.fake_genre();
            let first_year = self.fake_year();
            let seasons = self.rng.gen_range(1..=3);

            for season in 1..=seasons {
                let episodes = self.rng.gen_range(2..=6);
                // One season per year, starting at the series premiere
                let year = first_year + (season as i32 - 1);

                for episode in 1..=episodes {
                    records.push(TitleRecord::episode(
                        title.clone(),
                        year,
                        genre.clone(),
                        season,
                        episode,
                    ));
                }
            }
        }

        records
    }
}

/// Uppercases the first character of a word
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_generates_requested_film_count() {
        let mut generator = FakeLibraryGenerator::with_seed(1);
        let records = generator.generate(7, 0);

        assert_eq!(records.len(), 7);
        assert!(records.iter().all(|record| record.is_film()));
    }

    #[test]
    fn test_every_series_yields_episodes() {
        let mut generator = FakeLibraryGenerator::with_seed(1);
        let records = generator.generate(0, 3);

        assert!(!records.is_empty());
        assert!(records.iter().all(|record| record.is_episode()));

        // 3 series, each at least one season of at least two episodes
        let catalog = Catalog::from_records(records);
        let mut titles: Vec<String> = catalog
            .iter()
            .map(|record| record.title.clone())
            .collect();
        titles.sort();
        titles.dedup();
        assert_eq!(titles.len(), 3);
        for title in &titles {
            assert!(catalog.episode_count(title) >= 2);
        }
    }

    #[test]
    fn test_season_and_episode_numbers_start_at_one() {
        let mut generator = FakeLibraryGenerator::with_seed(9);
        for record in generator.generate(0, 4) {
            match record.kind {
                crate::catalog::TitleKind::Episode { season, episode } => {
                    assert!(season >= 1);
                    assert!(episode >= 1);
                }
                crate::catalog::TitleKind::Film => panic!("expected only episodes"),
            }
        }
    }

    #[test]
    fn test_same_seed_generates_same_library() {
        let first = FakeLibraryGenerator::with_seed(42).generate(4, 2);
        let second = FakeLibraryGenerator::with_seed(42).generate(4, 2);
        assert_eq!(first, second);
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("alf"), "Alf");
        assert_eq!(capitalize(""), "");
    }
}

//! reel_library - In-memory movie and series library
//!
//! This library provides a small catalog engine over typed title records:
//! category filtering, case-insensitive title search, simulated view-count
//! workloads, and ranked "top titles" reporting.

mod catalog;
mod generation;
mod ranking;
mod simulation;

use rand::SeedableRng;
use rand::rngs::StdRng;
use thiserror::Error;

// Re-export the catalog engine surface
pub use catalog::{Catalog, TitleKind, TitleRecord};
pub use generation::{FakeLibraryGenerator, LibraryGenerator};
pub use ranking::{Category, RankedEntry, RankedReport, top_titles};
pub use simulation::simulate_views;

// Re-export error types
pub use simulation::SimulationError;

/// Default inclusive upper bound for simulated per-event view amounts
pub const DEFAULT_MAX_VIEWS: u64 = 100;

/// Progress event emitted while a showcase run is assembled
///
/// These events allow library users to track progress and provide feedback;
/// the bundled CLI prints them, other callers may ignore them entirely.
#[derive(Debug, Clone)]
pub enum ProgressEvent {
    /// Showcase run started
    Started { films: usize, series: usize },

    /// The catalog has been populated from the generator
    LibraryPopulated {
        film_count: usize,
        episode_count: usize,
    },

    /// The view-count simulation is about to run
    SimulatingViews { rounds: usize },

    /// The simulation finished
    SimulationComplete { total_views: u64 },

    /// The ranked report has been computed
    Complete {
        entry_count: usize,
        shortfall: Option<usize>,
    },
}

/// Parameters for a showcase run
#[derive(Debug, Clone)]
pub struct ShowcaseConfig {
    /// Number of films to generate
    pub films: usize,
    /// Number of series to generate (each contributes several episodes)
    pub series: usize,
    /// Number of simulated play events
    pub rounds: usize,
    /// Number of entries requested from the ranking
    pub top: usize,
    /// Which category the ranking covers
    pub category: Category,
    /// Inclusive upper bound for the per-event view amount
    pub max_views: u64,
    /// Fixed seed for reproducible runs; `None` seeds from entropy
    pub seed: Option<u64>,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            films: 10,
            series: 3,
            rounds: 200,
            top: 5,
            category: Category::All,
            max_views: DEFAULT_MAX_VIEWS,
            seed: None,
        }
    }
}

/// Result of a showcase run
///
/// Carries the populated catalog alongside the ranked report so callers can
/// run follow-up queries (title search, episode counts) against the same
/// library the report was computed from.
#[derive(Debug, Clone)]
pub struct Showcase {
    /// The generated catalog after simulation
    pub catalog: Catalog,
    /// The ranked top-titles report
    pub report: RankedReport,
}

/// Top-level error type for reel_library operations
#[derive(Debug, Error)]
pub enum ReelLibraryError {
    /// Error during view simulation
    #[error("Simulation error: {0}")]
    Simulation(#[from] SimulationError),
}

/// Assembles a full showcase: generate a library, simulate views, rank titles
///
/// This function populates a fresh catalog from the fake-library generator,
/// replays the configured number of random play events against it, and
/// computes the ranked top-titles report for the requested category.
///
/// Progress events are emitted through the provided callback, allowing
/// library users to track progress, display status, or remain silent.
///
/// # Arguments
///
/// * `config` - Run parameters (library size, simulation rounds, ranking)
/// * `progress_callback` - Closure called with progress events (can be empty
///   for silent operation)
///
/// # Returns
///
/// A [`Showcase`] holding the populated catalog and the ranked report
///
/// # Examples
///
/// ```
/// use reel_library::{run_showcase, Category, ShowcaseConfig};
///
/// let config = ShowcaseConfig {
///     films: 8,
///     series: 2,
///     rounds: 100,
///     top: 3,
///     category: Category::Films,
///     seed: Some(42),
///     ..ShowcaseConfig::default()
/// };
///
/// let showcase = run_showcase(&config, |_| {}).unwrap();
/// assert_eq!(showcase.report.entries.len(), 3);
/// ```
pub fn run_showcase<F>(
    config: &ShowcaseConfig,
    mut progress_callback: F,
) -> Result<Showcase, ReelLibraryError>
where
    F: FnMut(ProgressEvent),
{
    progress_callback(ProgressEvent::Started {
        films: config.films,
        series: config.series,
    });

    // Populate the catalog from the generator
    let mut generator = match config.seed {
        Some(seed) => FakeLibraryGenerator::with_seed(seed),
        None => FakeLibraryGenerator::new(),
    };
    let mut catalog = Catalog::from_records(generator.generate(config.films, config.series));

    progress_callback(ProgressEvent::LibraryPopulated {
        film_count: catalog.films().len(),
        episode_count: catalog.episodes().len(),
    });

    // Replay the simulated viewing workload
    progress_callback(ProgressEvent::SimulatingViews {
        rounds: config.rounds,
    });

    let mut rng = match config.seed {
        // Offset so the workload does not mirror the generator stream
        Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(1)),
        None => StdRng::from_entropy(),
    };
    simulate_views(&mut catalog, config.rounds, 0..=config.max_views, &mut rng)?;

    progress_callback(ProgressEvent::SimulationComplete {
        total_views: catalog.iter().map(TitleRecord::views).sum(),
    });

    // Rank the requested category
    let report = top_titles(&catalog, config.top, config.category);

    progress_callback(ProgressEvent::Complete {
        entry_count: report.entries.len(),
        shortfall: report.shortfall(),
    });

    Ok(Showcase { catalog, report })
}

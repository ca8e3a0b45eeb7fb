//! View-count workload simulation
//!
//! This module produces realistic view distributions for reporting by
//! replaying a number of random play events against a catalog. Each trial
//! picks one record uniformly at random and records a uniformly random view
//! amount, so hot titles emerge naturally over enough rounds.

use crate::catalog::Catalog;
use rand::Rng;
use std::ops::RangeInclusive;
use thiserror::Error;

/// Errors that can occur during view simulation
#[derive(Debug, Error)]
pub enum SimulationError {
    /// There are no records to distribute views over
    #[error("Cannot simulate views on an empty catalog")]
    EmptyCatalog,
}

/// Replays `rounds` random play events against the catalog
///
/// Each round independently picks one record by uniform index and adds a view
/// amount drawn uniformly from `view_range` (inclusive on both ends). Exactly
/// one record is touched per round.
///
/// The random number generator is passed in by the caller, so a seeded
/// generator yields a reproducible workload.
///
/// # Arguments
///
/// * `catalog` - The catalog whose records receive views
/// * `rounds` - Number of independent play events to replay
/// * `view_range` - Inclusive range the per-event view amount is drawn from
/// * `rng` - Source of randomness for record and amount selection
///
/// # Errors
///
/// Returns [`SimulationError::EmptyCatalog`] when `rounds` is nonzero but the
/// catalog holds no records.
pub fn simulate_views(
    catalog: &mut Catalog,
    rounds: usize,
    view_range: RangeInclusive<u64>,
    rng: &mut impl Rng,
) -> Result<(), SimulationError> {
    if rounds == 0 {
        return Ok(());
    }
    if catalog.is_empty() {
        return Err(SimulationError::EmptyCatalog);
    }

    for _ in 0..rounds {
        let index = rng.gen_range(0..catalog.len());
        let amount = rng.gen_range(view_range.clone());
        // Index came from 0..len, so the record always exists
        catalog.record_view(index, amount);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::TitleRecord;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn small_catalog() -> Catalog {
        Catalog::from_records([
            TitleRecord::film("Funny Games", 2004, "thriller"),
            TitleRecord::film("Amelia", 1997, "comedy"),
            TitleRecord::episode("Alf", 1986, "comedy", 1, 1),
        ])
    }

    fn total_views(catalog: &Catalog) -> u64 {
        catalog.iter().map(|record| record.views()).sum()
    }

    #[test]
    fn test_each_round_touches_exactly_one_record() {
        let mut catalog = small_catalog();
        let mut rng = StdRng::seed_from_u64(7);

        // With an amount of exactly 1 per round, the total equals the rounds
        simulate_views(&mut catalog, 25, 1..=1, &mut rng).unwrap();
        assert_eq!(total_views(&catalog), 25);
    }

    #[test]
    fn test_amounts_stay_within_range() {
        let mut catalog = small_catalog();
        let mut rng = StdRng::seed_from_u64(7);

        simulate_views(&mut catalog, 40, 0..=100, &mut rng).unwrap();
        // 40 rounds of at most 100 views each
        assert!(total_views(&catalog) <= 40 * 100);
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let mut first = small_catalog();
        let mut second = small_catalog();

        let mut rng = StdRng::seed_from_u64(42);
        simulate_views(&mut first, 50, 0..=100, &mut rng).unwrap();

        let mut rng = StdRng::seed_from_u64(42);
        simulate_views(&mut second, 50, 0..=100, &mut rng).unwrap();

        let first_views: Vec<u64> = first.iter().map(|record| record.views()).collect();
        let second_views: Vec<u64> = second.iter().map(|record| record.views()).collect();
        assert_eq!(first_views, second_views);
    }

    #[test]
    fn test_empty_catalog_is_an_error() {
        let mut catalog = Catalog::new();
        let mut rng = StdRng::seed_from_u64(7);

        let result = simulate_views(&mut catalog, 10, 0..=100, &mut rng);
        assert!(matches!(result, Err(SimulationError::EmptyCatalog)));
    }

    #[test]
    fn test_zero_rounds_is_a_no_op() {
        let mut catalog = Catalog::new();
        let mut rng = StdRng::seed_from_u64(7);

        // No rounds requested, so even an empty catalog is fine
        simulate_views(&mut catalog, 0, 0..=100, &mut rng).unwrap();

        let mut populated = small_catalog();
        simulate_views(&mut populated, 0, 0..=100, &mut rng).unwrap();
        assert_eq!(total_views(&populated), 0);
    }
}

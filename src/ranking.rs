//! Ranked "top titles" reporting
//!
//! This module computes the most-viewed titles of a catalog, optionally
//! restricted to films or episodes, and renders the result as the
//! human-readable report lines the CLI prints.

use crate::catalog::{Catalog, TitleRecord};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Which part of the catalog a ranking covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum Category {
    /// Every record in the catalog
    All,
    /// Film records only
    Films,
    /// Episode records only
    Episodes,
}

/// One entry of a ranked report: a record paired with its 1-based rank
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedEntry {
    /// Position in the ranking, starting at 1
    pub rank: usize,
    /// Snapshot of the ranked record at ranking time
    pub record: TitleRecord,
}

/// Result of a [`top_titles`] query
///
/// Holds the ranked entries plus the originally requested count, so callers
/// can detect and report a shortfall instead of indexing past the end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedReport {
    /// The category the ranking was computed over
    pub category: Category,
    /// How many entries the caller asked for
    pub requested: usize,
    /// Ranked entries, descending by view count
    pub entries: Vec<RankedEntry>,
}

impl RankedReport {
    /// Signals that fewer entries were available than requested
    ///
    /// Returns the number of available entries when the catalog (or the
    /// selected category) held fewer records than `requested`, and `None`
    /// when the request was satisfied in full.
    pub fn shortfall(&self) -> Option<usize> {
        if self.entries.len() < self.requested {
            Some(self.entries.len())
        } else {
            None
        }
    }

    /// Renders the report as printable lines
    ///
    /// Each line has the form `"{rank}. {title display}, views {count}"`,
    /// e.g. `1. Funny Games (2004), views 50` or `2. Alf S01E02, views 12`.
    pub fn lines(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|entry| {
                format!(
                    "{}. {}, views {}",
                    entry.rank,
                    entry.record,
                    entry.record.views()
                )
            })
            .collect()
    }
}

/// Computes the `count` most-viewed titles of the catalog
///
/// Selects the sub-catalog named by `category`, sorts it descending by view
/// count and pairs the first `count` records with their 1-based rank. The
/// sort is stable, so records with equal view counts keep their pre-sort
/// relative order (catalog insertion order, or title order within a filtered
/// category).
///
/// Asking for more entries than the sub-catalog holds is not an error: the
/// report contains everything available and flags the difference through
/// [`RankedReport::shortfall`].
pub fn top_titles(catalog: &Catalog, count: usize, category: Category) -> RankedReport {
    let mut selected: Vec<&TitleRecord> = match category {
        Category::All => catalog.iter().collect(),
        Category::Films => catalog.films(),
        Category::Episodes => catalog.episodes(),
    };

    selected.sort_by(|a, b| b.views().cmp(&a.views()));

    let entries = selected
        .into_iter()
        .take(count)
        .enumerate()
        .map(|(index, record)| RankedEntry {
            rank: index + 1,
            record: record.clone(),
        })
        .collect();

    RankedReport {
        category,
        requested: count,
        entries,
    }
}

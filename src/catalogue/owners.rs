//! Owner concentration reporting
//!
//! Aggregates sold plots by owner address and derives each owner's share
//! of the whole catalogue. Owners appear in first-seen order over the
//! plot list, so the report is deterministic for a given dataset.

use crate::catalogue::plot::Plot;
use serde::Serialize;
use std::collections::HashMap;

/// One owner's share of the catalogue
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerRecord {
    /// Owner address
    pub address: String,
    /// Number of plots held
    pub plots_owned: usize,
    /// Share of the whole catalogue, percent to two decimals
    pub percentage: f64,
}

/// Sort key for the owners report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OwnerSortKey {
    /// Order by number of plots held
    #[default]
    PlotsOwned,
    /// Order by catalogue share
    Percentage,
}

/// Sort direction for the owners report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// Largest holders first
    #[default]
    Descending,
    /// Smallest holders first
    Ascending,
}

/// Headline figures over an owners report
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OwnerSummary {
    /// Number of distinct owners
    pub total_owners: usize,
    /// Plots held across all owners
    pub total_owned: usize,
    /// Mean plots per owner, one decimal
    pub average_owned: f64,
}

/// Aggregate sold plots by owner
///
/// The percentage denominator is the full catalogue size, not the sold
/// subset, matching the viewer's concentration display.
pub fn concentration_report(plots: &[Plot]) -> Vec<OwnerRecord> {
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();

    for plot in plots {
        let Some(owner) = plot.owner.as_deref() else {
            continue;
        };

        if let Some(&slot) = slots.get(owner) {
            if let Some(entry) = counts.get_mut(slot) {
                entry.1 += 1;
            }
        } else {
            slots.insert(owner, counts.len());
            counts.push((owner.to_owned(), 1));
        }
    }

    let total = plots.len();
    counts
        .into_iter()
        .map(|(address, plots_owned)| OwnerRecord {
            address,
            plots_owned,
            percentage: share_percentage(plots_owned, total),
        })
        .collect()
}

/// Case-insensitive address substring filter
pub fn filter_by_address(records: &[OwnerRecord], term: &str) -> Vec<OwnerRecord> {
    if term.is_empty() {
        return records.to_vec();
    }

    let needle = term.to_lowercase();
    records
        .iter()
        .filter(|record| record.address.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Stable in-place sort of an owners report
pub fn sort_records(records: &mut [OwnerRecord], key: OwnerSortKey, direction: SortDirection) {
    match (key, direction) {
        (OwnerSortKey::PlotsOwned, SortDirection::Ascending) => {
            records.sort_by_key(|record| record.plots_owned);
        }
        (OwnerSortKey::PlotsOwned, SortDirection::Descending) => {
            records.sort_by(|a, b| b.plots_owned.cmp(&a.plots_owned));
        }
        (OwnerSortKey::Percentage, SortDirection::Ascending) => {
            records.sort_by(|a, b| a.percentage.total_cmp(&b.percentage));
        }
        (OwnerSortKey::Percentage, SortDirection::Descending) => {
            records.sort_by(|a, b| b.percentage.total_cmp(&a.percentage));
        }
    }
}

/// Headline figures for a report
pub fn summarize(records: &[OwnerRecord]) -> OwnerSummary {
    let total_owners = records.len();
    let total_owned: usize = records.iter().map(|record| record.plots_owned).sum();
    let average_owned = if total_owners == 0 {
        0.0
    } else {
        ((total_owned as f64 / total_owners as f64) * 10.0).round() / 10.0
    };

    OwnerSummary {
        total_owners,
        total_owned,
        average_owned,
    }
}

fn share_percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    ((count as f64 / total as f64) * 100.0 * 100.0).round() / 100.0
}

//! Filtering, ordering, and pagination over the plot catalogue
//!
//! Every operation is a linear pass over the in-memory plot list; nothing
//! here indexes or caches. Sorting is a stable comparison on the single
//! numeric id key, so equal inputs always produce equal output order.

use crate::catalogue::plot::Plot;
use crate::pattern::classifier;
use crate::pattern::rule::PatternRule;

/// Result ordering over the plot id key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Ascending plot id
    #[default]
    IdAscending,
    /// Descending plot id
    IdDescending,
}

/// Sold-status narrowing applied after the pattern predicate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    /// Keep every plot
    #[default]
    Any,
    /// Keep unsold plots only
    Available,
    /// Keep sold plots only
    Sold,
}

impl StatusFilter {
    /// Whether a plot passes this filter
    pub const fn accepts(self, plot: &Plot) -> bool {
        match self {
            Self::Any => true,
            Self::Available => !plot.is_sold,
            Self::Sold => plot.is_sold,
        }
    }
}

/// A complete search request over the catalogue
#[derive(Debug, Clone)]
pub struct SearchQuery {
    /// Pattern rule applied to each plot id
    pub rule: PatternRule,
    /// Sold-status narrowing
    pub status: StatusFilter,
    /// Result ordering
    pub order: SortOrder,
}

impl SearchQuery {
    /// Run the query against the full plot list
    pub fn execute<'a>(&self, plots: &'a [Plot]) -> Vec<&'a Plot> {
        // The wildcard matcher is compiled once for the whole pass rather
        // than per id
        let mut selected: Vec<&Plot> = match &self.rule {
            PatternRule::Custom(pattern) => classifier::compile_wildcard(pattern)
                .map_or_else(Vec::new, |matcher| {
                    plots
                        .iter()
                        .filter(|plot| matcher.is_match(&plot.id.to_string()))
                        .collect()
                }),
            rule => plots
                .iter()
                .filter(|plot| classifier::matches(plot.id, rule))
                .collect(),
        };

        selected.retain(|plot| self.status.accepts(plot));

        match self.order {
            SortOrder::IdAscending => selected.sort_by_key(|plot| plot.id),
            SortOrder::IdDescending => selected.sort_by(|a, b| b.id.cmp(&a.id)),
        }

        selected
    }
}

/// Slice one 1-based page out of a result list
///
/// Pages outside the result range are empty; the last page may be short.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }

    let start = (page - 1).saturating_mul(page_size);
    let end = start.saturating_add(page_size).min(items.len());
    items.get(start..end).unwrap_or(&[])
}

/// Number of pages needed to display `item_count` results
pub const fn page_count(item_count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        0
    } else {
        item_count.div_ceil(page_size)
    }
}

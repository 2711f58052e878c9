//! Filter engine: year bound, category restriction, deduplication.

use std::collections::HashSet;

use crate::dataset::Dataset;
use crate::document::DocumentRecord;

/// Inputs of one filter pass.
///
/// `level` records which hierarchy level the category options were drawn
/// from; the name match itself is level-oblivious, matching the original
/// dashboard (field-of-study labels do not repeat across levels in the
/// source vocabulary).
#[derive(Debug, Clone)]
pub struct FilterParams {
    /// Inclusive lower year bound.
    pub year_min: u16,
    /// Inclusive upper year bound.
    pub year_max: u16,
    /// Hierarchy level the category selection was offered from.
    pub level: u8,
    /// Selected category names. Empty means no category restriction.
    pub selected_categories: Vec<String>,
}

/// One filtered, deduplicated view of the table.
#[derive(Debug, Clone)]
pub struct FilteredView {
    /// Matching rows, one per document, in encounter order.
    pub records: Vec<DocumentRecord>,
    /// True iff a category selection was active. Part of the contract:
    /// it switches the chart to per-category coloring.
    pub color_by_category: bool,
}

impl Dataset {
    /// Apply `params`: closed string-wise year bound, optional category
    /// restriction, then first-wins deduplication by document id.
    ///
    /// An empty result is valid output, not an error.
    pub fn filter(&self, params: &FilterParams) -> FilteredView {
        // Years are fixed-width 4-digit tokens (artifact invariant), so the
        // string comparison agrees with the numeric one.
        let min = params.year_min.to_string();
        let max = params.year_max.to_string();
        let selected: HashSet<&str> = params
            .selected_categories
            .iter()
            .map(String::as_str)
            .collect();

        let mut seen: HashSet<&str> = HashSet::new();
        let mut records = Vec::new();
        for record in self.records() {
            if record.year.as_str() < min.as_str() || record.year.as_str() > max.as_str() {
                continue;
            }
            if !selected.is_empty() && !selected.contains(record.name.as_str()) {
                continue;
            }
            if seen.insert(record.id.as_str()) {
                records.push(record.clone());
            }
        }

        FilteredView {
            records,
            color_by_category: !selected.is_empty(),
        }
    }
}

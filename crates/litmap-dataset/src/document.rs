use serde::{Deserialize, Serialize};

/// One (document, field-of-study) row of the precomputed publication table.
///
/// A document appears once per field-of-study tag it carries, so `id` is
/// unique only after deduplication.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentRecord {
    /// Opaque document key, shared by all rows of the same document.
    pub id: String,

    /// Publication title.
    pub title: String,

    /// Publication year as a fixed-width 4-digit token. The filter engine
    /// compares years string-wise; the artifact schema guarantees the width.
    pub year: String,

    /// Click-through link to the original source.
    pub source: String,

    /// Field-of-study label. Meaningful only together with `level`: each
    /// level carries its own disjoint vocabulary.
    pub name: String,

    /// Hierarchy depth of `name` (0 = broad discipline, deeper = more
    /// granular keyword).
    pub level: u8,

    /// Citation count, mapped to point size in the chart.
    pub citations: u64,

    /// Precomputed 2D embedding coordinate (UMAP projection), fixed at
    /// data-build time.
    pub component_1: f64,
    /// See [`Self::component_1`].
    pub component_2: f64,
}

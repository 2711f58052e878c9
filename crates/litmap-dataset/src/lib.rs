//! litmap-dataset — Publication table model, one-time artifact loading,
//! facet index, and filter engine.

pub mod artifact;
pub mod dataset;
pub mod document;
pub mod facets;
pub mod filter;

pub use artifact::{DatasetArtifact, SCHEMA_VERSION};
pub use dataset::Dataset;
pub use document::DocumentRecord;
pub use filter::{FilterParams, FilteredView};

/// Year bounds of the corpus; also the bounds of the year slider.
pub const YEAR_MIN: u16 = 2000;
/// See [`YEAR_MIN`].
pub const YEAR_MAX: u16 = 2020;

/// Maximum number of category options offered per hierarchy level, to keep
/// the selection control usable.
pub const MAX_CATEGORY_OPTIONS: usize = 15;

//! litmap-web — Web GUI for the misinformation research explorer.
//! Provides a single-page dashboard with:
//!   - Interactive publication map (points = papers, placed by abstract
//!     similarity, sized by citations, linked to their source)
//!   - Year-range and field-of-study filters
//!   - Usage, about, and data-provenance panels

pub mod content;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

//! litmap-chart — declarative chart specification for the publication map.
//!
//! The spec is a pure value (marks + encodings + scales, Vega-Lite v5);
//! drawing happens in a separate embedding surface. Building a spec never
//! fails: an empty row set produces an empty plot with the same axes.

pub mod spec;

pub use spec::{scatter_spec, ChartSpec};

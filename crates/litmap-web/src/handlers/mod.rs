//! HTTP handlers for all web routes.

pub mod chart;
pub mod explorer;
pub mod facets;

//! Facet endpoints — options for the filter controls.

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use litmap_dataset::MAX_CATEGORY_OPTIONS;

use crate::state::SharedState;

/// GET /api/levels — distinct field-of-study hierarchy levels, ascending.
pub async fn api_levels(State(state): State<SharedState>) -> Json<Vec<u8>> {
    Json(state.dataset.levels().to_vec())
}

#[derive(Debug, Deserialize)]
pub struct FieldsQuery {
    #[serde(default)]
    pub level: u8,
}

/// GET /api/fields?level=N — most frequent category names at a level,
/// bounded so the multi-select stays usable.
pub async fn api_fields(
    State(state): State<SharedState>,
    Query(query): Query<FieldsQuery>,
) -> Json<Vec<String>> {
    Json(state.dataset.top_categories(query.level, MAX_CATEGORY_OPTIONS))
}

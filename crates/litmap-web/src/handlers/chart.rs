//! Chart endpoint — runs the filter engine over the cached table and
//! returns the Vega-Lite specification for the filtered set.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use litmap_chart::scatter_spec;
use litmap_dataset::{FilterParams, YEAR_MAX, YEAR_MIN};

use crate::error::ApiError;
use crate::state::SharedState;

#[derive(Debug, Deserialize)]
pub struct ChartQuery {
    #[serde(default = "default_year_min")]
    pub year_min: u16,
    #[serde(default = "default_year_max")]
    pub year_max: u16,
    /// Hierarchy level the category options were offered from.
    #[serde(default)]
    pub level: u8,
    /// Comma-separated list of selected field-of-study names.
    #[serde(default)]
    pub fos: String,
}

fn default_year_min() -> u16 {
    YEAR_MIN
}

fn default_year_max() -> u16 {
    YEAR_MAX
}

/// GET /api/chart — filtered publication-map specification.
pub async fn api_chart(
    State(state): State<SharedState>,
    Query(query): Query<ChartQuery>,
) -> Result<impl IntoResponse, ApiError> {
    if query.year_min > query.year_max {
        return Err(ApiError::BadRequest(format!(
            "year_min {} exceeds year_max {}",
            query.year_min, query.year_max
        )));
    }

    let params = FilterParams {
        year_min: query.year_min.clamp(YEAR_MIN, YEAR_MAX),
        year_max: query.year_max.clamp(YEAR_MIN, YEAR_MAX),
        level: query.level,
        selected_categories: split_fos(&query.fos),
    };

    let view = state.dataset.filter(&params);
    Ok(Json(scatter_spec(&view.records, view.color_by_category)))
}

fn split_fos(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_fos_handles_empty_and_padded_input() {
        assert!(split_fos("").is_empty());
        assert!(split_fos(" , ,").is_empty());
        assert_eq!(split_fos("biology"), vec!["biology"]);
        assert_eq!(
            split_fos("fake news, social media"),
            vec!["fake news", "social media"]
        );
    }
}

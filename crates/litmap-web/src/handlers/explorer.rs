//! Explorer page — the single page of the dashboard: filter controls,
//! chart mount point, and the static content panels.
//!
//! The page is server-rendered once; afterwards the controls refetch
//! `/api/chart` and re-embed the spec with vega-embed (see
//! `static/js/explorer.js`).

use axum::extract::State;
use axum::response::Html;

use litmap_dataset::{MAX_CATEGORY_OPTIONS, YEAR_MAX, YEAR_MIN};

use crate::content::{ABOUT_HTML, DATA_METHODS_HTML, HOW_TO_USE_HTML};
use crate::state::SharedState;

pub async fn explorer_page(State(state): State<SharedState>) -> Html<String> {
    let levels = state.dataset.levels();

    let level_options: String = levels
        .iter()
        .map(|level| format!(r#"<option value="{level}">Level {level}</option>"#))
        .collect();

    // Initial multi-select options come from the lowest level; the script
    // refetches them whenever the level control changes.
    let initial_fields = match levels.first() {
        Some(&level) => state.dataset.top_categories(level, MAX_CATEGORY_OPTIONS),
        None => Vec::new(),
    };
    let field_options: String = initial_fields
        .iter()
        .map(|name| {
            format!(
                r#"<label class="fos-option"><input type="checkbox" value="{name}"> {name}</label>"#
            )
        })
        .collect();

    Html(render_explorer(&level_options, &field_options))
}

fn render_explorer(level_options: &str, field_options: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Misinformation research explorer</title>
    <link rel="stylesheet" href="/static/css/main.css">
    <script src="https://cdn.jsdelivr.net/npm/vega@5"></script>
    <script src="https://cdn.jsdelivr.net/npm/vega-lite@5"></script>
    <script src="https://cdn.jsdelivr.net/npm/vega-embed@6"></script>
</head>
<body>
<div class="app-container">
<aside class="sidebar">
    <h2>Filters</h2>

    <div class="control">
        <label>Filter by year</label>
        <div class="year-range">
            <input type="range" id="year-min" min="{year_min}" max="{year_max}" step="1" value="{year_min}">
            <input type="range" id="year-max" min="{year_min}" max="{year_max}" step="1" value="{year_max}">
        </div>
        <div class="year-labels">
            <span id="year-min-label">{year_min}</span> &ndash; <span id="year-max-label">{year_max}</span>
        </div>
    </div>

    <div class="control">
        <label for="level-select">Choose Field of Study level</label>
        <select id="level-select">{level_options}</select>
    </div>

    <div class="control">
        <label>Choose Fields of Study</label>
        <div id="fos-options" class="fos-options">{field_options}</div>
    </div>
</aside>

<main class="main-content">
    <h1 class="page-title">Misinformation research explorer</h1>
    <div id="chart" class="chart-container"></div>

    <section class="card">{how_to_use}</section>
    <section class="card">{about}</section>
    <section class="card">{data_methods}</section>
</main>
</div>
<script src="/static/js/explorer.js"></script>
</body>
</html>"#,
        year_min = YEAR_MIN,
        year_max = YEAR_MAX,
        level_options = level_options,
        field_options = field_options,
        how_to_use = HOW_TO_USE_HTML,
        about = ABOUT_HTML,
        data_methods = DATA_METHODS_HTML,
    )
}

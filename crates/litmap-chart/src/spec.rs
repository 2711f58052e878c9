//! Typed subset of the Vega-Lite v5 grammar, just wide enough for the
//! publication scatter plot.

use serde::Serialize;

use litmap_dataset::DocumentRecord;

/// Fixed display domain of the horizontal embedding axis.
pub const X_DOMAIN: [f64; 2] = [3.0, 14.0];
/// Fixed display domain of the vertical embedding axis.
pub const Y_DOMAIN: [f64; 2] = [7.0, 16.0];
/// Visual size range the citation counts are mapped into.
pub const SIZE_RANGE: [f64; 2] = [10.0, 500.0];
/// Logical plot dimensions; the embedding surface scales the plot to its
/// container width.
pub const PLOT_WIDTH: u32 = 650;
/// See [`PLOT_WIDTH`].
pub const PLOT_HEIGHT: u32 = 500;

const VEGA_LITE_SCHEMA: &str = "https://vega.github.io/schema/vega-lite/v5.json";

/// A complete, self-contained scatter-plot specification.
#[derive(Debug, Serialize)]
pub struct ChartSpec {
    #[serde(rename = "$schema")]
    pub schema: &'static str,
    pub width: u32,
    pub height: u32,
    pub data: InlineData,
    pub mark: Mark,
    pub encoding: Encoding,
    pub params: Vec<IntervalParam>,
}

/// Inline data values carried inside the spec.
#[derive(Debug, Serialize)]
pub struct InlineData {
    pub values: Vec<PointDatum>,
}

/// One plotted point. The field names here are the field references used
/// by [`Encoding`].
#[derive(Debug, Serialize)]
pub struct PointDatum {
    pub x: f64,
    pub y: f64,
    pub name: String,
    pub citations: u64,
    pub title: String,
    pub year: String,
    pub source: String,
}

#[derive(Debug, Serialize)]
pub struct Mark {
    #[serde(rename = "type")]
    pub kind: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Encoding {
    pub x: PositionDef,
    pub y: PositionDef,
    pub size: SizeDef,
    /// Present only when a category selection is active.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorDef>,
    pub href: FieldRef,
    pub tooltip: Vec<FieldRef>,
}

#[derive(Debug, Serialize)]
pub struct PositionDef {
    pub field: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub scale: DomainScale,
    pub title: &'static str,
}

#[derive(Debug, Serialize)]
pub struct DomainScale {
    pub domain: [f64; 2],
}

#[derive(Debug, Serialize)]
pub struct SizeDef {
    pub field: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub scale: RangeScale,
    pub title: &'static str,
}

#[derive(Debug, Serialize)]
pub struct RangeScale {
    pub range: [f64; 2],
}

#[derive(Debug, Serialize)]
pub struct ColorDef {
    pub field: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

#[derive(Debug, Serialize)]
pub struct FieldRef {
    pub field: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

/// Interval selection bound to the scales: drag to pan, scroll to zoom,
/// double-click to reset the view.
#[derive(Debug, Serialize)]
pub struct IntervalParam {
    pub name: &'static str,
    pub select: &'static str,
    pub bind: &'static str,
}

/// Build the scatter specification for an already filtered, deduplicated
/// row set.
///
/// Points sit at their embedding coordinates, sized by citations, linked to
/// their source, with title/year tooltips. When `color_by_category` is set
/// the points are colored by field-of-study name; otherwise all points
/// share the default color.
pub fn scatter_spec(rows: &[DocumentRecord], color_by_category: bool) -> ChartSpec {
    let values = rows
        .iter()
        .map(|r| PointDatum {
            x: r.component_1,
            y: r.component_2,
            name: r.name.clone(),
            citations: r.citations,
            title: r.title.clone(),
            year: r.year.clone(),
            source: r.source.clone(),
        })
        .collect();

    ChartSpec {
        schema: VEGA_LITE_SCHEMA,
        width: PLOT_WIDTH,
        height: PLOT_HEIGHT,
        data: InlineData { values },
        mark: Mark { kind: "point" },
        encoding: Encoding {
            x: PositionDef {
                field: "x",
                kind: "quantitative",
                scale: DomainScale { domain: X_DOMAIN },
                title: "Component 1",
            },
            y: PositionDef {
                field: "y",
                kind: "quantitative",
                scale: DomainScale { domain: Y_DOMAIN },
                title: "Component 2",
            },
            size: SizeDef {
                field: "citations",
                kind: "quantitative",
                scale: RangeScale { range: SIZE_RANGE },
                title: "Citations",
            },
            color: color_by_category.then_some(ColorDef {
                field: "name",
                kind: "nominal",
            }),
            href: FieldRef {
                field: "source",
                kind: "nominal",
            },
            tooltip: vec![
                FieldRef {
                    field: "title",
                    kind: "nominal",
                },
                FieldRef {
                    field: "year",
                    kind: "ordinal",
                },
            ],
        },
        params: vec![IntervalParam {
            name: "pan_zoom",
            select: "interval",
            bind: "scales",
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn row(id: &str) -> DocumentRecord {
        DocumentRecord {
            id: id.to_string(),
            title: format!("paper {id}"),
            year: "2012".to_string(),
            source: format!("https://doi.org/{id}"),
            name: "biology".to_string(),
            level: 0,
            citations: 12,
            component_1: 6.5,
            component_2: 11.0,
        }
    }

    fn as_json(spec: &ChartSpec) -> Value {
        serde_json::to_value(spec).unwrap()
    }

    #[test]
    fn axes_carry_the_fixed_domains() {
        let json = as_json(&scatter_spec(&[row("a")], false));

        assert_eq!(json["encoding"]["x"]["scale"]["domain"], serde_json::json!([3.0, 14.0]));
        assert_eq!(json["encoding"]["y"]["scale"]["domain"], serde_json::json!([7.0, 16.0]));
        assert_eq!(json["encoding"]["x"]["title"], "Component 1");
        assert_eq!(json["encoding"]["y"]["title"], "Component 2");
        assert_eq!(json["width"], 650);
        assert_eq!(json["height"], 500);
    }

    #[test]
    fn citations_map_into_the_fixed_size_range() {
        let json = as_json(&scatter_spec(&[row("a")], false));

        assert_eq!(json["encoding"]["size"]["field"], "citations");
        assert_eq!(json["encoding"]["size"]["scale"]["range"], serde_json::json!([10.0, 500.0]));
        assert_eq!(json["encoding"]["size"]["title"], "Citations");
    }

    #[test]
    fn color_encoding_is_present_iff_flagged() {
        let plain = as_json(&scatter_spec(&[row("a")], false));
        assert!(plain["encoding"].get("color").is_none());

        let colored = as_json(&scatter_spec(&[row("a")], true));
        assert_eq!(colored["encoding"]["color"]["field"], "name");
        assert_eq!(colored["encoding"]["color"]["type"], "nominal");
    }

    #[test]
    fn points_carry_link_and_tooltip() {
        let json = as_json(&scatter_spec(&[row("a")], false));

        assert_eq!(json["encoding"]["href"]["field"], "source");
        let tooltip = json["encoding"]["tooltip"].as_array().unwrap();
        assert_eq!(tooltip[0]["field"], "title");
        assert_eq!(tooltip[1]["field"], "year");
        assert_eq!(json["data"]["values"][0]["source"], "https://doi.org/a");
    }

    #[test]
    fn pan_zoom_param_binds_to_the_scales() {
        let json = as_json(&scatter_spec(&[], false));
        let params = json["params"].as_array().unwrap();

        assert_eq!(params.len(), 1);
        assert_eq!(params[0]["select"], "interval");
        assert_eq!(params[0]["bind"], "scales");
    }

    #[test]
    fn empty_rows_produce_an_empty_plot_with_intact_axes() {
        let json = as_json(&scatter_spec(&[], true));

        assert!(json["data"]["values"].as_array().unwrap().is_empty());
        assert_eq!(json["encoding"]["x"]["scale"]["domain"], serde_json::json!([3.0, 14.0]));
    }
}

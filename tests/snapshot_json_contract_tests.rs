use scatter_brush::api::{
    SELECTION_SNAPSHOT_JSON_SCHEMA_V1, ScatterPlot, ScatterPlotConfig, SelectionSnapshot,
};
use ordered_float::OrderedFloat;
use scatter_brush::core::{CategoryKey, Dataset, FieldSelectors};
use scatter_brush::interaction::BrushRect;
use scatter_brush::render::NullRenderer;
use scatter_brush::sinks::SharedSelectionList;

fn plot() -> ScatterPlot<NullRenderer> {
    let dataset = Dataset::from_json_str(
        r#"[
            {"x": 0, "y": 0, "r": 1, "c": "A"},
            {"x": 5, "y": 5, "r": 1, "c": 7},
            {"x": 10, "y": 10, "r": 1, "c": "A"}
        ]"#,
    )
    .expect("parse dataset");
    ScatterPlot::new(
        NullRenderer::default(),
        dataset,
        ScatterPlotConfig::new(FieldSelectors::new("x", "y", "r", "c")),
        SharedSelectionList::new(),
    )
    .expect("plot init")
}

#[test]
fn snapshot_reports_selection_in_dataset_order() {
    let mut plot = plot();
    plot.on_brush(Some(BrushRect::new(500.0, 0.0, 200.0, 175.0)));
    plot.on_legend_hover("A".into());

    let snapshot = plot.snapshot();
    assert_eq!(snapshot.records_len, 3);
    assert_eq!(snapshot.selected_indices, vec![1, 2]);
    assert_eq!(snapshot.hovered_category, Some("A".into()));
    assert_eq!(
        snapshot.brush.map(BrushRect::corners),
        Some([[200.0, 0.0], [500.0, 175.0]])
    );
}

#[test]
fn contract_v1_round_trips() {
    let mut plot = plot();
    plot.on_brush(Some(BrushRect::new(0.0, 0.0, 500.0, 350.0)));
    let snapshot = plot.snapshot();

    let json = snapshot.to_json_contract_v1_pretty().expect("serialize");
    let version = format!("\"schema_version\": {SELECTION_SNAPSHOT_JSON_SCHEMA_V1}");
    assert!(json.contains(&version));
    let restored = SelectionSnapshot::from_json_compat_str(&json).expect("parse contract");
    assert_eq!(restored, snapshot);

    let bare = snapshot.to_json_pretty().expect("serialize bare");
    let restored = SelectionSnapshot::from_json_compat_str(&bare).expect("parse bare");
    assert_eq!(restored, snapshot);
}

#[test]
fn numeric_categories_serialize_as_numbers() {
    let mut plot = plot();
    plot.on_legend_hover(CategoryKey::Number(OrderedFloat(7.0)));
    let json = plot.snapshot().to_json_pretty().expect("serialize");
    assert!(json.contains("\"hovered_category\": 7.0"));

    let opacities: Vec<f64> = plot.point_styles().iter().map(|s| s.opacity).collect();
    assert_eq!(opacities, vec![0.1, 1.0, 0.1]);
}

#[test]
fn unsupported_schema_version_is_rejected() {
    let json = r#"{
        "schema_version": 99,
        "snapshot": {
            "records_len": 0,
            "brush": null,
            "hovered_category": null,
            "selected_indices": []
        }
    }"#;
    let err = SelectionSnapshot::from_json_compat_str(json).expect_err("unknown version");
    assert!(err.to_string().contains("unsupported snapshot schema version"));
}

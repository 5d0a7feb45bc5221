use scatter_brush::core::{CoordinateMapper, Dataset, FieldSelectors, PlotArea, Viewport};
use scatter_brush::interaction::{BrushRect, OpacityConfig, SelectionEngine, SelectionEvent};

// 200x200 canvas with a 100px margin leaves a 100x100 plot area, so the three
// records below land on (0, 0), (50, 50) and (100, 100).
fn diagonal_engine() -> SelectionEngine {
    let dataset = Dataset::from_json_str(
        r#"[
            {"x": 10, "y": 90, "r": 1, "c": "A"},
            {"x": 50, "y": 50, "r": 2, "c": "B"},
            {"x": 90, "y": 10, "r": 3, "c": "A"}
        ]"#,
    )
    .expect("parse dataset");
    let area = PlotArea::inset(Viewport::new(200, 200), 100.0);
    let mapper = CoordinateMapper::new(
        &dataset,
        FieldSelectors::new("x", "y", "r", "c"),
        area,
        (4.0, 12.0),
    )
    .expect("mapper");
    SelectionEngine::new(dataset, mapper, area, OpacityConfig::default())
}

fn selected(engine: &SelectionEngine) -> Vec<usize> {
    engine.selected_indices()
}

#[test]
fn initial_state_has_no_selection_and_no_hover() {
    let engine = diagonal_engine();
    assert!(!engine.state().has_selection());
    assert!(!engine.state().is_hovering());
    assert!(engine.selected_records().is_empty());
}

#[test]
fn brush_selects_records_whose_center_is_inside() {
    let mut engine = diagonal_engine();
    let positions: Vec<_> = engine
        .dataset()
        .records()
        .iter()
        .map(|record| engine.mapper().position(record).expect("plotted"))
        .collect();
    assert_eq!(positions, vec![(0.0, 0.0), (50.0, 50.0), (100.0, 100.0)]);

    let event = engine.on_brush(Some(BrushRect::from_corners([[0.0, 0.0], [60.0, 60.0]])));
    assert!(matches!(event, SelectionEvent::BrushChanged { brush: Some(_) }));
    assert_eq!(selected(&engine), vec![0, 1]);
}

#[test]
fn inverted_brush_corners_are_normalized() {
    let mut engine = diagonal_engine();
    engine.on_brush(Some(BrushRect::new(60.0, 60.0, 40.0, 40.0)));
    assert_eq!(selected(&engine), vec![1]);
}

#[test]
fn zero_area_brush_matches_points_on_its_edge() {
    let mut engine = diagonal_engine();
    engine.on_brush(Some(BrushRect::new(50.0, 0.0, 50.0, 100.0)));
    assert_eq!(selected(&engine), vec![1]);

    engine.on_brush(Some(BrushRect::new(49.0, 49.0, 49.0, 49.0)));
    assert!(selected(&engine).is_empty());
    assert!(engine.state().has_selection());
}

#[test]
fn brush_larger_than_plot_area_is_kept_as_given() {
    let mut engine = diagonal_engine();
    engine.on_brush(Some(BrushRect::new(-50.0, -50.0, 500.0, 500.0)));
    let brush = engine.state().brush.expect("brush kept");
    assert_eq!(brush.corners(), [[-50.0, -50.0], [500.0, 500.0]]);
    assert_eq!(selected(&engine), vec![0, 1, 2]);
}

#[test]
fn brush_outside_plot_area_selects_nothing() {
    let mut engine = diagonal_engine();
    engine.on_brush(Some(BrushRect::new(-20.0, -20.0, -10.0, -10.0)));
    assert!(selected(&engine).is_empty());
    assert!(engine.state().has_selection());

    engine.on_brush(Some(BrushRect::new(150.0, 150.0, 200.0, 200.0)));
    assert!(selected(&engine).is_empty());

    engine.on_brush(Some(BrushRect::new(-10.0, 90.0, 110.0, 120.0)));
    assert_eq!(selected(&engine), vec![2]);
}

#[test]
fn null_brush_clears_membership() {
    let mut engine = diagonal_engine();
    engine.on_brush(Some(BrushRect::new(0.0, 0.0, 100.0, 100.0)));
    assert_eq!(engine.selected_count(), 3);

    engine.on_brush(None);
    assert!(engine.selected_records().is_empty());
    assert!(!engine.state().has_selection());
}

#[test]
fn non_finite_brush_is_treated_as_cleared() {
    let mut engine = diagonal_engine();
    engine.on_brush(Some(BrushRect::new(0.0, 0.0, 100.0, 100.0)));
    engine.on_brush(Some(BrushRect::new(f64::NAN, 0.0, 10.0, 10.0)));
    assert!(!engine.state().has_selection());
    assert!(selected(&engine).is_empty());

    engine.on_brush(Some(BrushRect::new(0.0, 0.0, 100.0, 100.0)));
    engine.on_brush(Some(BrushRect::from_corners([[0.0, 0.0], [60.0, f64::NAN]])));
    assert!(!engine.state().has_selection());

    engine.on_brush(Some(BrushRect::new(0.0, 0.0, 100.0, 100.0)));
    engine.on_brush(Some(BrushRect::new(0.0, f64::NEG_INFINITY, 60.0, 60.0)));
    assert!(!engine.state().has_selection());
}

#[test]
fn clear_is_idempotent() {
    let mut engine = diagonal_engine();
    engine.on_brush(Some(BrushRect::new(0.0, 0.0, 60.0, 60.0)));

    assert_eq!(engine.on_clear(), SelectionEvent::Cleared);
    let once = engine.selected_indices();
    assert_eq!(engine.on_clear(), SelectionEvent::Cleared);
    let twice = engine.selected_indices();

    assert!(once.is_empty());
    assert_eq!(once, twice);
    assert!(engine.state().brush.is_none());
}

#[test]
fn legend_hover_sets_opacity_without_touching_membership() {
    let mut engine = diagonal_engine();
    engine.on_brush(Some(BrushRect::new(0.0, 0.0, 60.0, 60.0)));
    let before = engine.selected_indices();

    engine.on_legend_hover("A".into());
    let opacities: Vec<f64> = engine
        .dataset()
        .records()
        .iter()
        .map(|record| engine.opacity(record))
        .collect();
    assert_eq!(opacities, vec![1.0, 0.1, 1.0]);
    assert_eq!(engine.selected_indices(), before);

    engine.on_legend_hover_end();
    let restored: Vec<f64> = engine
        .dataset()
        .records()
        .iter()
        .map(|record| engine.opacity(record))
        .collect();
    assert_eq!(restored, vec![0.7, 0.7, 0.7]);
    assert_eq!(engine.selected_indices(), before);
}

#[test]
fn hovering_unknown_category_dims_everything() {
    let mut engine = diagonal_engine();
    engine.on_legend_hover("nobody".into());
    assert!(
        engine
            .dataset()
            .records()
            .iter()
            .all(|record| engine.opacity(record) == 0.1)
    );
}

#[test]
fn hit_test_prefers_topmost_record() {
    let engine = diagonal_engine();
    assert_eq!(engine.hit_test(50.0, 50.0).map(|r| r.index), Some(1));
    assert_eq!(engine.hit_test(2.0, 2.0).map(|r| r.index), Some(0));
    assert!(engine.hit_test(25.0, 75.0).is_none());
}

#[test]
fn empty_dataset_operations_are_no_ops() {
    let area = PlotArea::inset(Viewport::new(200, 200), 100.0);
    let dataset = Dataset::default();
    let mapper = CoordinateMapper::new(
        &dataset,
        FieldSelectors::new("x", "y", "r", "c"),
        area,
        (4.0, 12.0),
    )
    .expect("mapper");
    let mut engine = SelectionEngine::new(dataset, mapper, area, OpacityConfig::default());

    engine.on_brush(Some(BrushRect::new(0.0, 0.0, 100.0, 100.0)));
    assert!(engine.selected_records().is_empty());
    engine.on_legend_hover("A".into());
    engine.on_clear();
    assert!(engine.selected_records().is_empty());
    assert!(engine.hit_test(0.0, 0.0).is_none());
}

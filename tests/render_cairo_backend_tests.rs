#![cfg(feature = "cairo-backend")]

use cairo::{Context, Format, ImageSurface};
use scatter_brush::ScatterError;
use scatter_brush::api::{ScatterPlot, ScatterPlotConfig};
use scatter_brush::core::{Dataset, FieldSelectors, Viewport};
use scatter_brush::interaction::BrushRect;
use scatter_brush::render::CairoRenderer;
use scatter_brush::sinks::SharedSelectionList;

fn dataset() -> Dataset {
    Dataset::from_json_str(
        r#"[
            {"x": 0, "y": 0, "r": 1, "c": "A"},
            {"x": 5, "y": 5, "r": 2, "c": "B"},
            {"x": 10, "y": 10, "r": 3, "c": "C"}
        ]"#,
    )
    .expect("parse dataset")
}

fn config(width: u32, height: u32) -> ScatterPlotConfig {
    ScatterPlotConfig::new(FieldSelectors::new("x", "y", "r", "c"))
        .with_viewport(Viewport::new(width, height))
        .with_title("Cairo")
}

#[test]
fn cairo_renderer_rejects_invalid_surface_size() {
    let err = CairoRenderer::new(0, 480).expect_err("invalid width must fail");
    assert!(matches!(err, ScatterError::InvalidData(_)));
}

#[test]
fn cairo_renderer_draws_points_legend_and_selection_outlines() {
    let renderer = CairoRenderer::new(600, 450).expect("renderer");
    let mut plot = ScatterPlot::new(
        renderer,
        dataset(),
        config(600, 450),
        SharedSelectionList::new(),
    )
    .expect("plot init");
    plot.on_brush(Some(BrushRect::new(200.0, 0.0, 500.0, 200.0)));

    plot.render().expect("render");
    let stats = plot.into_renderer().last_stats();

    assert_eq!(stats.circles_drawn, 3);
    assert_eq!(stats.outlines_drawn, 2);
    // Three legend swatches plus the brush overlay.
    assert_eq!(stats.rects_drawn, 4);
    assert!(stats.lines_drawn >= 4);
    assert!(stats.texts_drawn >= 4);
}

#[test]
fn cairo_renderer_can_draw_on_external_context() {
    let renderer = CairoRenderer::new(400, 300).expect("renderer");
    let mut plot = ScatterPlot::new(
        renderer,
        dataset(),
        config(400, 300),
        SharedSelectionList::new(),
    )
    .expect("plot init");

    let surface = ImageSurface::create(Format::ARgb32, 400, 300).expect("surface");
    let context = Context::new(&surface).expect("context");
    plot.render_on_cairo_context(&context)
        .expect("render on context");

    let stats = plot.into_renderer().last_stats();
    assert_eq!(stats.circles_drawn, 3);
    assert_eq!(stats.outlines_drawn, 0);
}

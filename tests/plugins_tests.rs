use std::cell::RefCell;
use std::rc::Rc;

use scatter_brush::ScatterError;
use scatter_brush::api::{ScatterPlot, ScatterPlotConfig};
use scatter_brush::core::{Dataset, FieldSelectors, Viewport};
use scatter_brush::extensions::{PluginContext, PluginEvent, ScatterPlugin};
use scatter_brush::interaction::BrushRect;
use scatter_brush::render::NullRenderer;
use scatter_brush::sinks::SharedSelectionList;

type Log = Rc<RefCell<Vec<(PluginEvent, PluginContext)>>>;

struct RecordingPlugin {
    id: String,
    log: Log,
}

impl RecordingPlugin {
    fn new(id: impl Into<String>, log: Log) -> Self {
        Self { id: id.into(), log }
    }
}

impl ScatterPlugin for RecordingPlugin {
    fn id(&self) -> &str {
        &self.id
    }

    fn on_event(&mut self, event: &PluginEvent, context: &PluginContext) {
        self.log.borrow_mut().push((event.clone(), context.clone()));
    }
}

fn event_kind(event: &PluginEvent) -> &'static str {
    match event {
        PluginEvent::BrushChanged { .. } => "brush",
        PluginEvent::Cleared => "clear",
        PluginEvent::LegendHovered { .. } => "hover",
        PluginEvent::LegendHoverEnded => "hover_end",
        PluginEvent::Rendered => "rendered",
    }
}

fn plot() -> ScatterPlot<NullRenderer> {
    let dataset = Dataset::from_json_str(
        r#"[
            {"x": 10, "y": 90, "r": 1, "c": "A"},
            {"x": 50, "y": 50, "r": 2, "c": "B"},
            {"x": 90, "y": 10, "r": 3, "c": "A"}
        ]"#,
    )
    .expect("parse dataset");
    let config = ScatterPlotConfig::new(FieldSelectors::new("x", "y", "r", "c"))
        .with_viewport(Viewport::new(200, 200));
    ScatterPlot::new(
        NullRenderer::default(),
        dataset,
        config,
        SharedSelectionList::new(),
    )
    .expect("plot init")
}

#[test]
fn plugin_receives_deterministic_event_sequence() {
    let mut plot = plot();
    let log: Log = Rc::new(RefCell::new(Vec::new()));
    plot.register_plugin(Box::new(RecordingPlugin::new("recorder", log.clone())))
        .expect("register plugin");

    plot.on_brush(Some(BrushRect::new(0.0, 0.0, 60.0, 60.0)));
    plot.on_legend_hover("A".into());
    plot.on_legend_hover_end();
    plot.on_clear();
    plot.render().expect("render");

    let log = log.borrow();
    let kinds: Vec<&str> = log.iter().map(|(event, _)| event_kind(event)).collect();
    assert_eq!(kinds, vec!["brush", "hover", "hover_end", "clear", "rendered"]);

    let (_, after_brush) = &log[0];
    assert_eq!(after_brush.records_len, 3);
    assert_eq!(after_brush.selected_len, 2);
    assert!(after_brush.brush.is_some());

    let (_, after_hover) = &log[1];
    assert_eq!(after_hover.hovered_category, Some("A".into()));
    assert_eq!(after_hover.selected_len, 2);

    let (_, after_clear) = &log[3];
    assert_eq!(after_clear.selected_len, 0);
    assert!(after_clear.brush.is_none());
}

#[test]
fn duplicate_plugin_ids_are_rejected() {
    let mut plot = plot();
    let log: Log = Rc::new(RefCell::new(Vec::new()));
    plot.register_plugin(Box::new(RecordingPlugin::new("dup", log.clone())))
        .expect("first registration");
    let err = plot
        .register_plugin(Box::new(RecordingPlugin::new("dup", log)))
        .expect_err("duplicate id");
    assert!(matches!(err, ScatterError::InvalidData(_)));
    assert_eq!(plot.plugin_count(), 1);
}

#[test]
fn unregistered_plugin_stops_receiving_events() {
    let mut plot = plot();
    let log: Log = Rc::new(RefCell::new(Vec::new()));
    plot.register_plugin(Box::new(RecordingPlugin::new("recorder", log.clone())))
        .expect("register plugin");

    plot.on_clear();
    assert!(plot.unregister_plugin("recorder"));
    assert!(!plot.unregister_plugin("recorder"));
    plot.on_clear();

    assert_eq!(log.borrow().len(), 1);
}

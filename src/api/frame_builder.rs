use crate::core::{LinearScale, PlotArea, format_tick};
use crate::error::ScatterResult;
use crate::render::{
    CirclePrimitive, Color, LinePrimitive, RectPrimitive, RenderFrame, Renderer, TextHAlign,
    TextPrimitive,
};

use super::ScatterPlot;

const AXIS_TICK_COUNT: usize = 10;
const AXIS_TICK_SIZE: f64 = 6.0;
const AXIS_TICK_PADDING: f64 = 3.0;
const AXIS_FONT_SIZE: f64 = 10.0;
const AXIS_STROKE_WIDTH: f64 = 1.0;
const TITLE_BASELINE_Y: f64 = 40.0;
const TITLE_FONT_SIZE: f64 = 16.0;
const BRUSH_FILL: Color = Color::rgba(0.467, 0.467, 0.467, 0.3);
const BRUSH_BORDER: Color = Color::WHITE;

impl<R: Renderer> ScatterPlot<R> {
    /// Materializes the current plot as draw commands in viewport pixels.
    pub fn build_render_frame(&self) -> ScatterResult<RenderFrame> {
        let viewport = self.config.viewport;
        let area = self.engine.plot_area();
        let mapper = self.engine.mapper();
        let mut frame = RenderFrame::new(viewport);

        if !self.config.title.is_empty() {
            frame.texts.push(TextPrimitive::new(
                self.config.title.clone(),
                f64::from(viewport.width) / 2.0,
                TITLE_BASELINE_Y,
                TITLE_FONT_SIZE,
                TextHAlign::Center,
            ));
        }

        push_bottom_axis(&mut frame, mapper.x_scale(), area);
        push_left_axis(&mut frame, mapper.y_scale(), area);

        for style in self.point_sink.styles() {
            let Some(geometry) = self.engine.geometry(style.index) else {
                continue;
            };
            let (cx, cy) = area.to_viewport(geometry.cx, geometry.cy);
            frame.circles.push(CirclePrimitive {
                index: style.index,
                cx,
                cy,
                radius: geometry.r,
                fill_color: geometry.fill,
                opacity: style.opacity,
                selected: style.selected,
            });
        }

        if let Some(brush) = self.engine.state().brush {
            let brush = brush.clamp_to(area);
            let [[x0, y0], _] = brush.corners();
            let (x, y) = area.to_viewport(x0, y0);
            frame.brush = Some(
                RectPrimitive::new(x, y, brush.width(), brush.height(), BRUSH_FILL)
                    .with_border(1.0, BRUSH_BORDER),
            );
        }

        let legend = self.config.legend;
        let colors = mapper.color_scale();
        for (row, category) in mapper.categories().iter().enumerate() {
            let top = legend.row_top(row);
            frame.rects.push(
                RectPrimitive::new(
                    legend.origin_x,
                    top,
                    legend.swatch_size,
                    legend.swatch_size,
                    colors.color(category),
                )
                .with_border(1.0, Color::BLACK),
            );
            let label = category.to_string();
            if !label.is_empty() {
                frame.texts.push(TextPrimitive::new(
                    label,
                    legend.origin_x + legend.label_offset_x,
                    top + 15.0,
                    legend.font_size_px,
                    TextHAlign::Left,
                ));
            }
        }

        frame.validate()?;
        Ok(frame)
    }
}

fn push_bottom_axis(frame: &mut RenderFrame, scale: LinearScale, area: PlotArea) {
    let base_y = area.offset_y + area.height;
    frame.lines.push(LinePrimitive::new(
        area.offset_x,
        base_y,
        area.offset_x + area.width,
        base_y,
        AXIS_STROKE_WIDTH,
        Color::BLACK,
    ));

    let precision = scale.tick_precision(AXIS_TICK_COUNT);
    for tick in scale.ticks(AXIS_TICK_COUNT) {
        let x = area.offset_x + scale.map(tick);
        frame.lines.push(LinePrimitive::new(
            x,
            base_y,
            x,
            base_y + AXIS_TICK_SIZE,
            AXIS_STROKE_WIDTH,
            Color::BLACK,
        ));
        frame.texts.push(TextPrimitive::new(
            format_tick(tick, precision),
            x,
            base_y + AXIS_TICK_SIZE + AXIS_TICK_PADDING + AXIS_FONT_SIZE,
            AXIS_FONT_SIZE,
            TextHAlign::Center,
        ));
    }
}

fn push_left_axis(frame: &mut RenderFrame, scale: LinearScale, area: PlotArea) {
    let base_x = area.offset_x;
    frame.lines.push(LinePrimitive::new(
        base_x,
        area.offset_y,
        base_x,
        area.offset_y + area.height,
        AXIS_STROKE_WIDTH,
        Color::BLACK,
    ));

    let precision = scale.tick_precision(AXIS_TICK_COUNT);
    for tick in scale.ticks(AXIS_TICK_COUNT) {
        let y = area.offset_y + scale.map(tick);
        frame.lines.push(LinePrimitive::new(
            base_x - AXIS_TICK_SIZE,
            y,
            base_x,
            y,
            AXIS_STROKE_WIDTH,
            Color::BLACK,
        ));
        frame.texts.push(TextPrimitive::new(
            format_tick(tick, precision),
            base_x - AXIS_TICK_SIZE - AXIS_TICK_PADDING,
            y + AXIS_FONT_SIZE * 0.32,
            AXIS_FONT_SIZE,
            TextHAlign::Right,
        ));
    }
}

use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;
use std::f64::consts::TAU;

use crate::error::{ScatterError, ScatterResult};
use crate::render::{
    CirclePrimitive, Color, RectPrimitive, RenderFrame, Renderer, TextHAlign,
};

const SELECTED_OUTLINE_WIDTH: f64 = 1.5;
const SELECTED_OUTLINE_COLOR: Color = Color::BLACK;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub rects_drawn: usize,
    pub lines_drawn: usize,
    pub circles_drawn: usize,
    pub outlines_drawn: usize,
    pub texts_drawn: usize,
}

/// Renderers that can draw into a host-owned Cairo context, e.g. a GTK
/// `DrawingArea` callback.
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ScatterResult<()>;
}

/// Cairo + Pango renderer backend.
///
/// `Renderer::render` draws into an owned offscreen image surface;
/// `CairoContextRenderer` draws into an external context instead.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> ScatterResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ScatterError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: Color::WHITE,
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    pub fn set_clear_color(&mut self, color: Color) -> ScatterResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> ScatterResult<()> {
        frame.validate()?;

        apply_color(context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        let mut stats = CairoRenderStats::default();

        for rect in &frame.rects {
            draw_rect(context, *rect)?;
            stats.rects_drawn += 1;
        }

        for line in &frame.lines {
            apply_color(context, line.color);
            context.set_line_width(line.stroke_width);
            context.move_to(line.x1, line.y1);
            context.line_to(line.x2, line.y2);
            context
                .stroke()
                .map_err(|err| map_backend_error("failed to stroke line", err))?;
            stats.lines_drawn += 1;
        }

        for circle in &frame.circles {
            if draw_circle(context, *circle)? {
                stats.outlines_drawn += 1;
            }
            stats.circles_drawn += 1;
        }

        if let Some(brush) = frame.brush {
            draw_rect(context, brush)?;
            stats.rects_drawn += 1;
        }

        for text in &frame.texts {
            let layout = pangocairo::functions::create_layout(context);
            let font_description =
                FontDescription::from_string(&format!("Sans {}", text.font_size_px));
            layout.set_font_description(Some(&font_description));
            layout.set_text(&text.text);

            let (text_width, text_height) = layout.pixel_size();
            let x = match text.h_align {
                TextHAlign::Left => text.x,
                TextHAlign::Center => text.x - f64::from(text_width) / 2.0,
                TextHAlign::Right => text.x - f64::from(text_width),
            };

            apply_color(context, text.color);
            // Text primitives are baseline-anchored; pango lays out from the top.
            context.move_to(x, text.y - f64::from(text_height));
            pangocairo::functions::show_layout(context, &layout);
            stats.texts_drawn += 1;
        }

        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ScatterResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ScatterResult<()> {
        self.render_with_context(context, frame)
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn draw_rect(context: &Context, rect: RectPrimitive) -> ScatterResult<()> {
    context.rectangle(rect.x, rect.y, rect.width, rect.height);
    apply_color(context, rect.fill_color);
    if rect.border_width > 0.0 {
        context
            .fill_preserve()
            .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
        apply_color(context, rect.border_color);
        context.set_line_width(rect.border_width);
        context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke rectangle border", err))
    } else {
        context
            .fill()
            .map_err(|err| map_backend_error("failed to fill rectangle", err))
    }
}

/// Returns whether a selection outline was stroked.
fn draw_circle(context: &Context, circle: CirclePrimitive) -> ScatterResult<bool> {
    context.new_sub_path();
    context.arc(circle.cx, circle.cy, circle.radius, 0.0, TAU);
    let fill = circle
        .fill_color
        .with_alpha(circle.fill_color.alpha * circle.opacity);
    apply_color(context, fill);

    if !circle.selected {
        context
            .fill()
            .map_err(|err| map_backend_error("failed to fill circle", err))?;
        return Ok(false);
    }

    context
        .fill_preserve()
        .map_err(|err| map_backend_error("failed to fill circle", err))?;
    apply_color(context, SELECTED_OUTLINE_COLOR);
    context.set_line_width(SELECTED_OUTLINE_WIDTH);
    context
        .stroke()
        .map_err(|err| map_backend_error("failed to stroke circle outline", err))?;
    Ok(true)
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ScatterError {
    ScatterError::InvalidData(format!("{prefix}: {err}"))
}

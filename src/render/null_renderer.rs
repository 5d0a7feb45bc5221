use crate::error::ScatterResult;
use crate::render::{RenderFrame, Renderer};

/// Headless renderer for tests and hosts without a drawing surface.
///
/// Frames are still validated, and the counts of the last pass are kept so
/// tests can assert on what would have been drawn.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_circle_count: usize,
    pub last_selected_count: usize,
    pub last_line_count: usize,
    pub last_text_count: usize,
    pub last_had_brush: bool,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ScatterResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_circle_count = frame.circles.len();
        self.last_selected_count = frame.selected_circle_count();
        self.last_line_count = frame.lines.len();
        self.last_text_count = frame.texts.len();
        self.last_had_brush = frame.brush.is_some();
        Ok(())
    }
}

use crate::foundation::core::{Point, Rgba8};
use crate::foundation::error::{LintransError, LintransResult};
use crate::interaction::manipulator::CursorShape;
use crate::render::{FrameSetup, Renderer};

/// One call made against a [`RecordingRenderer`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum DrawCommand {
    /// [`Renderer::draw_segment`].
    Segment {
        /// Start point.
        from: Point,
        /// End point.
        to: Point,
        /// Width in pixels.
        stroke_weight: f64,
        /// Stroke colour.
        color: Rgba8,
    },
    /// [`Renderer::fill_triangle`].
    Triangle {
        /// First corner.
        a: Point,
        /// Second corner.
        b: Point,
        /// Third corner.
        c: Point,
        /// Fill colour.
        color: Rgba8,
    },
    /// [`Renderer::draw_point`].
    Point {
        /// Centre.
        at: Point,
        /// Radius in pixels.
        radius: f64,
        /// Fill colour.
        color: Rgba8,
    },
}

/// Keeps the draw calls of the most recent frame.
#[derive(Clone, Debug, Default)]
pub struct RecordingRenderer {
    setup: Option<FrameSetup>,
    commands: Vec<DrawCommand>,
    cursor: CursorShape,
    frames: u64,
    in_frame: bool,
}

impl RecordingRenderer {
    /// Empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw calls of the current or last frame, in order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Setup passed to the last `begin_frame`.
    pub fn setup(&self) -> Option<&FrameSetup> {
        self.setup.as_ref()
    }

    /// Last requested cursor.
    pub fn cursor(&self) -> CursorShape {
        self.cursor
    }

    /// Frames completed with `end_frame`.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Number of recorded segments stroked in `color`.
    pub fn segments_with_color(&self, color: Rgba8) -> usize {
        self.commands
            .iter()
            .filter(|cmd| matches!(cmd, DrawCommand::Segment { color: c, .. } if *c == color))
            .count()
    }
}

impl Renderer for RecordingRenderer {
    fn begin_frame(&mut self, setup: &FrameSetup) -> LintransResult<()> {
        if self.in_frame {
            return Err(LintransError::render("begin_frame called twice"));
        }
        self.in_frame = true;
        self.setup = Some(*setup);
        self.commands.clear();
        Ok(())
    }

    fn draw_segment(&mut self, from: Point, to: Point, stroke_weight: f64, color: Rgba8) {
        self.commands.push(DrawCommand::Segment {
            from,
            to,
            stroke_weight,
            color,
        });
    }

    fn fill_triangle(&mut self, a: Point, b: Point, c: Point, color: Rgba8) {
        self.commands.push(DrawCommand::Triangle { a, b, c, color });
    }

    fn draw_point(&mut self, at: Point, radius: f64, color: Rgba8) {
        self.commands.push(DrawCommand::Point { at, radius, color });
    }

    fn set_cursor(&mut self, shape: CursorShape) {
        self.cursor = shape;
    }

    fn end_frame(&mut self) -> LintransResult<()> {
        if !self.in_frame {
            return Err(LintransError::render("end_frame without begin_frame"));
        }
        self.in_frame = false;
        self.frames += 1;
        Ok(())
    }
}

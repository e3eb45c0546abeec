use vello_cpu::kurbo::Shape as _;

use crate::foundation::core::{Affine, Point, Rgba8};
use crate::foundation::error::{LintransError, LintransResult};
use crate::interaction::manipulator::CursorShape;
use crate::render::{FrameRgba, FrameSetup, Renderer};

/// Rasterizes frames on the CPU with `vello_cpu`.
pub struct CpuRenderer {
    frame: Option<CpuFrame>,
    cursor: CursorShape,
    last: Option<FrameRgba>,
}

struct CpuFrame {
    width: u16,
    height: u16,
    ctx: vello_cpu::RenderContext,
}

impl std::fmt::Debug for CpuRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CpuRenderer")
            .field("in_frame", &self.frame.is_some())
            .field("cursor", &self.cursor)
            .field("has_last", &self.last.is_some())
            .finish()
    }
}

impl Default for CpuRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl CpuRenderer {
    /// Renderer with no frame yet.
    pub fn new() -> Self {
        Self {
            frame: None,
            cursor: CursorShape::Default,
            last: None,
        }
    }

    /// Last requested cursor.
    pub fn cursor(&self) -> CursorShape {
        self.cursor
    }

    /// The most recently finished frame.
    pub fn last_frame(&self) -> Option<&FrameRgba> {
        self.last.as_ref()
    }

    /// Move the most recently finished frame out.
    pub fn take_frame(&mut self) -> Option<FrameRgba> {
        self.last.take()
    }

    fn ctx(&mut self) -> Option<&mut vello_cpu::RenderContext> {
        self.frame.as_mut().map(|f| &mut f.ctx)
    }
}

impl Renderer for CpuRenderer {
    fn begin_frame(&mut self, setup: &FrameSetup) -> LintransResult<()> {
        let width = u16::try_from(setup.canvas_width)
            .map_err(|_| LintransError::render("canvas width exceeds u16"))?;
        let height = u16::try_from(setup.canvas_height)
            .map_err(|_| LintransError::render("canvas height exceeds u16"))?;
        if width == 0 || height == 0 {
            return Err(LintransError::render("canvas size must be > 0"));
        }

        let mut ctx = vello_cpu::RenderContext::new(width, height);
        ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint(color_to_cpu(setup.background));
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(width),
            f64::from(height),
        ));
        ctx.set_transform(affine_to_cpu(setup.view.display_affine()));

        self.frame = Some(CpuFrame { width, height, ctx });
        Ok(())
    }

    fn draw_segment(&mut self, from: Point, to: Point, stroke_weight: f64, color: Rgba8) {
        let Some(ctx) = self.ctx() else {
            return;
        };
        let mut path = vello_cpu::kurbo::BezPath::new();
        path.move_to(point_to_cpu(from));
        path.line_to(point_to_cpu(to));
        ctx.set_stroke(vello_cpu::kurbo::Stroke::new(stroke_weight));
        ctx.set_paint(color_to_cpu(color));
        ctx.stroke_path(&path);
    }

    fn fill_triangle(&mut self, a: Point, b: Point, c: Point, color: Rgba8) {
        let Some(ctx) = self.ctx() else {
            return;
        };
        let mut path = vello_cpu::kurbo::BezPath::new();
        path.move_to(point_to_cpu(a));
        path.line_to(point_to_cpu(b));
        path.line_to(point_to_cpu(c));
        path.close_path();
        ctx.set_paint(color_to_cpu(color));
        ctx.fill_path(&path);
    }

    fn draw_point(&mut self, at: Point, radius: f64, color: Rgba8) {
        let Some(ctx) = self.ctx() else {
            return;
        };
        let circle = vello_cpu::kurbo::Circle::new(point_to_cpu(at), radius);
        ctx.set_paint(color_to_cpu(color));
        ctx.fill_path(&circle.to_path(0.1));
    }

    fn set_cursor(&mut self, shape: CursorShape) {
        self.cursor = shape;
    }

    fn end_frame(&mut self) -> LintransResult<()> {
        let CpuFrame {
            width,
            height,
            mut ctx,
        } = self
            .frame
            .take()
            .ok_or_else(|| LintransError::render("end_frame without begin_frame"))?;

        let mut pixmap = vello_cpu::Pixmap::new(width, height);
        ctx.flush();
        ctx.render_to_pixmap(&mut pixmap);

        self.last = Some(FrameRgba {
            width: u32::from(width),
            height: u32::from(height),
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        });
        Ok(())
    }
}

fn color_to_cpu(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;

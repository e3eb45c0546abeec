use std::path::Path;

use anyhow::Context as _;

use crate::foundation::core::{Point, Rgba8};
use crate::foundation::error::{LintransError, LintransResult};
use crate::interaction::manipulator::CursorShape;
use crate::render::view::ViewTransform;

pub(crate) mod cpu;
pub(crate) mod grid;
pub(crate) mod record;
pub(crate) mod scene;
pub(crate) mod view;

/// A rendered RGBA8 frame.
#[derive(Clone, Debug)]
pub struct FrameRgba {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Row-major RGBA8 bytes.
    pub data: Vec<u8>,
    /// Whether `data` is premultiplied.
    pub premultiplied: bool,
}

impl FrameRgba {
    /// RGBA bytes at `(x, y)`, `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Write the frame as PNG. Frames are painted over an opaque background, so premultiplied and
    /// straight alpha coincide.
    pub fn save_png(&self, path: &Path) -> LintransResult<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output dir '{}'", parent.display()))?;
        }
        image::save_buffer_with_format(
            path,
            &self.data,
            self.width,
            self.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .map_err(|e| LintransError::render(format!("write png '{}': {e}", path.display())))
    }
}

/// What a renderer needs to know before the first draw call of a frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameSetup {
    /// Surface width in pixels.
    pub canvas_width: u32,
    /// Surface height in pixels.
    pub canvas_height: u32,
    /// Where display space lands on the surface.
    pub view: ViewTransform,
    /// Clear colour.
    pub background: Rgba8,
}

/// Drawing surface used by the scene painter.
///
/// Points are in display space (world scaled by pixels-per-unit, origin at the centre, y up).
/// Implementations own the mapping from display space to their pixels.
pub trait Renderer {
    /// Start a frame and clear it to `setup.background`.
    fn begin_frame(&mut self, setup: &FrameSetup) -> LintransResult<()>;

    /// Stroke a line segment `stroke_weight` pixels wide.
    fn draw_segment(&mut self, from: Point, to: Point, stroke_weight: f64, color: Rgba8);

    /// Fill a triangle.
    fn fill_triangle(&mut self, a: Point, b: Point, c: Point, color: Rgba8);

    /// Fill a disc of `radius` pixels.
    fn draw_point(&mut self, at: Point, radius: f64, color: Rgba8);

    /// Request a cursor shape from the host.
    fn set_cursor(&mut self, shape: CursorShape);

    /// Finish the frame started by [`Renderer::begin_frame`].
    fn end_frame(&mut self) -> LintransResult<()>;
}

use std::f64::consts::FRAC_PI_6;

use crate::config::{Palette, StrokeStyle};
use crate::foundation::core::{Axis, Basis, Point, Rgba8};
use crate::foundation::error::LintransResult;
use crate::interaction::manipulator::{CursorShape, HandleActivation};
use crate::render::grid::{GridProjector, LineWeight};
use crate::render::view::GridExtent;
use crate::render::{FrameSetup, Renderer};

/// Everything needed to paint one frame.
#[derive(Clone, Copy, Debug)]
pub struct Scene<'a> {
    /// The basis being shown.
    pub basis: &'a Basis,
    /// The untouched identity frame, drawn faintly underneath.
    pub reference: &'a Basis,
    /// Grid cells drawn from the origin.
    pub extent: GridExtent,
    /// Canvas and view for this frame.
    pub setup: FrameSetup,
    /// Stroke widths.
    pub style: &'a StrokeStyle,
    /// Colours.
    pub palette: &'a Palette,
    /// Handle hover state; `None` hides the handles.
    pub handles: Option<HandleActivation>,
    /// Cursor to request from the host.
    pub cursor: CursorShape,
}

impl Scene<'_> {
    /// Paint back to front: reference grid, transformed grid, basis arrows, handles.
    pub fn paint(&self, r: &mut dyn Renderer) -> LintransResult<()> {
        let scale = self.setup.view.pixels_per_unit;
        r.begin_frame(&self.setup)?;

        for seg in GridProjector::new(*self.reference, self.extent, scale).segments() {
            r.draw_segment(
                seg.from,
                seg.to,
                self.style.reference_grid,
                self.palette.reference_grid,
            );
        }

        for seg in GridProjector::new(*self.basis, self.extent, scale).segments() {
            let weight = match seg.weight {
                LineWeight::Regular => self.style.grid,
                LineWeight::Axis => self.style.grid_axis,
            };
            r.draw_segment(seg.from, seg.to, weight, self.palette.grid);
        }

        for axis in Axis::ALL {
            let tip = (self.basis.axis(axis) * scale).to_point();
            self.arrow(r, tip, self.axis_color(axis));
        }

        if let Some(active) = self.handles {
            for axis in Axis::ALL {
                let at = (self.basis.axis(axis) * scale).to_point();
                if active.is_hot(axis) {
                    r.draw_point(at, self.style.handle_radius * 1.4, self.palette.handle_hot);
                } else {
                    r.draw_point(at, self.style.handle_radius, self.axis_color(axis));
                }
            }
        }

        r.set_cursor(self.cursor);
        r.end_frame()
    }

    fn axis_color(&self, axis: Axis) -> Rgba8 {
        match axis {
            Axis::First => self.palette.axis0,
            Axis::Second => self.palette.axis1,
        }
    }

    fn arrow(&self, r: &mut dyn Renderer, tip: Point, color: Rgba8) {
        let Some([a, b, c]) = arrow_head(Point::ORIGIN, tip, self.style.arrow_head) else {
            return;
        };
        r.draw_segment(Point::ORIGIN, tip, self.style.arrow, color);
        r.fill_triangle(a, b, c, color);
    }
}

/// Triangle at `to` with sides `size` long, each 30 degrees off the shaft.
/// `None` for a zero-length arrow.
pub fn arrow_head(from: Point, to: Point, size: f64) -> Option<[Point; 3]> {
    let d = to - from;
    if d.hypot2() == 0.0 {
        return None;
    }
    let angle = d.atan2();
    let side = |theta: f64| {
        Point::new(to.x - size * theta.cos(), to.y - size * theta.sin())
    };
    Some([to, side(angle - FRAC_PI_6), side(angle + FRAC_PI_6)])
}

#[cfg(test)]
#[path = "../../tests/unit/render/scene.rs"]
mod tests;

use crate::foundation::core::{Affine, Point, Vec2};
use crate::foundation::error::{LintransError, LintransResult};

/// Host window size plus the extra canvas margin drawn beyond it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Extra canvas pixels on each dimension.
    pub padding: u32,
}

/// Half-extent of the grid, in whole grid cells from the origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GridExtent {
    /// Cells from the origin along x.
    pub cols: u32,
    /// Cells from the origin along y.
    pub rows: u32,
}

impl Viewport {
    /// Rejects a zero-sized window.
    pub fn new(window_width: u32, window_height: u32, padding: u32) -> LintransResult<Self> {
        if window_width == 0 || window_height == 0 {
            return Err(LintransError::validation("viewport size must be > 0"));
        }
        Ok(Self {
            window_width,
            window_height,
            padding,
        })
    }

    /// Size of the drawing surface: the window plus padding.
    pub fn canvas_size(&self) -> (u32, u32) {
        (
            self.window_width.saturating_add(self.padding),
            self.window_height.saturating_add(self.padding),
        )
    }

    /// Cells needed to cover the canvas from the window centre in every direction.
    pub fn grid_extent(&self, pixels_per_unit: f64) -> GridExtent {
        let cells = |window: u32| {
            let half = f64::from(window) / 2.0 + f64::from(self.padding);
            (half / pixels_per_unit).ceil().max(1.0) as u32
        };
        GridExtent {
            cols: cells(self.window_width),
            rows: cells(self.window_height),
        }
    }

    /// The origin sits at the centre of the window, not of the padded canvas.
    pub fn view_transform(&self, pixels_per_unit: f64) -> ViewTransform {
        ViewTransform {
            center: Point::new(
                f64::from(self.window_width) / 2.0,
                f64::from(self.window_height) / 2.0,
            ),
            pixels_per_unit,
        }
    }
}

/// Mapping between world units, display space and screen pixels.
///
/// Display space is world scaled by `pixels_per_unit`, origin at the centre, y up. Screen space
/// is pixels, origin top-left, y down.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ViewTransform {
    /// Screen position of the world origin.
    pub center: Point,
    /// Display pixels per world unit.
    pub pixels_per_unit: f64,
}

impl ViewTransform {
    /// Scale world units into display space.
    pub fn world_to_display(&self, p: Point) -> Point {
        (p.to_vec2() * self.pixels_per_unit).to_point()
    }

    /// Move the origin to `center` and flip y.
    pub fn display_to_screen(&self, p: Point) -> Point {
        Point::new(self.center.x + p.x, self.center.y - p.y)
    }

    /// World point to screen pixels.
    pub fn world_to_screen(&self, p: Point) -> Point {
        self.display_to_screen(self.world_to_display(p))
    }

    /// Screen pixels back to world units.
    pub fn screen_to_world(&self, p: Point) -> Point {
        Point::new(
            (p.x - self.center.x) / self.pixels_per_unit,
            (self.center.y - p.y) / self.pixels_per_unit,
        )
    }

    /// Display to screen as an affine map (translate to centre, flip y).
    pub fn display_affine(&self) -> Affine {
        Affine::translate(Vec2::new(self.center.x, self.center.y))
            * Affine::scale_non_uniform(1.0, -1.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/view.rs"]
mod tests;

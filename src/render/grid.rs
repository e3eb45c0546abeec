use crate::foundation::core::{Axis, Basis, Point, Vec2};
use crate::render::view::GridExtent;

/// Stroke class of a grid line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum LineWeight {
    /// Any line off the origin.
    Regular,
    /// The offset-0 lines, i.e. the coordinate axes of the frame.
    Axis,
}

/// One grid line, clipped to the grid extent, in display space.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GridSegment {
    /// Start point.
    pub from: Point,
    /// End point.
    pub to: Point,
    /// Stroke class.
    pub weight: LineWeight,
    /// The basis axis whose integer multiples offset this line.
    pub offset_along: Axis,
}

/// Projects the integer lattice of a basis into display space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridProjector {
    basis: Basis,
    extent: GridExtent,
    scale: f64,
}

impl GridProjector {
    /// Projector for `basis`, `extent` cells each way, `scale` display pixels per unit.
    pub fn new(basis: Basis, extent: GridExtent, scale: f64) -> Self {
        Self {
            basis,
            extent,
            scale,
        }
    }

    /// A fresh pass over every grid line.
    pub fn segments(&self) -> GridLines {
        GridLines {
            basis: self.basis,
            cols: i64::from(self.extent.cols),
            rows: i64::from(self.extent.rows),
            scale: self.scale,
            family: Some(Axis::First),
            offset: -i64::from(self.extent.cols),
        }
    }
}

/// Lazy sequence of grid segments; `Clone` restarts from the current position.
#[derive(Clone, Debug)]
pub struct GridLines {
    basis: Basis,
    cols: i64,
    rows: i64,
    scale: f64,
    family: Option<Axis>,
    offset: i64,
}

impl GridLines {
    fn point(&self, a: i64, b: i64) -> Point {
        let v: Vec2 = self.basis.apply(Vec2::new(a as f64, b as f64));
        (v * self.scale).to_point()
    }

    fn remaining(&self) -> usize {
        let left_in = |offset: i64, half: i64| (half - offset + 1).max(0) as usize;
        match self.family {
            Some(Axis::First) => {
                left_in(self.offset, self.cols) + (2 * self.rows + 1) as usize
            }
            Some(Axis::Second) => left_in(self.offset, self.rows),
            None => 0,
        }
    }
}

impl Iterator for GridLines {
    type Item = GridSegment;

    fn next(&mut self) -> Option<GridSegment> {
        loop {
            match self.family? {
                Axis::First => {
                    if self.offset > self.cols {
                        self.family = Some(Axis::Second);
                        self.offset = -self.rows;
                        continue;
                    }
                    let i = self.offset;
                    self.offset += 1;
                    return Some(GridSegment {
                        from: self.point(i, -self.rows),
                        to: self.point(i, self.rows),
                        weight: weight_for(i),
                        offset_along: Axis::First,
                    });
                }
                Axis::Second => {
                    if self.offset > self.rows {
                        self.family = None;
                        return None;
                    }
                    let j = self.offset;
                    self.offset += 1;
                    return Some(GridSegment {
                        from: self.point(-self.cols, j),
                        to: self.point(self.cols, j),
                        weight: weight_for(j),
                        offset_along: Axis::Second,
                    });
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl ExactSizeIterator for GridLines {}

fn weight_for(offset: i64) -> LineWeight {
    if offset == 0 {
        LineWeight::Axis
    } else {
        LineWeight::Regular
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/grid.rs"]
mod tests;

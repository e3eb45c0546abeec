use crate::foundation::error::{LintransError, LintransResult};

pub use kurbo::{Affine, Point, Vec2};

/// One of the two basis axes.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum Axis {
    /// `axis0`, the image of `(1, 0)`.
    First,
    /// `axis1`, the image of `(0, 1)`.
    Second,
}

impl Axis {
    /// Both axes in priority order (first-checked wins).
    pub const ALL: [Self; 2] = [Self::First, Self::Second];

    /// Position in `[axis0, axis1]`.
    pub fn index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
        }
    }

    /// Direction of this axis in the identity frame, in degrees.
    pub fn identity_angle_deg(self) -> f64 {
        match self {
            Self::First => 0.0,
            Self::Second => 90.0,
        }
    }
}

/// The current coordinate frame. Axes may become linearly dependent; that is not an error.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Basis {
    /// First column.
    pub axis0: Vec2,
    /// Second column.
    pub axis1: Vec2,
}

impl Default for Basis {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Basis {
    /// The standard basis `(1, 0), (0, 1)`.
    pub const IDENTITY: Self = Self {
        axis0: Vec2::new(1.0, 0.0),
        axis1: Vec2::new(0.0, 1.0),
    };

    /// Build from two column vectors.
    pub fn new(axis0: Vec2, axis1: Vec2) -> Self {
        Self { axis0, axis1 }
    }

    /// Current vector of `axis`.
    pub fn axis(&self, axis: Axis) -> Vec2 {
        match axis {
            Axis::First => self.axis0,
            Axis::Second => self.axis1,
        }
    }

    /// Mutable access to the vector of `axis`.
    pub fn axis_mut(&mut self, axis: Axis) -> &mut Vec2 {
        match axis {
            Axis::First => &mut self.axis0,
            Axis::Second => &mut self.axis1,
        }
    }

    /// Overwrite one axis, leaving the other untouched.
    pub fn set_axis(&mut self, axis: Axis, x: f64, y: f64) {
        *self.axis_mut(axis) = Vec2::new(x, y);
    }

    /// Return to [`Basis::IDENTITY`].
    pub fn reset(&mut self) {
        *self = Self::IDENTITY;
    }

    /// Image of `v` under the linear map whose columns are the axes.
    pub fn apply(&self, v: Vec2) -> Vec2 {
        self.axis0 * v.x + self.axis1 * v.y
    }

    /// The axes as matrix columns.
    pub fn to_matrix(self) -> Matrix2 {
        Matrix2 {
            cols: [self.axis0, self.axis1],
        }
    }
}

/// A 2x2 matrix stored by columns: column `i` is the image of the `i`-th standard basis vector.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Matrix2 {
    /// Columns `[col0, col1]`.
    pub cols: [Vec2; 2],
}

impl Default for Matrix2 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Matrix2 {
    /// The identity matrix.
    pub const IDENTITY: Self = Self {
        cols: [Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0)],
    };

    /// Build from row notation `[[a, b], [c, d]]`.
    pub fn from_rows(rows: [[f64; 2]; 2]) -> Self {
        let [[a, b], [c, d]] = rows;
        Self {
            cols: [Vec2::new(a, c), Vec2::new(b, d)],
        }
    }

    /// Row notation `[[a, b], [c, d]]`.
    pub fn rows(&self) -> [[f64; 2]; 2] {
        let [c0, c1] = self.cols;
        [[c0.x, c1.x], [c0.y, c1.y]]
    }

    /// Column that `axis` should end up at.
    pub fn col(&self, axis: Axis) -> Vec2 {
        self.cols[axis.index()]
    }

    /// Reject non-finite entries.
    pub fn validate(&self) -> LintransResult<()> {
        if !self.cols.iter().all(|c| c.is_finite()) {
            return Err(LintransError::validation(
                "matrix entries must be finite numbers",
            ));
        }
        Ok(())
    }

    /// The columns as a basis.
    pub fn to_basis(self) -> Basis {
        Basis {
            axis0: self.cols[0],
            axis1: self.cols[1],
        }
    }
}

impl From<Basis> for Matrix2 {
    fn from(basis: Basis) -> Self {
        basis.to_matrix()
    }
}

impl From<Matrix2> for Basis {
    fn from(m: Matrix2) -> Self {
        m.to_basis()
    }
}

/// Straight (non-premultiplied) RGBA8 colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Opaque colour.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Premultiplied `[r, g, b, a]`, the layout of rendered frames.
    pub fn to_premul(self) -> [u8; 4] {
        fn premul(c: u8, a: u8) -> u8 {
            let c = u16::from(c);
            let a = u16::from(a);
            (((c * a) + 127) / 255) as u8
        }

        [
            premul(self.r, self.a),
            premul(self.g, self.a),
            premul(self.b, self.a),
            self.a,
        ]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;

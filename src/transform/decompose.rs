//! Split a 2x2 matrix into independent per-axis rotation and scale deltas, measured from the
//! identity frame.
//!
//! Each column is treated on its own: the rotation is the signed shortest angle from the identity
//! axis to the column's direction, and the scale delta is the change in length from 1. This is
//! exact for rotations and axis-aligned scalings. Shear has no term of its own, so for a general
//! matrix the animated path only approximates the map; the resting basis is always taken from the
//! literal matrix columns.

use crate::foundation::core::{Axis, Matrix2, Vec2};
use crate::foundation::math::{angle_deg, wrap_degrees};

/// What remains to be applied to one axis before it reaches its target.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AxisTarget {
    /// Signed degrees still to rotate, in `(-180, 180]`.
    pub rotation_remaining_deg: f64,
    /// Length change still to apply.
    pub scale_remaining: f64,
    /// Literal target column; the final step snaps the axis onto it.
    pub column: Vec2,
}

impl AxisTarget {
    /// No rotation left.
    pub fn is_rotation_done(&self) -> bool {
        self.rotation_remaining_deg == 0.0
    }

    /// No length change left.
    pub fn is_scale_done(&self) -> bool {
        self.scale_remaining == 0.0
    }

    /// The axis has reached its target.
    pub fn is_done(&self) -> bool {
        self.is_rotation_done() && self.is_scale_done()
    }
}

/// Decompose one column relative to the identity axis `axis`.
pub fn decompose_axis(axis: Axis, column: Vec2) -> AxisTarget {
    if column == Vec2::ZERO {
        // atan2(0, 0) is meaningless; collapse inward along the identity direction.
        return AxisTarget {
            rotation_remaining_deg: 0.0,
            scale_remaining: -1.0,
            column,
        };
    }

    let rotation = wrap_degrees(angle_deg(column.x, column.y) - axis.identity_angle_deg());
    AxisTarget {
        rotation_remaining_deg: rotation,
        scale_remaining: column.length() - 1.0,
        column,
    }
}

/// Per-axis targets for animating the identity frame toward `target`.
pub fn decompose(target: &Matrix2) -> [AxisTarget; 2] {
    Axis::ALL.map(|axis| decompose_axis(axis, target.col(axis)))
}

#[cfg(test)]
#[path = "../../tests/unit/transform/decompose.rs"]
mod tests;

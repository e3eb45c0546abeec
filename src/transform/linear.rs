//! Linear transform helpers acting on a single basis vector.

use crate::foundation::core::{Affine, Vec2};

#[inline]
/// Rotate `v` counter-clockwise by `deg` degrees about the origin.
pub fn rotate_deg(v: Vec2, deg: f64) -> Vec2 {
    (Affine::rotate(deg.to_radians()) * v.to_point()).to_vec2()
}

#[inline]
/// Change the length of `v` by `delta` through a uniform scale matrix applied to `v`.
///
/// The multiplier is `1 + delta / |v|`, so the resulting length is `|v| + delta`.
/// A zero-length `v` is returned unchanged.
pub fn scale_length_by(v: Vec2, delta: f64) -> Vec2 {
    let len = v.length();
    if len == 0.0 {
        return v;
    }
    let factor = 1.0 + delta / len;
    (Affine::scale(factor) * v.to_point()).to_vec2()
}

#[inline]
/// A vector with the direction of `dir` and the given length; zero if `dir` is zero.
pub fn with_length(dir: Vec2, len: f64) -> Vec2 {
    let dir_len = dir.length();
    if dir_len == 0.0 {
        return Vec2::ZERO;
    }
    dir * (len / dir_len)
}

#[cfg(test)]
#[path = "../../tests/unit/transform/linear.rs"]
mod tests;

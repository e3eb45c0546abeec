/// Tolerance used when comparing floating-point geometry.
pub const EPSILON: f64 = 1e-9;

/// Wrap an angle in degrees into `(-180, 180]`.
pub fn wrap_degrees(deg: f64) -> f64 {
    let wrapped = deg.rem_euclid(360.0);
    if wrapped > 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}

/// Direction of `(x, y)` in degrees, `atan2` convention.
pub fn angle_deg(x: f64, y: f64) -> f64 {
    y.atan2(x).to_degrees()
}

/// Snap `v` to the nearest integer if it lies strictly within `tolerance` of it.
pub fn snap_to_grid(v: f64, tolerance: f64) -> f64 {
    let nearest = v.round();
    if (v - nearest).abs() < tolerance {
        nearest
    } else {
        v
    }
}

#[cfg(test)]
pub(crate) fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;

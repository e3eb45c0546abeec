use super::*;
use crate::foundation::math::{EPSILON, approx_eq};

fn vec_close(a: Vec2, b: Vec2) -> bool {
    approx_eq(a.x, b.x, EPSILON) && approx_eq(a.y, b.y, EPSILON)
}

#[test]
fn rotate_quarter_turns() {
    assert!(vec_close(
        rotate_deg(Vec2::new(1.0, 0.0), 90.0),
        Vec2::new(0.0, 1.0)
    ));
    assert!(vec_close(
        rotate_deg(Vec2::new(0.0, 1.0), -90.0),
        Vec2::new(1.0, 0.0)
    ));
}

#[test]
fn rotation_preserves_length() {
    let v = Vec2::new(3.0, -4.0);
    let r = rotate_deg(v, 37.0);
    assert!(approx_eq(r.length(), 5.0, EPSILON));
}

#[test]
fn scale_length_is_additive_in_length() {
    let v = Vec2::new(3.0, 4.0);
    let grown = scale_length_by(v, 0.5);
    assert!(approx_eq(grown.length(), 5.5, EPSILON));
    assert!(approx_eq(grown.atan2(), v.atan2(), EPSILON));

    let shrunk = scale_length_by(v, -1.0);
    assert!(approx_eq(shrunk.length(), 4.0, EPSILON));
}

#[test]
fn scale_of_zero_vector_is_zero() {
    assert_eq!(scale_length_by(Vec2::ZERO, 1.0), Vec2::ZERO);
}

#[test]
fn with_length_keeps_direction() {
    let v = with_length(Vec2::new(0.0, -2.0), 3.0);
    assert!(vec_close(v, Vec2::new(0.0, -3.0)));
    assert_eq!(with_length(Vec2::ZERO, 3.0), Vec2::ZERO);
}

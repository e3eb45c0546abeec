use super::*;

#[test]
fn wrap_degrees_lands_in_half_open_range() {
    assert_eq!(wrap_degrees(0.0), 0.0);
    assert_eq!(wrap_degrees(180.0), 180.0);
    assert_eq!(wrap_degrees(-180.0), 180.0);
    assert_eq!(wrap_degrees(-210.0), 150.0);
    assert_eq!(wrap_degrees(270.0), -90.0);
    assert_eq!(wrap_degrees(-90.0), -90.0);
}

#[test]
fn snap_only_within_tolerance() {
    assert_eq!(snap_to_grid(2.04, 0.1), 2.0);
    assert_eq!(snap_to_grid(0.97, 0.1), 1.0);
    assert_eq!(snap_to_grid(2.3, 0.1), 2.3);
    assert_eq!(snap_to_grid(-1.95, 0.1), -2.0);
    assert_eq!(snap_to_grid(0.5, 0.1), 0.5);
}

#[test]
fn angle_deg_uses_atan2_convention() {
    assert!(approx_eq(angle_deg(1.0, 0.0), 0.0, EPSILON));
    assert!(approx_eq(angle_deg(0.0, 1.0), 90.0, EPSILON));
    assert!(approx_eq(angle_deg(-1.0, 0.0), 180.0, EPSILON));
    assert!(approx_eq(angle_deg(0.0, -1.0), -90.0, EPSILON));
}

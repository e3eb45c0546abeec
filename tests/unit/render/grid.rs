use super::*;

fn extent(cols: u32, rows: u32) -> GridExtent {
    GridExtent { cols, rows }
}

#[test]
fn segment_count_matches_extent() {
    let proj = GridProjector::new(Basis::IDENTITY, extent(3, 2), 1.0);
    let lines = proj.segments();
    assert_eq!(lines.len(), 7 + 5);
    assert_eq!(lines.count(), 12);
}

#[test]
fn only_offset_zero_lines_are_axes() {
    let proj = GridProjector::new(Basis::IDENTITY, extent(4, 4), 1.0);
    let axes: Vec<_> = proj
        .segments()
        .filter(|s| s.weight == LineWeight::Axis)
        .collect();
    assert_eq!(axes.len(), 2);
    assert_eq!(axes[0].offset_along, Axis::First);
    assert_eq!(axes[0].from, Point::new(0.0, -4.0));
    assert_eq!(axes[0].to, Point::new(0.0, 4.0));
    assert_eq!(axes[1].offset_along, Axis::Second);
    assert_eq!(axes[1].from, Point::new(-4.0, 0.0));
    assert_eq!(axes[1].to, Point::new(4.0, 0.0));
}

#[test]
fn points_follow_basis_and_scale() {
    let basis = Basis::new(Vec2::new(1.0, 1.0), Vec2::new(-1.0, 2.0));
    let proj = GridProjector::new(basis, extent(1, 1), 10.0);
    let first = proj.segments().next().unwrap();
    // axis0 * -1 + axis1 * -1 = (0, -3), axis0 * -1 + axis1 * 1 = (-2, 1)
    assert_eq!(first.from, Point::new(0.0, -30.0));
    assert_eq!(first.to, Point::new(-20.0, 10.0));
    assert_eq!(first.weight, LineWeight::Regular);
}

#[test]
fn sequence_is_restartable() {
    let proj = GridProjector::new(Basis::IDENTITY, extent(2, 3), 50.0);
    let a: Vec<_> = proj.segments().collect();
    let b: Vec<_> = proj.segments().collect();
    assert_eq!(a, b);

    let mut it = proj.segments();
    it.next();
    let snapshot = it.clone();
    assert_eq!(it.count(), snapshot.count());
}

#[test]
fn size_hint_is_exact_while_iterating() {
    let mut it = GridProjector::new(Basis::IDENTITY, extent(2, 1), 1.0).segments();
    let mut expected = 5 + 3;
    while expected > 0 {
        assert_eq!(it.len(), expected);
        assert!(it.next().is_some());
        expected -= 1;
    }
    assert_eq!(it.len(), 0);
    assert!(it.next().is_none());
}

#[test]
fn degenerate_basis_still_projects() {
    let basis = Basis::new(Vec2::ZERO, Vec2::ZERO);
    let proj = GridProjector::new(basis, extent(1, 1), 50.0);
    assert!(
        proj.segments()
            .all(|s| s.from == Point::ORIGIN && s.to == Point::ORIGIN)
    );
}

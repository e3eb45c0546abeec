use super::*;
use crate::foundation::core::Vec2;

#[test]
fn default_shows_identity() {
    let input = MatrixInput::default();
    assert_eq!(input.field(MatrixField::A), "1");
    assert_eq!(input.field(MatrixField::B), "0");
    assert_eq!(input.parse(), Some(Matrix2::IDENTITY));
}

#[test]
fn any_bad_field_disables_parse() {
    for bad in ["", "   ", "abc", "1.2.3", "NaN", "inf", "-infinity"] {
        let mut input = MatrixInput::new("1", "0", "0", "1");
        input.set_field(MatrixField::C, bad);
        assert!(!input.is_valid(), "{bad:?} accepted");
        assert!(!input.is_field_valid(MatrixField::C));
        assert!(input.is_field_valid(MatrixField::A));
        assert_eq!(input.parse(), None);
        assert!(input.try_parse().is_err());
    }
}

#[test]
fn fields_are_rows() {
    let input = MatrixInput::new(" 0 ", "-1", "1", "0");
    let m = input.try_parse().unwrap();
    assert_eq!(m.cols[0], Vec2::new(0.0, 1.0));
    assert_eq!(m.cols[1], Vec2::new(-1.0, 0.0));
}

#[test]
fn csv_parsing() {
    let input = MatrixInput::from_csv("2, 0,0 ,0.5");
    assert_eq!(
        input.parse(),
        Some(Matrix2::from_rows([[2.0, 0.0], [0.0, 0.5]]))
    );
    assert!(!MatrixInput::from_csv("1,2,3").is_valid());

    let surplus = MatrixInput::from_csv("1,2,3,4,5");
    assert!(!surplus.is_valid());
    assert!(!surplus.is_field_valid(MatrixField::D));
    assert!(surplus.parse().is_none());
    assert!(surplus.try_parse().is_err());
}

#[test]
fn entries_format_compactly() {
    assert_eq!(format_entry(1.0), "1");
    assert_eq!(format_entry(0.5), "0.5");
    assert_eq!(format_entry(-0.25), "-0.25");
    assert_eq!(format_entry(2.3456), "2.35");
    assert_eq!(format_entry(-0.0), "0");
    assert_eq!(format_entry(-0.001), "0");
    assert_eq!(format_entry(10.0), "10");
}

#[test]
fn readout_tracks_basis() {
    let basis = Basis::new(Vec2::new(0.0, 1.0), Vec2::new(-1.0, 0.0));
    let readout = MatrixReadout::from_basis(&basis);
    assert_eq!(readout.to_string(), "[[0, -1], [1, 0]]");
    assert_eq!(
        MatrixInput::from_matrix(&basis.to_matrix()).try_parse().unwrap(),
        basis.to_matrix()
    );
}

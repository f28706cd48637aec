use super::*;

#[test]
fn wire_requires_two_points() {
    assert!(Wire::new(vec![]).is_none());
    assert!(Wire::new(vec![GridPoint::new(1, 1)]).is_none());

    let w = Wire::new(vec![GridPoint::new(1, 1), GridPoint::new(1, 4)]).unwrap();
    assert_eq!(w.len(), 2);
    assert_eq!(w.segment_count(), 1);
    assert!(!w.is_empty());
}

#[test]
fn from_coords_drops_trailing_value() {
    let w = Wire::from_coords(&[0, 0, 5, 5, 9]).unwrap();
    assert_eq!(w.points(), &[GridPoint::new(0, 0), GridPoint::new(5, 5)]);
}

#[test]
fn from_coords_rejects_single_point() {
    assert!(Wire::from_coords(&[3, 4, 7]).is_none());
}

#[test]
fn start_and_end_follow_point_order() {
    let w = Wire::from_coords(&[2, 0, 2, 6, 9, 6]).unwrap();
    assert_eq!(w.start(), GridPoint::new(2, 0));
    assert_eq!(w.end(), GridPoint::new(9, 6));
    assert_eq!(w.segment_count(), 2);
}

#[test]
fn negative_coordinates_are_kept() {
    let w = Wire::from_coords(&[-3, -1, 4, -1]).unwrap();
    assert_eq!(w.start(), GridPoint::from((-3, -1)));
}

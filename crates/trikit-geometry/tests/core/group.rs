use trikit_core::{Point, Scale};
use trikit_geometry::{scaled, skewed, Tri, TriGroup};

const EPS: f64 = 1e-9;

#[test]
fn test_group_skew_moves_children_by_height() {
    let group = TriGroup::from(vec![
        Tri::from_angle(Point::new(0.0, 0.0), 0.0, 10.0, 5.0),
        Tri::from_angle(Point::new(0.0, 5.0), 0.0, 10.0, 5.0),
    ]);
    let tris = group.get_tris(&skewed(&group.tri(), 10.0));

    assert!(tris[0].p0().approx_eq(&Point::new(10.0, 0.0), EPS));
    assert!(tris[0].p2().approx_eq(&Point::new(5.0, 5.0), EPS));
    assert!(tris[1].p0().approx_eq(&Point::new(5.0, 5.0), EPS));
    assert!(tris[1].p2().approx_eq(&Point::new(0.0, 10.0), EPS));
}

#[test]
fn test_group_mirror() {
    let group = TriGroup::new(vec![Tri::from_angle(Point::new(2.0, 2.0), 0.0, 4.0, 4.0)]);
    let flipped = scaled(&group.tri(), Scale::new(1.0, -1.0), Point::new(0.0, 4.0));
    let child = group.get_tris(&flipped)[0];
    assert!(child.approx_eq(&flipped, EPS));
    assert!(child.height() < 0.0);
}

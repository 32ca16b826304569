use std::f64::consts::FRAC_PI_2;
use trikit_core::{Point, Scale};
use trikit_geometry::{get_adj, rotated, scaled, skewed, translated, Adj, Remap, Tri};

const EPS: f64 = 1e-9;

fn rect() -> Tri {
    Tri::from_angle(Point::new(10.0, 20.0), 0.0, 40.0, 20.0)
}

#[test]
fn test_identity_for_arbitrary_frames() {
    let frames = [
        rect(),
        Tri::default(),
        Tri::new(Point::ORIGIN, Point::ORIGIN, Point::new(0.0, 5.0)),
        skewed(&rotated(&rect(), 2.1, Point::new(1.0, 1.0)), -6.0),
    ];
    for t in &frames {
        assert!(get_adj(t, t).is_identity(EPS), "not identity for {}", t);
    }
}

#[test]
fn test_combined_change() {
    let target = translated(
        &skewed(&scaled(&rect(), Scale::new(0.5, 2.0), rect().p0()), 3.0),
        7.0,
        0.0,
    );
    let adj = get_adj(&rect(), &target);
    assert!((adj.scale_x - 0.5).abs() < EPS);
    assert!((adj.scale_y - 2.0).abs() < EPS);
    assert!((adj.skew_delta - 3.0).abs() < EPS);
    assert!(adj.angle_delta.abs() < EPS);
    assert!(!adj.is_identity(EPS));
}

#[test]
fn test_remap_moves_reference_onto_target() {
    let target = rotated(&scaled(&rect(), Scale::new(2.0, 0.5), Point::ORIGIN), FRAC_PI_2, Point::ORIGIN);
    let remap = Remap::new(&rect(), &target);
    assert!(remap.point(rect().p0()).approx_eq(&target.p0(), EPS));
    assert!(remap.point(rect().p1()).approx_eq(&target.p1(), EPS));
    assert!(remap.point(rect().p2()).approx_eq(&target.p2(), EPS));
    assert!(remap.point(rect().p3()).approx_eq(&target.p3(), EPS));
    assert!(remap.tri(&rect()).approx_eq(&target, EPS));
}

#[test]
fn test_default_adj_is_identity() {
    assert_eq!(Adj::default(), Adj::IDENTITY);
    assert_eq!(Adj::IDENTITY.scale(), Scale::uniform(1.0));
}

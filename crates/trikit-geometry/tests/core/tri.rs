use std::f64::consts::{FRAC_PI_2, PI};
use trikit_core::{rotate_point, Point, Rect, Scale};
use trikit_geometry::{
    bounding_rect, center_point, offset_aligned, rotated, scaled, skewed, translated,
    tri_from_rect, Tri,
};

const EPS: f64 = 1e-9;

fn square() -> Tri {
    Tri::new(
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(0.0, 10.0),
    )
}

#[test]
fn test_quarter_turn_about_origin() {
    let t = rotated(&square(), FRAC_PI_2, Point::ORIGIN);
    assert!((t.angle() - FRAC_PI_2).abs() < EPS);
    assert!(t
        .p3()
        .approx_eq(&rotate_point(Point::new(10.0, 10.0), Point::ORIGIN, FRAC_PI_2), EPS));
    assert!(t.p3().approx_eq(&Point::new(-10.0, 10.0), EPS));
}

#[test]
fn test_full_turn_restores_frame() {
    let t = skewed(&Tri::from_angle(Point::new(4.0, 1.0), 0.2, 9.0, 6.0), 2.0);
    let mut turned = t;
    for _ in 0..4 {
        turned = rotated(&turned, FRAC_PI_2, Point::new(-3.0, 7.0));
    }
    assert!(turned.approx_eq(&t, 1e-9));
}

#[test]
fn test_mirror_by_negative_scale() {
    let flipped = scaled(&square(), Scale::new(1.0, -1.0), Point::new(0.0, 5.0));
    assert_eq!(flipped.p0(), Point::new(0.0, 10.0));
    assert_eq!(flipped.height(), -10.0);
    assert_eq!(flipped.angle(), 0.0);

    let mirrored = scaled(&square(), Scale::new(-1.0, 1.0), Point::new(5.0, 0.0));
    assert!((mirrored.angle() - PI).abs() < EPS);
    assert_eq!(mirrored.width(), 10.0);
    assert_eq!(mirrored.height(), -10.0);
    let r = bounding_rect(&mirrored);
    assert_eq!((r.x, r.y, r.w), (0.0, 0.0, 10.0));
    assert!((r.h - 10.0).abs() < EPS);
}

#[test]
fn test_skew_keeps_bottom_edge() {
    let t = skewed(&square(), -3.0);
    assert_eq!(t.p2(), square().p2());
    assert!(t.p3().approx_eq(&square().p3(), EPS));
    assert!((t.skew() + 3.0).abs() < EPS);
    assert!(skewed(&t, 3.0).approx_eq(&square(), EPS));
}

#[test]
fn test_offsets() {
    let t = translated(&tri_from_rect(&Rect::new(1.0, 1.0, 4.0, 2.0)), -1.0, -1.0);
    assert_eq!(t.p0(), Point::ORIGIN);
    assert_eq!(t.p3(), Point::new(4.0, 2.0));

    let turned = Tri::from_angle(Point::ORIGIN, PI, 10.0, 10.0);
    let moved = offset_aligned(&turned, 2.0, 1.0);
    assert!(moved.p0().approx_eq(&Point::new(-2.0, -1.0), EPS));
}

#[test]
fn test_to_local_inside_frame() {
    let t = rotated(&square(), 0.8, Point::new(2.0, 2.0));
    let local = t.to_local(center_point(&t)).unwrap();
    assert!(local.approx_eq(&Point::new(0.5, 0.5), EPS));
    assert!(t.contains(center_point(&t)));
}

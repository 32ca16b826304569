use std::f64::consts::PI;
use trikit_core::{Point, Scale};
use trikit_geometry::{arc_as_path, arc_end_points, rotated, scaled, AngleSpan, PathPt, Tri};

const EPS: f64 = 1e-9;

/// True if `p` lies on the ellipse inscribed in `tri`.
fn on_inscribed_ellipse(tri: &Tri, p: Point) -> bool {
    let Some(local) = tri.to_local(p) else {
        return false;
    };
    let u = local.x * 2.0 - 1.0;
    let v = local.y * 2.0 - 1.0;
    (u * u + v * v - 1.0).abs() < 1e-9
}

#[test]
fn test_end_points_on_turned_ellipse() {
    let tri = rotated(
        &Tri::from_angle(Point::new(5.0, 5.0), 0.0, 30.0, 10.0),
        0.9,
        Point::ORIGIN,
    );
    for span in [
        AngleSpan::new(0.0, PI),
        AngleSpan::new(-1.0, 0.5),
        AngleSpan::new(2.0, 6.0),
    ] {
        for p in arc_end_points(&tri, &span) {
            assert!(on_inscribed_ellipse(&tri, p));
        }
    }
}

#[test]
fn test_segment_ends_on_ellipse() {
    let tri = scaled(
        &Tri::from_angle(Point::ORIGIN, 0.3, 20.0, 8.0),
        Scale::new(1.0, -1.0),
        Point::ORIGIN,
    );
    let path = arc_as_path(&tri, &AngleSpan::new(0.0, 3.0));
    assert_eq!(path.len(), 5);
    for pt in &path {
        assert!(on_inscribed_ellipse(&tri, pt.end_point().unwrap()));
    }
    assert!(path[1..].iter().all(PathPt::is_cubic_bezier));
}

#[test]
fn test_reversed_span() {
    let tri = Tri::from_angle(Point::ORIGIN, 0.0, 10.0, 10.0);
    let forward = arc_as_path(&tri, &AngleSpan::new(0.0, PI));
    let backward = arc_as_path(&tri, &AngleSpan::new(PI, 0.0));
    assert_eq!(forward.len(), backward.len());
    let first = forward[0].end_point().unwrap();
    let last = backward.last().unwrap().end_point().unwrap();
    assert!(first.approx_eq(&last, EPS));
}

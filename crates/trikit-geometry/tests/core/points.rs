use std::f64::consts::FRAC_PI_2;
use trikit_core::{PathError, Point, Radii, Scale};
use trikit_geometry::{rotated, scaled, skewed, tri_from_points, PathPt, Points, Tri};

const EPS: f64 = 1e-9;

fn assert_points_eq(actual: &[Point], expected: &[Point]) {
    assert_eq!(actual.len(), expected.len());
    for (a, e) in actual.iter().zip(expected) {
        assert!(a.approx_eq(e, EPS), "{} != {}", a, e);
    }
}

#[test]
fn test_append_then_stretch_horizontally() {
    let mut points = Points::new();
    points.append(Point::new(0.0, 0.0));
    points.append(Point::new(10.0, 0.0));
    points.append(Point::new(10.0, 10.0));

    let tri = points.tri();
    assert_eq!(tri.p0(), Point::new(0.0, 0.0));
    assert_eq!(tri.p1(), Point::new(10.0, 0.0));
    assert_eq!(tri.p2(), Point::new(0.0, 10.0));

    let wide = scaled(&tri, Scale::new(2.0, 1.0), Point::ORIGIN);
    assert_points_eq(
        &points.get_points_dumb(&wide),
        &[
            Point::new(0.0, 0.0),
            Point::new(20.0, 0.0),
            Point::new(20.0, 10.0),
        ],
    );
}

#[test]
fn test_bounds_stop_at_close() {
    let path = vec![
        PathPt::line_to(0.0, 0.0),
        PathPt::line_to(10.0, 0.0),
        PathPt::line_to(5.0, 100.0),
        PathPt::Close,
        PathPt::line_to(500.0, 500.0),
    ];
    let tri = tri_from_points(&path);
    assert_eq!(tri.p0(), Point::new(0.0, 0.0));
    assert_eq!(tri.p1(), Point::new(10.0, 0.0));
    assert_eq!(tri.p2(), Point::new(0.0, 100.0));
}

#[test]
fn test_skew_is_spread_over_height() {
    let points = Points::from(vec![
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(10.0, 10.0),
        Point::new(0.0, 10.0),
        Point::new(0.0, 5.0),
    ]);
    let leaning = skewed(&points.tri(), 4.0);
    assert_points_eq(
        &points.get_points_dumb(&leaning),
        &[
            Point::new(4.0, 0.0),
            Point::new(14.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
            Point::new(2.0, 5.0),
        ],
    );
}

#[test]
fn test_resize_and_restore_round_trips() {
    let original = vec![
        PathPt::move_to(3.0, 4.0),
        PathPt::cubic_bezier(
            Point::new(30.0, 8.0),
            Point::new(10.0, -6.0),
            Point::new(20.0, 20.0),
        ),
        PathPt::line_to(12.0, 25.0),
        PathPt::Close,
    ];
    let points = Points::from_path(original.clone());
    let reference = points.tri();

    let resized = scaled(&reference, Scale::new(1.5, 0.25), Point::new(-4.0, 9.0));
    let placed = Points::from_path(points.get_points(&resized));
    assert!(placed.tri().approx_eq(&resized, 1e-9));

    let restored = placed.get_points(&reference);
    for (r, o) in restored.iter().zip(&original) {
        assert!(r.approx_eq(o, 1e-9), "{:?} != {:?}", r, o);
    }
}

#[test]
fn test_arc_follows_frame() {
    let points = Points::from_path(vec![
        PathPt::move_to(0.0, 0.0),
        PathPt::arc_to(Radii::new(5.0, 5.0), 0.0, false, true, Point::new(10.0, 10.0)),
    ]);
    let target = rotated(
        &scaled(&points.tri(), Scale::new(2.0, 1.0), Point::ORIGIN),
        FRAC_PI_2,
        Point::ORIGIN,
    );
    match points.get_points(&target)[1] {
        PathPt::ArcTo {
            p,
            radii,
            axis_rotation,
            large_arc,
            sweep,
        } => {
            assert!(p.approx_eq(&target.p3(), EPS));
            assert!((radii.x - 10.0).abs() < EPS);
            assert!((radii.y - 5.0).abs() < EPS);
            assert!((axis_rotation - FRAC_PI_2).abs() < EPS);
            assert!(!large_arc);
            assert!(sweep);
        }
        ref other => panic!("expected arc, got {:?}", other),
    }
}

#[test]
fn test_degenerate_targets_stay_finite() {
    let points = Points::from(vec![
        Point::new(1.0, 1.0),
        Point::new(9.0, 3.0),
        Point::new(4.0, 8.0),
    ]);
    let flat = Tri::new(Point::ORIGIN, Point::new(10.0, 0.0), Point::ORIGIN);
    let targets = [Tri::default(), flat, skewed(&flat, 5.0)];
    for target in &targets {
        for p in points.get_points_dumb(target) {
            assert!(p.is_finite(), "non-finite point for {}", target);
        }
    }
}

#[test]
fn test_single_point_path() {
    let mut points = Points::new();
    points.append(PathPt::move_to(4.0, 4.0));
    assert!(points.tri().is_degenerate());
    let target = Tri::from_angle(Point::new(10.0, 10.0), 0.0, 5.0, 5.0);
    for p in points.get_points_dumb(&target) {
        assert!(p.is_finite());
    }
}

#[test]
fn test_failed_edits_leave_path_alone() {
    let mut points = Points::from(vec![Point::new(0.0, 0.0), Point::new(6.0, 6.0)]);
    let before = points.raw_points().to_vec();
    let tri = points.tri();

    assert_eq!(
        points.remove_point(&tri, 2),
        Err(PathError::IndexOutOfRange { index: 2, len: 2 })
    );
    assert!(points.set_point(&tri, Point::new(1.0, 1.0), 9).is_err());
    assert!(points.insert_point(&tri, Point::new(1.0, 1.0), 3).is_err());
    assert_eq!(points.raw_points(), before.as_slice());

    let mut empty = Points::new();
    assert_eq!(empty.adjust_back(Point::ORIGIN), Err(PathError::Empty));
    assert_eq!(empty.pop_back(), None);
}

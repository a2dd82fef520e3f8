//! Unit tests for geometry: corner derivation, proximity and containment.

use crate::helpers::rect;
use annoboard::geometry::{bounds, contains, corner_points, is_near};
use annoboard::input::resize::resized;
use annoboard::{Coordinate, Corner, Rectangle};

fn orderings(r: Rectangle) -> [Rectangle; 4] {
    let Rectangle { c0, c1 } = r;
    [
        r,
        r.swapped(),
        Rectangle::from_points(c1.x, c0.y, c0.x, c1.y),
        Rectangle::from_points(c0.x, c1.y, c1.x, c0.y),
    ]
}

fn sample_points() -> impl Iterator<Item = Coordinate> {
    (-2..=14).flat_map(|i| (-2..=14).map(move |j| Coordinate::new(i as f32 * 10.0, j as f32 * 10.0)))
}

#[test]
fn test_contains_ignores_corner_order() {
    let base = rect(20.0, 30.0, 110.0, 90.0);
    for p in sample_points() {
        let expected = contains(p, &base);
        for r in orderings(base) {
            assert_eq!(contains(p, &r), expected, "point {p:?} rect {r:?}");
        }
    }
}

#[test]
fn test_contains_includes_edges() {
    let r = rect(100.0, 100.0, 0.0, 0.0);
    assert!(contains(Coordinate::new(0.0, 0.0), &r));
    assert!(contains(Coordinate::new(100.0, 50.0), &r));
    assert!(!contains(Coordinate::new(100.5, 50.0), &r));
    assert!(!contains(Coordinate::new(50.0, -0.5), &r));
}

#[test]
fn test_corner_points_span_bounding_box() {
    for r in orderings(rect(5.0, 15.0, 65.0, 45.0)) {
        let points = corner_points(&r);
        let (min_x, min_y, max_x, max_y) = bounds(&r);

        assert_eq!(points[0], r.c0);
        assert_eq!(points[1], Coordinate::new(r.c1.x, r.c0.y));
        assert_eq!(points[2], r.c1);
        assert_eq!(points[3], Coordinate::new(r.c0.x, r.c1.y));

        for x in [min_x, max_x] {
            for y in [min_y, max_y] {
                assert!(points.contains(&Coordinate::new(x, y)), "{x},{y} missing for {r:?}");
            }
        }
    }
}

#[test]
fn test_is_near_is_strict_per_axis() {
    let origin = Coordinate::new(0.0, 0.0);
    assert!(is_near(origin, Coordinate::new(9.9, -9.9), 10.0));
    assert!(!is_near(origin, Coordinate::new(10.0, 0.0), 10.0));
    assert!(!is_near(origin, Coordinate::new(0.0, -10.0), 10.0));
    // Diagonal outside the circle but inside the square still counts
    assert!(is_near(origin, Coordinate::new(9.0, 9.0), 10.0));
}

#[test]
fn test_resize_corner_one_toward_top_right() {
    let result = resized(rect(0.0, 0.0, 100.0, 100.0), Corner::P1, Coordinate::new(150.0, 20.0));
    assert_eq!(result, rect(0.0, 20.0, 150.0, 100.0));
}

#[test]
fn test_resize_past_opposite_corner_inverts() {
    let result = resized(rect(0.0, 0.0, 100.0, 100.0), Corner::P0, Coordinate::new(140.0, 130.0));
    assert_eq!(result, rect(140.0, 130.0, 100.0, 100.0));
    assert_eq!(bounds(&result), (100.0, 100.0, 140.0, 130.0));
}

//! # Ring Guard Tests

use super::*;

fn outer() -> Ring {
    Ring::from_xy(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)])
}

#[test]
fn test_collinear_overlap() {
    let a0 = DVec2::new(0.0, 0.0);
    let a1 = DVec2::new(4.0, 0.0);
    assert!(segments_intersect(a0, a1, DVec2::new(2.0, 0.0), DVec2::new(6.0, 0.0)));
    assert!(!segments_intersect(a0, a1, DVec2::new(5.0, 0.0), DVec2::new(6.0, 0.0)));
}

#[test]
fn test_t_junction() {
    assert!(segments_intersect(
        DVec2::new(0.0, 0.0),
        DVec2::new(4.0, 0.0),
        DVec2::new(2.0, 0.0),
        DVec2::new(2.0, 3.0),
    ));
}

#[test]
fn test_parallel_segments() {
    assert!(!segments_intersect(
        DVec2::new(0.0, 0.0),
        DVec2::new(4.0, 0.0),
        DVec2::new(0.0, 1.0),
        DVec2::new(4.0, 1.0),
    ));
}

#[test]
fn test_nested_hole_does_not_intersect() {
    let hole = Ring::from_xy(&[(3.0, 3.0), (3.0, 7.0), (7.0, 7.0), (7.0, 3.0)]);
    assert!(!rings_intersect(&outer(), &hole));
    let polygon = Polygon::with_holes(outer(), vec![hole]);
    assert_eq!(find_intersecting_rings(&polygon), None);
}

#[test]
fn test_hole_touching_exterior_at_vertex() {
    let hole = Ring::from_xy(&[(0.0, 0.0), (3.0, 1.0), (1.0, 3.0)]);
    assert!(rings_intersect(&outer(), &hole));
}

#[test]
fn test_hole_touching_exterior_edge() {
    // Hole vertex lies in the middle of the exterior's bottom edge
    let hole = Ring::from_xy(&[(5.0, 0.0), (7.0, 2.0), (3.0, 2.0)]);
    assert!(rings_intersect(&outer(), &hole));
}

#[test]
fn test_hole_crossing_exterior() {
    let hole = Ring::from_xy(&[(8.0, 4.0), (12.0, 4.0), (12.0, 6.0), (8.0, 6.0)]);
    assert!(rings_intersect(&outer(), &hole));
}

#[test]
fn test_holes_touching_each_other() {
    let hole_a = Ring::from_xy(&[(2.0, 2.0), (5.0, 2.0), (5.0, 5.0), (2.0, 5.0)]);
    let hole_b = Ring::from_xy(&[(5.0, 5.0), (8.0, 5.0), (8.0, 8.0), (5.0, 8.0)]);
    let polygon = Polygon::with_holes(outer(), vec![hole_a, hole_b]);

    assert_eq!(
        find_intersecting_rings(&polygon),
        Some(RingIntersection {
            first: 1,
            second: 2
        })
    );
}

#[test]
fn test_separate_holes_are_accepted() {
    let hole_a = Ring::from_xy(&[(1.0, 1.0), (3.0, 1.0), (3.0, 3.0), (1.0, 3.0)]);
    let hole_b = Ring::from_xy(&[(6.0, 6.0), (8.0, 6.0), (8.0, 8.0), (6.0, 8.0)]);
    let polygon = Polygon::with_holes(outer(), vec![hole_a, hole_b]);
    assert_eq!(find_intersecting_rings(&polygon), None);
}

#[test]
fn test_polygon_without_holes_is_never_checked() {
    let polygon = Polygon::new(outer());
    assert_eq!(find_intersecting_rings(&polygon), None);
}

#[test]
fn test_disjoint_boxes_short_circuit() {
    let far = Ring::from_xy(&[(100.0, 100.0), (101.0, 100.0), (100.0, 101.0)]);
    assert!(!rings_intersect(&outer(), &far));
}

#[test]
fn test_single_point_ring_on_boundary() {
    let dot = Ring::from_xy(&[(10.0, 5.0)]);
    assert!(rings_intersect(&outer(), &dot));
    let inside = Ring::from_xy(&[(5.0, 5.0)]);
    assert!(!rings_intersect(&outer(), &inside));
}

#[test]
fn test_empty_ring_never_intersects() {
    assert!(!rings_intersect(&outer(), &Ring::default()));
}

//! # Ring Intersection Guard
//!
//! Detects polygons whose rings touch or cross each other.
//!
//! Such polygons can be perfectly valid (a hole touching the exterior at one
//! vertex, for example) but the roof triangulator cannot handle shared or
//! crossing boundaries, so the tessellator skips them.
//!
//! ## Algorithm
//!
//! Rings are treated as closed polylines, not areas: a hole lying strictly
//! inside the exterior does not intersect it. For each pair of rings the
//! bounding boxes are compared first, then every edge of one ring is tested
//! against every edge of the other with exact orientation predicates.
//! Touching at a single point counts as an intersection.

#[cfg(test)]
mod tests;

use crate::geometry::{Polygon, Ring};
use glam::DVec2;
use robust::{orient2d, Coord};

/// The first pair of rings found to intersect.
///
/// Ring index 0 is the exterior ring; `k + 1` is the k-th hole.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RingIntersection {
    /// Lower ring index
    pub first: usize,
    /// Higher ring index
    pub second: usize,
}

#[inline]
fn coord(p: DVec2) -> Coord<f64> {
    Coord { x: p.x, y: p.y }
}

#[inline]
fn orient(a: DVec2, b: DVec2, c: DVec2) -> f64 {
    orient2d(coord(a), coord(b), coord(c))
}

/// True if `r` lies within the bounding box of segment `p`-`q`.
/// Only meaningful when the three points are collinear.
#[inline]
fn within_span(p: DVec2, q: DVec2, r: DVec2) -> bool {
    r.x >= p.x.min(q.x) && r.x <= p.x.max(q.x) && r.y >= p.y.min(q.y) && r.y <= p.y.max(q.y)
}

/// Tests whether two closed segments share at least one point.
///
/// # Example
///
/// ```rust
/// use glam::DVec2;
/// use polygon_tessellator::ops::intersect::segments_intersect;
///
/// // Crossing
/// assert!(segments_intersect(DVec2::ZERO, DVec2::ONE, DVec2::Y, DVec2::X));
/// // Touching at an endpoint
/// assert!(segments_intersect(DVec2::ZERO, DVec2::X, DVec2::X, DVec2::ONE));
/// // Disjoint
/// assert!(!segments_intersect(DVec2::ZERO, DVec2::X, DVec2::Y, DVec2::ONE));
/// ```
pub fn segments_intersect(a0: DVec2, a1: DVec2, b0: DVec2, b1: DVec2) -> bool {
    let d1 = orient(b0, b1, a0);
    let d2 = orient(b0, b1, a1);
    let d3 = orient(a0, a1, b0);
    let d4 = orient(a0, a1, b1);

    if ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0))
        && ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0))
    {
        return true;
    }

    (d1 == 0.0 && within_span(b0, b1, a0))
        || (d2 == 0.0 && within_span(b0, b1, a1))
        || (d3 == 0.0 && within_span(a0, a1, b0))
        || (d4 == 0.0 && within_span(a0, a1, b1))
}

/// Segments of a ring as polyline pieces.
///
/// A single-point ring yields one zero-length segment so that it still
/// registers when it lies on another ring.
fn segments(ring: &Ring) -> Vec<(DVec2, DVec2)> {
    match ring.len() {
        0 => Vec::new(),
        1 => {
            let p = ring.points()[0].truncate();
            vec![(p, p)]
        }
        _ => ring
            .edges()
            .map(|(a, b)| (a.truncate(), b.truncate()))
            .collect(),
    }
}

fn boxes_overlap(a: (DVec2, DVec2), b: (DVec2, DVec2)) -> bool {
    a.0.x <= b.1.x && b.0.x <= a.1.x && a.0.y <= b.1.y && b.0.y <= a.1.y
}

/// Tests whether the boundaries of two rings share at least one point.
pub fn rings_intersect(a: &Ring, b: &Ring) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    if !boxes_overlap(a.bounding_box(), b.bounding_box()) {
        return false;
    }

    let segs_b = segments(b);
    segments(a).iter().any(|&(a0, a1)| {
        segs_b
            .iter()
            .any(|&(b0, b1)| segments_intersect(a0, a1, b0, b1))
    })
}

/// Finds the first pair of intersecting rings in a polygon.
///
/// Pairs are visited in order `(0, 1), (0, 2), ..., (1, 2), ...`.
/// Polygons without holes never report an intersection.
///
/// # Example
///
/// ```rust
/// use polygon_tessellator::{ops::find_intersecting_rings, Polygon, Ring};
///
/// let outer = Ring::from_xy(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]);
/// // Hole touching the exterior at (4, 4)
/// let hole = Ring::from_xy(&[(2.0, 2.0), (4.0, 4.0), (2.0, 3.0)]);
/// let polygon = Polygon::with_holes(outer, vec![hole]);
///
/// let hit = find_intersecting_rings(&polygon).unwrap();
/// assert_eq!((hit.first, hit.second), (0, 1));
/// ```
pub fn find_intersecting_rings(polygon: &Polygon) -> Option<RingIntersection> {
    if polygon.num_interior_rings() == 0 {
        return None;
    }

    let rings: Vec<&Ring> = polygon.rings().collect();
    for i in 0..rings.len() {
        for j in (i + 1)..rings.len() {
            if rings_intersect(rings[i], rings[j]) {
                return Some(RingIntersection {
                    first: i,
                    second: j,
                });
            }
        }
    }
    None
}

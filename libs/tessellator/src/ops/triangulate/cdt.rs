//! Lawson edge-flip legalization over a constrained triangulation.

use crate::error::TessellationError;
use config::constants::MIN_FLIP_BUDGET;
use glam::DVec2;
use robust::{incircle, orient2d, Coord};
use std::collections::{HashMap, HashSet};

type Edge = (usize, usize);

#[inline]
fn coord(p: DVec2) -> Coord<f64> {
    Coord { x: p.x, y: p.y }
}

#[inline]
fn orient(points: &[DVec2], a: usize, b: usize, c: usize) -> f64 {
    orient2d(coord(points[a]), coord(points[b]), coord(points[c]))
}

#[inline]
fn undirected(a: usize, b: usize) -> Edge {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Reorders a triangle so its corners wind counter-clockwise.
/// Degenerate (zero-area) triangles are returned unchanged.
pub(super) fn counter_clockwise(points: &[DVec2], t: [usize; 3]) -> [usize; 3] {
    if orient(points, t[0], t[1], t[2]) < 0.0 {
        [t[0], t[2], t[1]]
    } else {
        t
    }
}

/// Collects every ring edge, closing edges included, as undirected pairs.
pub(super) fn ring_constraints(ranges: &[(usize, usize)]) -> HashSet<Edge> {
    let mut constraints = HashSet::new();
    for &(start, end) in ranges {
        let n = end - start;
        for i in 0..n {
            constraints.insert(undirected(start + i, start + (i + 1) % n));
        }
    }
    constraints
}

/// The corner of `t` opposite the directed edge `a -> b`.
fn opposite(t: [usize; 3], a: usize, b: usize) -> Option<usize> {
    (0..3)
        .find(|&k| t[k] == a && t[(k + 1) % 3] == b)
        .map(|k| t[(k + 2) % 3])
}

/// Flips non-constraint edges until every one is locally Delaunay.
///
/// Degenerate triangles take no part in flipping. Returns the number of
/// flips performed.
pub(super) fn legalize(
    points: &[DVec2],
    triangles: &mut [[usize; 3]],
    constraints: &HashSet<Edge>,
) -> Result<usize, TessellationError> {
    // directed edge -> owning triangle
    let mut owner: HashMap<Edge, usize> = HashMap::with_capacity(triangles.len() * 3);
    // Stack order follows triangle order so results are reproducible.
    let mut pending: Vec<Edge> = Vec::with_capacity(triangles.len() * 3);

    for (ti, t) in triangles.iter().enumerate() {
        if orient(points, t[0], t[1], t[2]) <= 0.0 {
            continue;
        }
        for k in 0..3 {
            let edge = (t[k], t[(k + 1) % 3]);
            owner.insert(edge, ti);
            if edge.0 < edge.1 && !constraints.contains(&edge) {
                pending.push(edge);
            }
        }
    }

    let budget = (triangles.len() * triangles.len()).max(MIN_FLIP_BUDGET);
    let mut flips = 0usize;

    while let Some((a, b)) = pending.pop() {
        if constraints.contains(&undirected(a, b)) {
            continue;
        }
        let (Some(&t1), Some(&t2)) = (owner.get(&(a, b)), owner.get(&(b, a))) else {
            continue;
        };
        let (Some(c), Some(d)) = (opposite(triangles[t1], a, b), opposite(triangles[t2], b, a)) else {
            continue;
        };

        // d strictly inside the circumcircle of the counter-clockwise a, b, c
        if incircle(coord(points[a]), coord(points[b]), coord(points[c]), coord(points[d])) <= 0.0 {
            continue;
        }
        // Both replacement triangles must stay properly oriented
        if orient(points, a, d, c) <= 0.0 || orient(points, d, b, c) <= 0.0 {
            continue;
        }

        flips += 1;
        if flips > budget {
            return Err(TessellationError::triangulation_failed(format!(
                "edge legalization did not settle after {budget} flips"
            )));
        }

        triangles[t1] = [a, d, c];
        triangles[t2] = [d, b, c];

        owner.remove(&(a, b));
        owner.remove(&(b, a));
        owner.insert((a, d), t1);
        owner.insert((d, c), t1);
        owner.insert((c, a), t1);
        owner.insert((d, b), t2);
        owner.insert((b, c), t2);
        owner.insert((c, d), t2);

        pending.extend([(a, d), (d, b), (b, c), (c, a)]);
    }

    Ok(flips)
}

//! # Roof Triangulation
//!
//! Constrained Delaunay triangulation of a polygon with holes.
//!
//! ## Algorithm
//!
//! 1. Flatten the exterior and hole rings into one vertex table
//!    (exterior first, then each hole in order)
//! 2. Seed a valid triangulation with ear clipping (`earcutr`)
//! 3. Legalize it with Lawson edge flips: any interior edge whose opposite
//!    vertex lies strictly inside the neighbouring circumcircle is flipped,
//!    unless the edge belongs to a ring (a constraint)
//!
//! The fixed point of step 3 is the constrained Delaunay triangulation of
//! the region bounded by the rings.
//!
//! ## Failure
//!
//! Rings with fewer than three points and inputs the ear clipper cannot
//! handle are reported as [`TessellationError`]; nothing is repaired.

mod cdt;


use crate::error::TessellationError;
use config::constants::MIN_RING_POINTS;
use glam::DVec2;

/// Result of triangulating one polygon.
///
/// Triangle corners index into the flattened vertex table: the exterior ring
/// points first, followed by each hole's points.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Triangulation {
    /// Triangles as vertex index triples, counter-clockwise
    pub triangles: Vec<[usize; 3]>,
    /// Number of edge flips applied while legalizing
    pub flips: usize,
}

impl Triangulation {
    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Iterates over every triangle corner in emission order.
    pub fn corners(&self) -> impl Iterator<Item = usize> + '_ {
        self.triangles.iter().flat_map(|t| t.iter().copied())
    }
}

/// Triangulates the region inside `outer` and outside every hole.
///
/// Rings are open polylines (no repeated closing point).
///
/// # Example
///
/// ```rust
/// use glam::DVec2;
/// use polygon_tessellator::ops::triangulate;
///
/// let square = [DVec2::ZERO, DVec2::X, DVec2::ONE, DVec2::Y];
/// let result = triangulate(&square, &[]).unwrap();
/// assert_eq!(result.triangle_count(), 2);
/// ```
pub fn triangulate(outer: &[DVec2], holes: &[Vec<DVec2>]) -> Result<Triangulation, TessellationError> {
    if outer.len() < MIN_RING_POINTS {
        return Err(TessellationError::too_few_vertices(0, outer.len()));
    }
    for (i, hole) in holes.iter().enumerate() {
        if hole.len() < MIN_RING_POINTS {
            return Err(TessellationError::too_few_vertices(i + 1, hole.len()));
        }
    }

    let total = outer.len() + holes.iter().map(Vec::len).sum::<usize>();
    let mut points: Vec<DVec2> = Vec::with_capacity(total);
    let mut coords: Vec<f64> = Vec::with_capacity(total * 2);
    let mut hole_starts: Vec<usize> = Vec::with_capacity(holes.len());
    let mut ring_ranges: Vec<(usize, usize)> = Vec::with_capacity(holes.len() + 1);

    append_ring(outer, &mut points, &mut coords, &mut ring_ranges);
    for hole in holes {
        hole_starts.push(points.len());
        append_ring(hole, &mut points, &mut coords, &mut ring_ranges);
    }

    let indices = earcutr::earcut(&coords, &hole_starts, 2)
        .map_err(|e| TessellationError::triangulation_failed(format!("earcut error: {e:?}")))?;

    if indices.is_empty() || indices.len() % 3 != 0 {
        return Err(TessellationError::triangulation_failed(format!(
            "ear clipping returned {} indices for {} points",
            indices.len(),
            total
        )));
    }

    let mut triangles: Vec<[usize; 3]> = indices
        .chunks_exact(3)
        .map(|t| cdt::counter_clockwise(&points, [t[0], t[1], t[2]]))
        .collect();

    let constraints = cdt::ring_constraints(&ring_ranges);
    let flips = cdt::legalize(&points, &mut triangles, &constraints)?;

    Ok(Triangulation { triangles, flips })
}

fn append_ring(
    ring: &[DVec2],
    points: &mut Vec<DVec2>,
    coords: &mut Vec<f64>,
    ranges: &mut Vec<(usize, usize)>,
) {
    let start = points.len();
    for p in ring {
        points.push(*p);
        coords.push(p.x);
        coords.push(p.y);
    }
    ranges.push((start, points.len()));
}

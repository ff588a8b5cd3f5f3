//! # Polygon Geometry
//!
//! Input types for the tessellator: closed rings of 3D points and polygons
//! made of one exterior ring plus any number of holes.
//!
//! A ring never stores its closing point and never holds two identical
//! consecutive points; both are removed when the ring is built.


use glam::{DVec2, DVec3};

/// Returns true if two ring points are the same point.
///
/// X and Y must match exactly. Z matches when equal or when both are unset (NaN).
#[inline]
pub(crate) fn same_point(a: DVec3, b: DVec3) -> bool {
    a.x == b.x && a.y == b.y && (a.z == b.z || (a.z.is_nan() && b.z.is_nan()))
}

/// Height of a point, with an unset (NaN) z read as zero.
#[inline]
pub fn height_or_zero(z: f64) -> f32 {
    if z.is_nan() {
        0.0
    } else {
        z as f32
    }
}

/// A closed polygon boundary.
///
/// The first point is implicitly connected to the last one.
///
/// # Example
///
/// ```rust
/// use polygon_tessellator::Ring;
///
/// // The explicit closing point is dropped.
/// let ring = Ring::from_xy(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 0.0)]);
/// assert_eq!(ring.len(), 3);
/// assert_eq!(ring.edge_count(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Ring {
    points: Vec<DVec3>,
}

impl Ring {
    /// Builds a ring, dropping consecutive duplicates and the closing point.
    pub fn new(points: impl IntoIterator<Item = DVec3>) -> Self {
        let mut deduped: Vec<DVec3> = Vec::new();
        for p in points {
            match deduped.last() {
                Some(&prev) if same_point(prev, p) => {}
                _ => deduped.push(p),
            }
        }

        while deduped.len() > 1 && same_point(deduped[0], deduped[deduped.len() - 1]) {
            deduped.pop();
        }

        Self { points: deduped }
    }

    /// Builds a ring from 2D coordinates. Heights are left unset.
    pub fn from_xy(coords: &[(f64, f64)]) -> Self {
        Self::new(coords.iter().map(|&(x, y)| DVec3::new(x, y, f64::NAN)))
    }

    /// Builds a ring from 3D coordinates.
    pub fn from_xyz(coords: &[(f64, f64, f64)]) -> Self {
        Self::new(coords.iter().map(|&(x, y, z)| DVec3::new(x, y, z)))
    }

    /// Returns the distinct points of the ring.
    #[inline]
    pub fn points(&self) -> &[DVec3] {
        &self.points
    }

    /// Returns the number of distinct points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the ring has no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of boundary edges, counting the closing edge.
    pub fn edge_count(&self) -> usize {
        if self.points.len() < 2 {
            0
        } else {
            self.points.len()
        }
    }

    /// Iterates over the boundary edges as `(start, end)`, closing edge last.
    pub fn edges(&self) -> impl Iterator<Item = (DVec3, DVec3)> + '_ {
        let n = self.edge_count();
        (0..n).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }

    /// Computes the 2D axis-aligned bounding box as (min, max).
    pub fn bounding_box(&self) -> (DVec2, DVec2) {
        if self.points.is_empty() {
            return (DVec2::ZERO, DVec2::ZERO);
        }

        let mut min = self.points[0].truncate();
        let mut max = min;
        for p in &self.points[1..] {
            min = min.min(p.truncate());
            max = max.max(p.truncate());
        }
        (min, max)
    }

    /// Translates the ring in the XY plane.
    pub fn translate(&mut self, offset: DVec2) {
        for p in &mut self.points {
            p.x += offset.x;
            p.y += offset.y;
        }
    }
}

/// A polygon with one exterior ring and zero or more holes.
///
/// Holes are assumed to lie inside the exterior and not to cross each other;
/// the tessellator only checks that no two rings intersect.
///
/// # Example
///
/// ```rust
/// use polygon_tessellator::{Polygon, Ring};
///
/// let outer = Ring::from_xy(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
/// let hole = Ring::from_xy(&[(3.0, 3.0), (3.0, 7.0), (7.0, 7.0), (7.0, 3.0)]);
/// let polygon = Polygon::with_holes(outer, vec![hole]);
/// assert_eq!(polygon.num_interior_rings(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    exterior: Ring,
    interiors: Vec<Ring>,
}

impl Polygon {
    /// Creates a polygon without holes.
    pub fn new(exterior: Ring) -> Self {
        Self {
            exterior,
            interiors: Vec::new(),
        }
    }

    /// Creates a polygon with holes.
    pub fn with_holes(exterior: Ring, interiors: Vec<Ring>) -> Self {
        Self {
            exterior,
            interiors,
        }
    }

    /// Appends a hole.
    pub fn add_interior_ring(&mut self, ring: Ring) {
        self.interiors.push(ring);
    }

    /// Returns the exterior ring.
    #[inline]
    pub fn exterior_ring(&self) -> &Ring {
        &self.exterior
    }

    /// Returns the holes.
    #[inline]
    pub fn interior_rings(&self) -> &[Ring] {
        &self.interiors
    }

    /// Returns the hole at `index`, if any.
    pub fn interior_ring(&self, index: usize) -> Option<&Ring> {
        self.interiors.get(index)
    }

    /// Returns the number of holes.
    #[inline]
    pub fn num_interior_rings(&self) -> usize {
        self.interiors.len()
    }

    /// Iterates over all rings, exterior first.
    pub fn rings(&self) -> impl Iterator<Item = &Ring> {
        std::iter::once(&self.exterior).chain(self.interiors.iter())
    }

    /// Total number of boundary edges over all rings.
    pub fn edge_count(&self) -> usize {
        self.rings().map(Ring::edge_count).sum()
    }

    /// Translates every ring in the XY plane.
    ///
    /// # Example
    ///
    /// ```rust
    /// use glam::DVec2;
    /// use polygon_tessellator::{Polygon, Ring};
    ///
    /// let mut polygon = Polygon::new(Ring::from_xy(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]));
    /// polygon.translate(DVec2::new(10.0, 0.0));
    /// assert_eq!(polygon.exterior_ring().points()[0].x, 10.0);
    /// ```
    pub fn translate(&mut self, offset: DVec2) {
        self.exterior.translate(offset);
        for hole in &mut self.interiors {
            hole.translate(offset);
        }
    }
}

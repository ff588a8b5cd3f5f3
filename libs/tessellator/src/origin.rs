//! # Coordinate Origin
//!
//! Rebases absolute polygon coordinates onto the tessellator's local origin.
//!
//! Projected coordinates are often in the millions; triangulating them as-is
//! and storing them as `f32` loses most of their precision. Every point is
//! shifted by the same fixed origin before any numeric use.

use crate::geometry::{height_or_zero, Ring};
use glam::{DVec2, DVec3};

/// The fixed (x, y) offset subtracted from every input point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Origin {
    x: f64,
    y: f64,
}

/// A ring point after rebasing, with its resolved height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalVertex {
    /// Position relative to the origin
    pub position: DVec2,
    /// Height of the source point (0 when unset)
    pub height: f32,
}

impl Origin {
    /// Creates an origin.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the origin X coordinate.
    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Returns the origin Y coordinate.
    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Rebases an absolute point into local XY coordinates.
    ///
    /// # Example
    ///
    /// ```rust
    /// use glam::{DVec2, DVec3};
    /// use polygon_tessellator::Origin;
    ///
    /// let origin = Origin::new(500_000.0, 4_000_000.0);
    /// let local = origin.rebase(DVec3::new(500_010.0, 4_000_020.0, 0.0));
    /// assert_eq!(local, DVec2::new(10.0, 20.0));
    /// ```
    #[inline]
    pub fn rebase(&self, point: DVec3) -> DVec2 {
        DVec2::new(point.x - self.x, point.y - self.y)
    }

    /// Rebases every point of a ring, resolving unset heights to zero.
    pub fn localize(&self, ring: &Ring) -> Vec<LocalVertex> {
        ring.points()
            .iter()
            .map(|&p| LocalVertex {
                position: self.rebase(p),
                height: height_or_zero(p.z),
            })
            .collect()
    }
}

impl Default for Origin {
    fn default() -> Self {
        let (x, y) = config::constants::DEFAULT_ORIGIN;
        Self::new(x, y)
    }
}

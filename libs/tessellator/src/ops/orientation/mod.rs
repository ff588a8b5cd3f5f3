//! # Ring Orientation
//!
//! Classifies a ring as clockwise or counter-clockwise from the sign of its
//! shoelace sum, in a y-up coordinate system.
//!
//! A ring with zero signed area (collinear or fewer than three points) is
//! classified as clockwise.


use glam::DVec2;

/// Winding direction of a ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Signed area <= 0
    Clockwise,
    /// Signed area > 0
    CounterClockwise,
}

impl Orientation {
    /// Returns the opposite winding.
    #[inline]
    pub fn reversed(self) -> Self {
        match self {
            Orientation::Clockwise => Orientation::CounterClockwise,
            Orientation::CounterClockwise => Orientation::Clockwise,
        }
    }
}

/// Twice the signed area of a closed ring.
///
/// Sums `prev.x * cur.y - prev.y * cur.x` over every edge, including the
/// closing edge from the last point back to the first.
///
/// # Example
///
/// ```rust
/// use glam::DVec2;
/// use polygon_tessellator::ops::signed_area_doubled;
///
/// let square = [DVec2::ZERO, DVec2::X, DVec2::ONE, DVec2::Y];
/// assert_eq!(signed_area_doubled(&square), 2.0);
/// ```
pub fn signed_area_doubled(points: &[DVec2]) -> f64 {
    let Some(&last) = points.last() else {
        return 0.0;
    };

    let mut prev = last;
    let mut sum = 0.0;
    for &p in points {
        sum += prev.x * p.y - prev.y * p.x;
        prev = p;
    }
    sum
}

/// Classifies the winding of a ring.
pub fn orientation(points: &[DVec2]) -> Orientation {
    if signed_area_doubled(points) > 0.0 {
        Orientation::CounterClockwise
    } else {
        Orientation::Clockwise
    }
}

/// Returns true if the ring winds counter-clockwise.
///
/// # Example
///
/// ```rust
/// use glam::DVec2;
/// use polygon_tessellator::ops::is_counter_clockwise;
///
/// let ccw = [DVec2::ZERO, DVec2::X, DVec2::Y];
/// let cw = [DVec2::ZERO, DVec2::Y, DVec2::X];
/// assert!(is_counter_clockwise(&ccw));
/// assert!(!is_counter_clockwise(&cw));
/// ```
#[inline]
pub fn is_counter_clockwise(points: &[DVec2]) -> bool {
    orientation(points) == Orientation::CounterClockwise
}

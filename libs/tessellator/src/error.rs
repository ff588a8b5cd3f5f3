//! # Tessellation Errors
//!
//! Error types for polygon tessellation.
//!
//! Only failures the tessellator cannot recover from are errors. A polygon
//! whose rings intersect is not an error: it is reported as
//! [`PolygonOutcome::Rejected`](crate::PolygonOutcome::Rejected).

use config::constants::ConfigError;
use thiserror::Error;

/// Errors that can occur while tessellating a polygon.
#[derive(Debug, Error)]
pub enum TessellationError {
    /// A ring has fewer distinct points than a triangle needs.
    ///
    /// `ring` is 0 for the exterior ring and `k + 1` for the k-th hole.
    #[error("Ring {ring} has too few distinct points: {count} (minimum {min} required)")]
    TooFewVertices {
        /// Ring index within the polygon
        ring: usize,
        /// Number of distinct points found
        count: usize,
        /// Minimum number of points required
        min: usize,
    },

    /// The triangulation backend failed on its input.
    #[error("Triangulation failed: {message}")]
    TriangulationFailed {
        /// Backend diagnostic
        message: String,
    },

    /// Invalid tessellator configuration
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

impl TessellationError {
    /// Creates a too-few-vertices error for the given ring.
    pub fn too_few_vertices(ring: usize, count: usize) -> Self {
        Self::TooFewVertices {
            ring,
            count,
            min: config::constants::MIN_RING_POINTS,
        }
    }

    /// Creates a triangulation failed error.
    pub fn triangulation_failed(message: impl Into<String>) -> Self {
        Self::TriangulationFailed {
            message: message.into(),
        }
    }
}

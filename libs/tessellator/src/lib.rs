//! # Polygon Tessellator
//!
//! Converts 2D/2.5D polygons with holes into a flat triangle vertex stream
//! for GPU rendering, optionally extruding them into solids with walls.
//!
//! ## Architecture
//!
//! ```text
//! Polygon (exterior + holes, absolute coordinates)
//!       ↓
//! Ring guard (touching / crossing rings → rejected)
//!       ↓
//! Origin rebase (local f64 coordinates, NaN heights → 0)
//!       ↓
//! Roof: constrained Delaunay triangulation
//!       ↓
//! Walls: one vertical quad per ring edge (extrusion ≠ 0)
//!       ↓
//! Vec<f32> of [x, height, -y (, nx, ny, nz)] records
//! ```
//!
//! ## Algorithms
//!
//! - **Ring guard**: exact segment intersection tests (`robust`)
//! - **Triangulation**: ear clipping seed (`earcutr`) + constrained Lawson flips
//! - **Orientation**: shoelace signed area
//!
//! ## Usage
//!
//! ```rust
//! use polygon_tessellator::{Polygon, Ring, Tessellator};
//!
//! let mut tess = Tessellator::new(500_000.0, 4_000_000.0, true);
//! let footprint = Ring::from_xy(&[
//!     (500_000.0, 4_000_000.0),
//!     (500_010.0, 4_000_000.0),
//!     (500_010.0, 4_000_008.0),
//!     (500_000.0, 4_000_008.0),
//! ]);
//! tess.add_polygon(&Polygon::new(footprint), 12.0)?;
//!
//! // 2 roof triangles + 4 walls of 2 triangles each
//! assert_eq!(tess.vertex_count(), 6 + 4 * 6);
//! assert_eq!(tess.data().len(), tess.vertex_count() * tess.stride() / 4);
//! # Ok::<(), polygon_tessellator::TessellationError>(())
//! ```

pub mod buffer;
pub mod error;
pub mod geometry;
pub mod ops;
pub mod origin;
pub mod tessellator;

pub use buffer::VertexBuffer;
pub use config::constants::TessellatorConfig;
pub use error::TessellationError;
pub use geometry::{Polygon, Ring};
pub use ops::intersect::RingIntersection;
pub use ops::orientation::Orientation;
pub use origin::{LocalVertex, Origin};
pub use tessellator::{PolygonOutcome, Tessellator};

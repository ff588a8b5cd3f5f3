//! # Tessellator
//!
//! Accumulates roof and wall triangles of any number of polygons into one
//! vertex buffer, all relative to a single fixed origin.
//!
//! ## Per-polygon pipeline
//!
//! ```text
//! ring guard → origin rebase → CDT roof → walls (if extruded) → buffer
//! ```
//!
//! A polygon is either added completely or not at all: rejected polygons and
//! triangulation failures leave the buffer untouched.

use crate::buffer::VertexBuffer;
use crate::error::TessellationError;
use crate::geometry::Polygon;
use crate::ops::intersect::{find_intersecting_rings, RingIntersection};
use crate::ops::triangulate::triangulate;
use crate::ops::walls::{make_walls, RingRole};
use crate::origin::{LocalVertex, Origin};
use config::constants::TessellatorConfig;
use glam::DVec2;
use log::{debug, trace, warn};

/// What happened to a polygon passed to [`Tessellator::add_polygon`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolygonOutcome {
    /// Geometry was appended to the buffer.
    Tessellated {
        /// Vertices written for the roof
        roof_vertices: usize,
        /// Vertices written for the walls
        wall_vertices: usize,
    },
    /// Two rings intersect; nothing was appended.
    Rejected(RingIntersection),
}

impl PolygonOutcome {
    /// Returns true if the polygon was skipped.
    #[inline]
    pub fn is_rejected(&self) -> bool {
        matches!(self, PolygonOutcome::Rejected(_))
    }

    /// Total vertices appended for this polygon.
    pub fn vertex_count(&self) -> usize {
        match self {
            PolygonOutcome::Tessellated {
                roof_vertices,
                wall_vertices,
            } => roof_vertices + wall_vertices,
            PolygonOutcome::Rejected(_) => 0,
        }
    }
}

/// Polygon tessellator producing an interleaved triangle vertex stream.
///
/// # Example
///
/// ```rust
/// use polygon_tessellator::{Polygon, Ring, Tessellator};
///
/// let mut tess = Tessellator::new(0.0, 0.0, false);
/// let square = Ring::from_xy(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
/// tess.add_polygon(&Polygon::new(square), 0.0).unwrap();
///
/// assert_eq!(tess.vertex_count(), 6);
/// assert_eq!(tess.stride(), 12);
/// ```
#[derive(Debug, Clone)]
pub struct Tessellator {
    origin: Origin,
    buffer: VertexBuffer,
}

impl Tessellator {
    /// Creates a tessellator with a fixed origin and vertex layout.
    pub fn new(origin_x: f64, origin_y: f64, add_normals: bool) -> Self {
        Self {
            origin: Origin::new(origin_x, origin_y),
            buffer: VertexBuffer::new(add_normals),
        }
    }

    /// Creates a tessellator after validating the origin.
    ///
    /// # Errors
    ///
    /// Returns [`TessellationError::Config`] for a NaN or infinite origin.
    pub fn try_new(origin_x: f64, origin_y: f64, add_normals: bool) -> Result<Self, TessellationError> {
        let config = TessellatorConfig::new(origin_x, origin_y, add_normals)?;
        Ok(Self::from_config(config))
    }

    /// Creates a tessellator from a validated configuration.
    pub fn from_config(config: TessellatorConfig) -> Self {
        Self::new(config.origin_x, config.origin_y, config.add_normals)
    }

    /// Returns the origin subtracted from every input point.
    #[inline]
    pub fn origin(&self) -> Origin {
        self.origin
    }

    /// Returns true if vertex records carry normals.
    #[inline]
    pub fn add_normals(&self) -> bool {
        self.buffer.has_normals()
    }

    /// Bytes per vertex record: 12 without normals, 24 with.
    #[inline]
    pub fn stride(&self) -> usize {
        self.buffer.stride()
    }

    /// Returns the accumulated vertex data.
    #[inline]
    pub fn data(&self) -> &[f32] {
        self.buffer.data()
    }

    /// Returns the number of vertices written so far.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.buffer.vertex_count()
    }

    /// Returns true if no geometry was written.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Consumes the tessellator and returns the float data.
    pub fn into_data(self) -> Vec<f32> {
        self.buffer.into_inner()
    }

    /// Borrows the data as native-endian bytes for GPU upload.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.buffer.as_bytes()
    }

    /// Exports the data as little-endian bytes.
    pub fn to_le_bytes(&self) -> Vec<u8> {
        self.buffer.to_le_bytes()
    }

    /// Tessellates one polygon and appends its roof and walls.
    ///
    /// Roof vertices sit at `extrusion_height + z`. Walls are only emitted
    /// when `extrusion_height` is non-zero.
    ///
    /// # Returns
    ///
    /// [`PolygonOutcome::Rejected`] when two rings touch or cross; the
    /// buffer is unchanged in that case.
    ///
    /// # Errors
    ///
    /// Returns an error when the roof cannot be triangulated (too few
    /// points, zero area, inputs the triangulator rejects). The buffer is
    /// unchanged in that case too.
    pub fn add_polygon(
        &mut self,
        polygon: &Polygon,
        extrusion_height: f32,
    ) -> Result<PolygonOutcome, TessellationError> {
        if let Some(hit) = find_intersecting_rings(polygon) {
            debug!(
                "polygon rings {} and {} intersect each other - skipping",
                hit.first, hit.second
            );
            return Ok(PolygonOutcome::Rejected(hit));
        }

        let exterior = self.origin.localize(polygon.exterior_ring());
        let holes: Vec<Vec<LocalVertex>> = polygon
            .interior_rings()
            .iter()
            .map(|ring| self.origin.localize(ring))
            .collect();

        let roof_vertices = self.add_roof(&exterior, &holes, extrusion_height)?;

        let mut wall_vertices = 0;
        if extrusion_height != 0.0 {
            wall_vertices += make_walls(&exterior, RingRole::Exterior, extrusion_height, &mut self.buffer);
            for hole in &holes {
                wall_vertices += make_walls(hole, RingRole::Interior, extrusion_height, &mut self.buffer);
            }
        }

        trace!(
            "tessellated polygon: {} roof vertices, {} wall vertices",
            roof_vertices,
            wall_vertices
        );

        Ok(PolygonOutcome::Tessellated {
            roof_vertices,
            wall_vertices,
        })
    }

    /// Tessellates each part of a multi-polygon in order.
    ///
    /// Rejected parts are skipped. The first triangulation error stops
    /// processing; parts added before it stay in the buffer.
    pub fn add_multi_polygon(
        &mut self,
        parts: &[Polygon],
        extrusion_height: f32,
    ) -> Result<Vec<PolygonOutcome>, TessellationError> {
        parts
            .iter()
            .map(|part| self.add_polygon(part, extrusion_height))
            .collect()
    }

    fn add_roof(
        &mut self,
        exterior: &[LocalVertex],
        holes: &[Vec<LocalVertex>],
        extrusion_height: f32,
    ) -> Result<usize, TessellationError> {
        let outer: Vec<DVec2> = exterior.iter().map(|v| v.position).collect();
        let hole_rings: Vec<Vec<DVec2>> = holes
            .iter()
            .map(|h| h.iter().map(|v| v.position).collect())
            .collect();

        let triangulation = triangulate(&outer, &hole_rings).map_err(|e| {
            warn!("polygon triangulation failed: {e}");
            e
        })?;

        // Triangle corners index the exterior points first, then each hole.
        let vertices: Vec<LocalVertex> = exterior
            .iter()
            .chain(holes.iter().flatten())
            .copied()
            .collect();

        let count = triangulation.triangle_count() * 3;
        self.buffer.reserve_vertices(count);
        for index in triangulation.corners() {
            let v = vertices[index];
            self.buffer.push_roof_vertex(
                v.position.x as f32,
                extrusion_height + v.height,
                v.position.y as f32,
            );
        }
        Ok(count)
    }
}

impl Default for Tessellator {
    fn default() -> Self {
        Self::from_config(TessellatorConfig::default())
    }
}

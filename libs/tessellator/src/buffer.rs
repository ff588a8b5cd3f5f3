//! # Vertex Buffer
//!
//! Append-only interleaved float stream shared by every polygon a
//! tessellator processes.
//!
//! Each vertex record is `[x, height, -y]`, optionally followed by
//! `[nx, ny, nz]`. The layout is fixed when the buffer is created.
//! Geometry is an unindexed triangle list; no vertex is ever merged.

use config::constants::{floats_per_vertex, vertex_stride, ROOF_NORMAL};
use glam::Vec3;

/// Growable interleaved vertex data.
///
/// # Example
///
/// ```rust
/// use glam::Vec3;
/// use polygon_tessellator::VertexBuffer;
///
/// let mut buffer = VertexBuffer::new(true);
/// buffer.push_vertex(1.0, 5.0, 2.0, Vec3::Y);
/// assert_eq!(buffer.data(), &[1.0, 5.0, -2.0, 0.0, 1.0, 0.0]);
/// assert_eq!(buffer.stride(), 24);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct VertexBuffer {
    data: Vec<f32>,
    add_normals: bool,
}

impl VertexBuffer {
    /// Creates an empty buffer.
    pub fn new(add_normals: bool) -> Self {
        Self {
            data: Vec::new(),
            add_normals,
        }
    }

    /// Returns true if vertex records carry normals.
    #[inline]
    pub fn has_normals(&self) -> bool {
        self.add_normals
    }

    /// Bytes per vertex record.
    #[inline]
    pub fn stride(&self) -> usize {
        vertex_stride(self.add_normals)
    }

    /// Floats per vertex record.
    #[inline]
    pub fn floats_per_vertex(&self) -> usize {
        floats_per_vertex(self.add_normals)
    }

    /// Reserves room for `vertex_count` more vertices.
    pub fn reserve_vertices(&mut self, vertex_count: usize) {
        self.data.reserve(vertex_count * self.floats_per_vertex());
    }

    /// Appends one vertex. `y` is the local Y coordinate; it is written negated.
    ///
    /// The normal is dropped when the buffer has no normals.
    #[inline]
    pub fn push_vertex(&mut self, x: f32, height: f32, y: f32, normal: Vec3) {
        self.data.extend_from_slice(&[x, height, -y]);
        if self.add_normals {
            self.data.extend_from_slice(&[normal.x, normal.y, normal.z]);
        }
    }

    /// Appends one roof vertex with the fixed upward normal.
    #[inline]
    pub fn push_roof_vertex(&mut self, x: f32, height: f32, y: f32) {
        self.push_vertex(x, height, y, Vec3::from_array(ROOF_NORMAL));
    }

    /// Returns the raw float data.
    #[inline]
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Returns true if nothing was written.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of complete vertex records.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.data.len() / self.floats_per_vertex()
    }

    /// Consumes the buffer and returns the float data.
    pub fn into_inner(self) -> Vec<f32> {
        self.data
    }

    /// Borrows the data as raw bytes in native byte order, without copying.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.data)
    }

    /// Exports the data as little-endian bytes, whatever the host byte order.
    pub fn to_le_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.data.len() * std::mem::size_of::<f32>());
        for value in &self.data {
            bytes.extend_from_slice(&value.to_le_bytes());
        }
        bytes
    }
}

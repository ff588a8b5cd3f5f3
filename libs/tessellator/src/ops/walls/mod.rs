//! # Wall Extrusion
//!
//! Emits one vertical quad per ring edge, spanning from the edge end point's
//! height up by the extrusion height.
//!
//! ## Winding
//!
//! Exterior rings are walked clockwise and holes counter-clockwise, so that
//! seen from outside the solid every wall is front-facing. A ring whose
//! natural orientation does not match its role is walked in reverse.
//!
//! ## Quad layout
//!
//! For an edge `p0 -> p1` with heights `low` and `high`, the two triangles are
//! `(p0 high, p1 high, p0 low)` and `(p0 low, p1 high, p1 low)`. All six
//! vertices share the edge-perpendicular normal; walls are vertical so the
//! normal has no vertical component.


use crate::buffer::VertexBuffer;
use crate::ops::orientation::{orientation, Orientation};
use crate::origin::LocalVertex;
use config::constants::EPSILON;
use glam::{DVec2, Vec3};

/// Role of a ring within its polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RingRole {
    /// Outer boundary
    Exterior,
    /// Hole
    Interior,
}

impl RingRole {
    /// Winding the walls of this ring are emitted with.
    #[inline]
    pub fn wall_winding(self) -> Orientation {
        match self {
            RingRole::Exterior => Orientation::Clockwise,
            RingRole::Interior => Orientation::CounterClockwise,
        }
    }
}

/// Normal of the wall standing on edge `(x0, y0) -> (x1, y1)`.
///
/// Zero-length edges get a zero normal.
pub fn wall_normal(x0: f32, y0: f32, x1: f32, y1: f32) -> Vec3 {
    let dx = x1 - x0;
    let dy = -(y1 - y0);

    // perpendicular to [dx, dy] in the ground plane is [-dy, dx]
    let n = Vec3::new(-dy, 0.0, dx);
    let len = n.length();
    if (len as f64) > EPSILON {
        n / len
    } else {
        Vec3::ZERO
    }
}

/// Appends a single wall quad as two triangles.
pub fn make_quad(x0: f32, y0: f32, x1: f32, y1: f32, z_low: f32, z_high: f32, out: &mut VertexBuffer) {
    let n = wall_normal(x0, y0, x1, y1);

    // triangle 1
    out.push_vertex(x0, z_high, y0, n);
    out.push_vertex(x1, z_high, y1, n);
    out.push_vertex(x0, z_low, y0, n);

    // triangle 2
    out.push_vertex(x0, z_low, y0, n);
    out.push_vertex(x1, z_high, y1, n);
    out.push_vertex(x1, z_low, y1, n);
}

/// Order in which the ring's points are visited for the given role.
///
/// Both directions start at the first point; the reverse walk then visits
/// the remaining points from last to second.
fn walk_order(ring: &[LocalVertex], role: RingRole) -> Vec<usize> {
    let n = ring.len();
    let positions: Vec<DVec2> = ring.iter().map(|v| v.position).collect();

    if orientation(&positions) == role.wall_winding() {
        (0..n).collect()
    } else {
        std::iter::once(0).chain((1..n).rev()).collect()
    }
}

/// Emits the walls of one ring and returns the number of vertices written.
///
/// Each quad rises from the height of the edge's end point to that height
/// plus `extrusion_height`. Rings with fewer than two points have no edges.
pub fn make_walls(ring: &[LocalVertex], role: RingRole, extrusion_height: f32, out: &mut VertexBuffer) -> usize {
    let n = ring.len();
    if n < 2 {
        return 0;
    }

    let order = walk_order(ring, role);
    let before = out.vertex_count();
    out.reserve_vertices(n * config::constants::VERTICES_PER_QUAD);

    for i in 0..n {
        let prev = ring[order[i]];
        let cur = ring[order[(i + 1) % n]];

        let x0 = prev.position.x as f32;
        let y0 = prev.position.y as f32;
        let x1 = cur.position.x as f32;
        let y1 = cur.position.y as f32;
        let height = cur.height;

        make_quad(x0, y0, x1, y1, height, height + extrusion_height, out);
    }

    out.vertex_count() - before
}

//! # Tessellation Operations
//!
//! The stages a polygon goes through on its way into the vertex buffer:
//! ring guard, orientation, roof triangulation and wall extrusion.

pub mod intersect;
pub mod orientation;
pub mod triangulate;
pub mod walls;

pub use intersect::{find_intersecting_rings, rings_intersect, RingIntersection};
pub use orientation::{is_counter_clockwise, orientation, signed_area_doubled, Orientation};
pub use triangulate::{triangulate, Triangulation};
pub use walls::{make_walls, RingRole};

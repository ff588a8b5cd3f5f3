//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants
//! and helper functions.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_positive() {
    assert!(EPSILON > 0.0, "EPSILON must be positive");
}

#[test]
fn test_epsilon_is_small() {
    assert!(EPSILON < 1e-6, "EPSILON should be small for precision");
}

// =============================================================================
// VERTEX LAYOUT TESTS
// =============================================================================

#[test]
fn test_float_size_is_four_bytes() {
    assert_eq!(FLOAT_SIZE_BYTES, 4);
}

#[test]
fn test_stride_without_normals() {
    assert_eq!(floats_per_vertex(false), 3);
    assert_eq!(vertex_stride(false), 12);
}

#[test]
fn test_stride_with_normals() {
    assert_eq!(floats_per_vertex(true), 6);
    assert_eq!(vertex_stride(true), 24);
}

#[test]
fn test_roof_normal_points_up() {
    let [x, y, z] = ROOF_NORMAL;
    assert_eq!((x, y, z), (0.0, 1.0, 0.0));
}

#[test]
fn test_quad_is_two_triangles() {
    assert_eq!(VERTICES_PER_QUAD, 2 * 3);
}

#[test]
fn test_min_ring_points_forms_triangle() {
    assert_eq!(MIN_RING_POINTS, 3);
}

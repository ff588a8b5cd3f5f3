//! Property tests for ring orientation and polygon tessellation.

use glam::{DVec2, DVec3};
use polygon_tessellator::ops::{orientation, signed_area_doubled};
use polygon_tessellator::{Polygon, PolygonOutcome, Ring, Tessellator};
use proptest::prelude::*;
use std::f64::consts::TAU;

/// Star-shaped ring around the origin: one point per angular sector, radius in [5, 10].
fn star_ring() -> impl Strategy<Value = Ring> {
    (4usize..16).prop_flat_map(|n| {
        (
            prop::collection::vec(5.0f64..10.0, n),
            prop::collection::vec(-0.3f64..0.3, n),
            prop::collection::vec(-20.0f64..20.0, n),
        )
            .prop_map(move |(radii, jitter, heights)| {
                let step = TAU / n as f64;
                Ring::new((0..n).map(|i| {
                    let angle = (i as f64 + jitter[i] * 0.5) * step;
                    DVec3::new(radii[i] * angle.cos(), radii[i] * angle.sin(), heights[i])
                }))
            })
    })
}

/// Regular polygon of radius 1 around the origin, inside every star ring.
fn small_hole(sides: usize) -> Ring {
    let step = TAU / sides as f64;
    Ring::new((0..sides).map(|i| {
        let angle = i as f64 * step;
        DVec3::new(angle.cos(), angle.sin(), f64::NAN)
    }))
}

fn star_polygon() -> impl Strategy<Value = Polygon> {
    (star_ring(), prop::option::of(3usize..8)).prop_map(|(exterior, hole)| match hole {
        Some(sides) => Polygon::with_holes(exterior, vec![small_hole(sides)]),
        None => Polygon::new(exterior),
    })
}

/// Axis-aligned integer rectangle with an integer rectangular hole.
fn integer_polygon() -> impl Strategy<Value = Polygon> {
    (-50i32..50, -50i32..50, 4i32..40, 4i32..40).prop_map(|(x, y, w, h)| {
        let (x0, y0, x1, y1) = (x as f64, y as f64, (x + w) as f64, (y + h) as f64);
        let exterior = Ring::from_xy(&[(x0, y0), (x1, y0), (x1, y1), (x0, y1)]);
        let hole = Ring::from_xy(&[(x0 + 1.0, y0 + 1.0), (x1 - 1.0, y0 + 1.0), (x1 - 1.0, y1 - 1.0), (x0 + 1.0, y1 - 1.0)]);
        Polygon::with_holes(exterior, vec![hole])
    })
}

fn integer_points() -> impl Strategy<Value = Vec<DVec2>> {
    prop::collection::vec((-1000i32..1000, -1000i32..1000), 3..12).prop_map(|coords| {
        coords
            .into_iter()
            .map(|(x, y)| DVec2::new(x as f64, y as f64))
            .collect()
    })
}

proptest! {
    #[test]
    fn reversing_points_flips_orientation(points in integer_points()) {
        prop_assume!(signed_area_doubled(&points) != 0.0);

        let mut reversed = points.clone();
        reversed.reverse();
        prop_assert_eq!(orientation(&reversed), orientation(&points).reversed());
    }

    #[test]
    fn walls_have_one_quad_per_edge(polygon in star_polygon(), extrusion in 0.5f32..50.0) {
        let mut tess = Tessellator::new(0.0, 0.0, false);
        let outcome = tess.add_polygon(&polygon, extrusion).unwrap();

        match outcome {
            PolygonOutcome::Tessellated { roof_vertices, wall_vertices } => {
                prop_assert_eq!(wall_vertices, 6 * polygon.edge_count());
                prop_assert!(roof_vertices > 0);
                prop_assert_eq!(roof_vertices % 3, 0);
            }
            PolygonOutcome::Rejected(hit) => prop_assert!(false, "unexpected rejection {:?}", hit),
        }
        prop_assert_eq!(tess.vertex_count(), outcome.vertex_count());
    }

    #[test]
    fn roof_heights_follow_input_points(exterior in star_ring(), extrusion in -10.0f32..10.0) {
        let mut tess = Tessellator::new(0.0, 0.0, false);
        let outcome = tess.add_polygon(&Polygon::new(exterior.clone()), extrusion).unwrap();
        let roof_floats = outcome.vertex_count() * 3;

        for v in tess.data()[..roof_floats].chunks_exact(3) {
            let source = exterior
                .points()
                .iter()
                .find(|p| p.x as f32 == v[0] && -(p.y as f32) == v[2])
                .unwrap();
            prop_assert_eq!(v[1], extrusion + source.z as f32);
        }
    }

    #[test]
    fn adding_twice_repeats_the_bytes(polygon in star_polygon(), normals in any::<bool>()) {
        let mut tess = Tessellator::new(0.0, 0.0, normals);
        tess.add_polygon(&polygon, 3.0).unwrap();
        tess.add_polygon(&polygon, 3.0).unwrap();

        let bytes = tess.to_le_bytes();
        let (first, second) = bytes.split_at(bytes.len() / 2);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn translation_with_origin_is_invisible(
        polygon in integer_polygon(),
        dx in -2_000_000i32..2_000_000,
        dy in -2_000_000i32..2_000_000,
        normals in any::<bool>(),
    ) {
        let offset = DVec2::new(dx as f64, dy as f64);
        let mut moved = polygon.clone();
        moved.translate(offset);

        let mut local = Tessellator::new(0.0, 0.0, normals);
        let mut far = Tessellator::new(offset.x, offset.y, normals);
        local.add_polygon(&polygon, 7.0).unwrap();
        far.add_polygon(&moved, 7.0).unwrap();

        prop_assert_eq!(local.to_le_bytes(), far.to_le_bytes());
    }
}

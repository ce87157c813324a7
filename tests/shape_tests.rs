mod support;

use brushy::{Axis, Brush, BrushError};
use brushy::float_types::PI;
use nalgebra::{Point3, Vector3};
use support::*;

#[test]
fn default_cylinder_has_quad_sides_and_polygon_caps() {
    let brush = Brush::default_cylinder();
    assert_eq!(brush.face_count(), 18);

    for side in 0..16 {
        assert_eq!(brush.surface(side).unwrap().vertex_count(), 4, "side {side}");
    }
    for cap in [16, 17] {
        assert_eq!(brush.surface(cap).unwrap().vertex_count(), 16, "cap {cap}");
    }

    assert_eq!(brush.hull_points().len(), 32);
    assert!(point_approx_eq(&brush.centroid(), &Point3::origin(), 1e-9));
    assert_clockwise_from_outside(&brush);
}

#[test]
fn cylinder_caps_sit_at_half_height() {
    let brush = Brush::cylinder(2.0, 3.0, 6, Axis::Z).unwrap();
    assert_eq!(brush.face_count(), 8);
    for p in brush.face_vertex_positions(6).unwrap() {
        assert!(approx_eq(p.z, 1.5, 1e-9));
    }
    for p in brush.face_vertex_positions(7).unwrap() {
        assert!(approx_eq(p.z, -1.5, 1e-9));
    }

    // Hexagon corners lie at radius / cos(30°)
    let corner_radius = 2.0 / (PI / 6.0).cos();
    for p in brush.face_vertex_positions(6).unwrap() {
        assert!(approx_eq(Vector3::new(p.x, p.y, 0.0).norm(), corner_radius, 1e-9));
    }
}

#[test]
fn cylinder_rejects_too_few_sides() {
    assert!(matches!(
        Brush::cylinder(1.0, 1.0, 2, Axis::Y),
        Err(BrushError::InvalidShape(_))
    ));
}

#[test]
fn cuboid_spans_its_extents() {
    let brush = Brush::cuboid(Vector3::new(2.0, 0.5, 1.0));
    let points = brush.hull_points();
    assert_eq!(points.len(), 8);
    for p in points {
        assert!(approx_eq(p.x.abs(), 2.0, 1e-9));
        assert!(approx_eq(p.y.abs(), 0.5, 1e-9));
        assert!(approx_eq(p.z.abs(), 1.0, 1e-9));
    }
}

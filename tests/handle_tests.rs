mod support;

use brushy::Brush;
use brushy::float_types::parry3d::query::Ray;
use nalgebra::{Point3, Vector3};
use support::*;

#[test]
fn one_handle_per_face_on_its_centroid() {
    let brush = Brush::unit_box();
    let handles = brush.handles();
    assert_eq!(handles.len(), 6);
    for handle in &handles {
        assert!(point_approx_eq(&handle.position, &Point3::from(handle.plane.normal), 1e-9));
        assert_eq!(handle.plane, brush.face_plane(handle.index).unwrap());
    }
}

#[test]
fn outline_is_a_closed_loop() {
    let brush = Brush::unit_box();
    let outline = brush.face_outline(0).unwrap();
    assert_eq!(outline.len(), 4);
    for k in 0..outline.len() {
        assert_eq!(outline[k][1], outline[(k + 1) % outline.len()][0]);
    }
}

#[test]
fn dragging_moves_the_face() {
    let mut brush = Brush::unit_box();
    let ray = Ray::new(Point3::new(3.0, 0.0, 10.0), -Vector3::z());
    let w = brush.drag_face(0, &ray).unwrap();
    assert!(approx_eq(w, 3.0, 1e-9));
    assert!(brush.is_dirty());
    for p in brush.face_vertex_positions(0).unwrap() {
        assert!(approx_eq(p.x, 3.0, 1e-9));
    }

    // A ray along the normal leaves the brush untouched
    brush.rebuild();
    let parallel = Ray::new(Point3::new(0.0, 0.5, 0.0), Vector3::x());
    assert!(approx_eq(brush.drag_face(0, &parallel).unwrap(), 3.0, 1e-9));
    assert!(!brush.is_dirty());
}

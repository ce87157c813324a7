//! Test support library
//! Provides various helper functions & utilities for tests.
#![allow(dead_code)]

use brushy::{
    Brush, FaceSurface,
    float_types::Real,
    vertex::points_coincide,
    winding::{signed_area, winding_axes},
};
use nalgebra::Point3;

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

pub fn point_approx_eq(a: &Point3<Real>, b: &Point3<Real>, eps: Real) -> bool {
    (a - b).norm() < eps
}

/// Unique positions over all faces of `brush`.
pub fn unique_positions(brush: &Brush) -> Vec<Point3<Real>> {
    let mut unique: Vec<Point3<Real>> = Vec::new();
    for i in 0..brush.face_count() {
        for p in brush.face_vertex_positions(i).unwrap() {
            if !unique.iter().any(|q| points_coincide(q, &p, 1e-5)) {
                unique.push(p);
            }
        }
    }
    unique
}

/// `true` if `points` contains something within `eps` of `p`.
pub fn contains_point(points: &[Point3<Real>], p: &Point3<Real>, eps: Real) -> bool {
    points.iter().any(|q| point_approx_eq(q, p, eps))
}

/// Signed area of a face polygon in its own winding frame.
pub fn face_area(surface: &FaceSurface, normal: &nalgebra::Vector3<Real>) -> Real {
    let (u, v) = winding_axes(&surface.vertices, normal, &surface.tangent_basis)
        .expect("face has a winding frame");
    signed_area(&surface.vertices, &u, &v)
}

/// Checks that consecutive vertices of every non-degenerate face turn the same
/// way around the face normal (clockwise seen from outside).
pub fn assert_clockwise_from_outside(brush: &Brush) {
    for i in 0..brush.face_count() {
        let surface = brush.surface(i).unwrap();
        if surface.is_degenerate() {
            continue;
        }
        let normal = brush.face_plane(i).unwrap().normal;
        let n = surface.vertices.len();
        for k in 0..n {
            let a = surface.vertices[k].pos;
            let b = surface.vertices[(k + 1) % n].pos;
            let c = surface.vertices[(k + 2) % n].pos;
            let turn = (b - a).cross(&(c - b)).dot(&normal);
            assert!(turn < 1e-9, "face {i} turns the wrong way at vertex {k}: {turn}");
        }
    }
}
